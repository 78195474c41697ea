//! Just enough `multipart/form-data` to PUT one file part to the data
//! endpoint. The boundary owns the content type; callers must send the
//! `content_type()` header verbatim and nothing else.

use uuid::Uuid;

const CRLF: &str = "\r\n";

#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: format!("----docs-form-{}", Uuid::new_v4().simple()),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    #[must_use]
    pub fn file_part(
        mut self,
        field_name: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Self {
        self.body
            .extend_from_slice(format!("--{}{CRLF}", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"{CRLF}"
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}{CRLF}{CRLF}").as_bytes());
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(CRLF.as_bytes());
        self
    }

    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--{CRLF}", self.boundary).as_bytes());
        self.body
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
