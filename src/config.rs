//! API surface consumed by the client core.
//!
//! The server ignores the `ts` parameter entirely; it exists to defeat
//! browser caching after an in-place file update.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentId, FileId};

pub const DEFAULT_API_BASE: &str = "/api";

/// Which rendition of a file's data to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataVariant {
    Raw,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE.into(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        Self { base_path }
    }

    #[must_use]
    pub fn user_info_url(&self) -> String {
        format!("{}/user", self.base_path)
    }

    #[must_use]
    pub fn file_list_url(&self, document_id: &DocumentId) -> String {
        format!("{}/file/list?id={}", self.base_path, document_id)
    }

    #[must_use]
    pub fn file_versions_url(&self, file_id: &FileId) -> String {
        format!("{}/file/{}/versions", self.base_path, file_id)
    }

    #[must_use]
    pub fn file_data_url(
        &self,
        file_id: &FileId,
        variant: DataVariant,
        cache_bust: Option<u64>,
    ) -> String {
        let mut url = format!("{}/file/{}/data", self.base_path, file_id);
        let mut separator = '?';
        if variant == DataVariant::Content {
            url.push_str("?size=content");
            separator = '&';
        }
        if let Some(ts) = cache_bust {
            url.push(separator);
            url.push_str(&format!("ts={ts}"));
        }
        url
    }

    #[must_use]
    pub fn file_upload_url(&self, file_id: &FileId) -> String {
        format!("{}/file/{}/data", self.base_path, file_id)
    }
}
