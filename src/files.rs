//! File collection held by the preview: an ordered sequence whose
//! adjacency defines next/previous.

use serde::{Deserialize, Serialize};

use crate::model::FileId;
use crate::{IMAGE_MIME_PREFIX, PDF_MIMETYPE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: FileId,
    #[serde(default)]
    pub name: Option<String>,
    pub mimetype: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub create_date: Option<u64>,
    #[serde(default)]
    pub version: Option<u32>,
}

impl FileInfo {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mimetype.starts_with(IMAGE_MIME_PREFIX)
    }

    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mimetype == PDF_MIMETYPE
    }
}

/// Wire envelope for both the primary list and the version fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileListData {
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

#[must_use]
pub fn find_file<'a>(files: &'a [FileInfo], id: &FileId) -> Option<&'a FileInfo> {
    files.iter().find(|f| &f.id == id)
}

fn position_of(files: &[FileInfo], id: &FileId) -> Option<usize> {
    files.iter().position(|f| &f.id == id)
}

/// The file after `current` in the collection, or `None` at the end or
/// when `current` is not part of the collection at all.
#[must_use]
pub fn next_file<'a>(files: &'a [FileInfo], current: &FileId) -> Option<&'a FileInfo> {
    position_of(files, current).and_then(|index| files.get(index + 1))
}

/// The file before `current`, or `None` at the start or on a miss.
#[must_use]
pub fn previous_file<'a>(files: &'a [FileInfo], current: &FileId) -> Option<&'a FileInfo> {
    position_of(files, current).and_then(|index| index.checked_sub(1).map(|i| &files[i]))
}

/// An inline preview is shown for anything but PDFs, which get their
/// own embedded viewer shell-side.
#[must_use]
pub fn can_display_preview(selected: Option<&FileInfo>) -> bool {
    selected.is_some_and(|file| !file.is_pdf())
}

#[must_use]
pub fn is_image(selected: Option<&FileInfo>) -> bool {
    selected.is_some_and(FileInfo::is_image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, mimetype: &str) -> FileInfo {
        FileInfo {
            id: FileId::new(id),
            name: Some(format!("{id}.bin")),
            mimetype: mimetype.into(),
            size: Some(1024),
            create_date: None,
            version: None,
        }
    }

    fn collection() -> Vec<FileInfo> {
        vec![
            file("A", "image/jpeg"),
            file("B", "image/png"),
            file("C", "application/pdf"),
        ]
    }

    #[test]
    fn adjacency_in_the_middle() {
        let files = collection();
        let current = FileId::new("B");
        assert_eq!(previous_file(&files, &current).unwrap().id.as_str(), "A");
        assert_eq!(next_file(&files, &current).unwrap().id.as_str(), "C");
    }

    #[test]
    fn boundaries_return_none() {
        let files = collection();
        assert!(previous_file(&files, &FileId::new("A")).is_none());
        assert!(next_file(&files, &FileId::new("C")).is_none());
    }

    #[test]
    fn missing_id_has_no_neighbors() {
        let files = collection();
        let ghost = FileId::new("Z");
        assert!(next_file(&files, &ghost).is_none());
        assert!(previous_file(&files, &ghost).is_none());
    }

    #[test]
    fn empty_collection_is_harmless() {
        let files: Vec<FileInfo> = Vec::new();
        assert!(find_file(&files, &FileId::new("A")).is_none());
        assert!(next_file(&files, &FileId::new("A")).is_none());
    }

    #[test]
    fn lookups_do_not_reorder() {
        let files = collection();
        let before: Vec<_> = files.iter().map(|f| f.id.clone()).collect();
        let _ = next_file(&files, &FileId::new("B"));
        let _ = previous_file(&files, &FileId::new("B"));
        let after: Vec<_> = files.iter().map(|f| f.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn pdf_is_not_previewable() {
        let files = collection();
        assert!(can_display_preview(find_file(&files, &FileId::new("A"))));
        assert!(!can_display_preview(find_file(&files, &FileId::new("C"))));
        assert!(!can_display_preview(None));
    }

    #[test]
    fn image_predicate_uses_mime_prefix() {
        let png = file("P", "image/png");
        let svg = file("S", "image/svg+xml");
        let doc = file("D", "application/msword");
        assert!(is_image(Some(&png)));
        assert!(is_image(Some(&svg)));
        assert!(!is_image(Some(&doc)));
        assert!(!is_image(None));
    }

    #[test]
    fn list_envelope_tolerates_missing_fields() {
        let data: FileListData =
            serde_json::from_str(r#"{"files":[{"id":"A","mimetype":"image/jpeg"}]}"#).unwrap();
        assert_eq!(data.files.len(), 1);
        assert!(data.files[0].name.is_none());

        let empty: FileListData = serde_json::from_str("{}").unwrap();
        assert!(empty.files.is_empty());
    }
}
