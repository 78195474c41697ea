//! Serializable projection of [`crate::model::Model`] for the shell.

use serde::{Deserialize, Serialize};

use crate::model::{ModalState, SessionState};
use crate::{AppError, ErrorSeverity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCard {
    pub id: String,
    pub name: Option<String>,
    pub mimetype: String,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewView {
    pub modal: ModalState,
    pub loading: bool,
    pub file: Option<FileCard>,
    pub can_display_preview: bool,
    pub is_image: bool,
    pub has_next: bool,
    pub has_previous: bool,
    /// Source URL for the rendered preview image, including the
    /// current cache-busting parameter when an edit has been saved.
    pub preview_url: Option<String>,
    /// Pending display rotation; presentational until saved.
    pub rotation_degrees: i32,
    pub rotate_transition_ms: u64,
    pub is_cropping: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFacingError {
    pub message: String,
    pub is_transient: bool,
    pub is_retryable: bool,
    pub error_code: String,
}

impl From<&AppError> for UserFacingError {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.user_facing_message(),
            is_transient: e.severity == ErrorSeverity::Transient,
            is_retryable: e.is_retryable(),
            error_code: e.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub session: SessionState,
    pub preview: PreviewView,
    pub error: Option<UserFacingError>,
}
