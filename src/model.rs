use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ApiConfig;
use crate::files::FileInfo;
use crate::image_edit::{CropRegion, EditLimits, RotationAngle};
use crate::{get_current_time_ms, AppError};

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(DocumentId);
typed_id!(FileId);

/// Outcome of the single identity probe the session router performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unknown,
    Checking,
    Anonymous,
    Authenticated,
}

/// Identity payload of the user-info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub anonymous: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Crop,
    Rotation,
}

impl EditKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Rotation => "rotation",
        }
    }
}

/// The cropping-tool handle: present only while actively cropping.
/// Rotation deltas received while this exists accumulate here instead
/// of on the base accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSession {
    pub region: Option<CropRegion>,
    pub rotation: RotationAngle,
}

/// Transient edit state; discarded on cancel, successful save, and
/// view exit. Never survives navigation to a different file.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    pub rotation: RotationAngle,
    pub crop: Option<CropSession>,
}

impl EditSession {
    #[must_use]
    pub const fn is_cropping(&self) -> bool {
        self.crop.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Completed,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ModalState {
    Open,
    Closed { reason: CloseReason },
}

impl ModalState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

pub struct Model {
    pub api: ApiConfig,
    pub edit_limits: EditLimits,

    pub session: SessionState,

    pub document_id: Option<DocumentId>,
    pub requested_file_id: Option<FileId>,
    pub files: Vec<FileInfo>,
    pub selected_file: Option<FileInfo>,
    pub files_loading: bool,

    pub modal: ModalState,
    pub transition_guard_armed: bool,

    pub edit: EditSession,
    pub cache_bust: Option<u64>,

    pub epoch: u64,
    pub active_error: Option<AppError>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            edit_limits: EditLimits::default(),
            session: SessionState::default(),
            document_id: None,
            requested_file_id: None,
            files: Vec::new(),
            selected_file: None,
            files_loading: false,
            modal: ModalState::Closed {
                reason: CloseReason::Dismissed,
            },
            transition_guard_armed: false,
            edit: EditSession::default(),
            cache_bust: None,
            epoch: 0,
            active_error: None,
        }
    }
}

impl Model {
    pub fn set_error(&mut self, error: AppError) {
        self.active_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.active_error = None;
    }

    /// Start a fresh preview activation. Everything belonging to the
    /// previous view, including any edit session, is discarded, and
    /// responses still in flight for it become stale.
    pub fn activate_preview(&mut self, document_id: DocumentId, file_id: FileId) {
        self.epoch += 1;
        self.document_id = Some(document_id);
        self.requested_file_id = Some(file_id);
        self.files = Vec::new();
        self.selected_file = None;
        self.files_loading = true;
        self.modal = ModalState::Open;
        self.transition_guard_armed = true;
        self.edit = EditSession::default();
        self.cache_bust = None;
        self.active_error = None;
    }

    pub fn close_modal(&mut self, reason: CloseReason) {
        self.modal = ModalState::Closed { reason };
        self.edit = EditSession::default();
    }

    /// Scan a list for the requested file and adopt the first match as
    /// the selection. Returns whether a match was found.
    pub fn select_from(&mut self, files: &[FileInfo]) -> bool {
        let Some(wanted) = &self.requested_file_id else {
            return false;
        };
        match crate::files::find_file(files, wanted) {
            Some(file) => {
                self.selected_file = Some(file.clone());
                true
            }
            None => false,
        }
    }

    /// Fresh cache-busting value, strictly greater than the previous
    /// one even when two saves land in the same millisecond.
    pub fn next_cache_bust(&mut self) -> u64 {
        let now = get_current_time_ms();
        let next = match self.cache_bust {
            Some(previous) => now.max(previous + 1),
            None => now,
        };
        self.cache_bust = Some(next);
        next
    }

    #[must_use]
    pub fn is_stale(&self, epoch: u64) -> bool {
        epoch != self.epoch
    }
}
