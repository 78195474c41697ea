use crux_http::Response;

use crate::files::FileListData;
use crate::image_edit::CropRegion;
use crate::model::{DocumentId, EditKind, FileId, UserInfo};

/// Shorthand for the payload of an HTTP continuation event.
pub type HttpResult<T> = crux_http::Result<Response<T>>;

#[derive(Debug)]
pub enum Event {
    Noop,

    // Session router
    SessionStarted,
    UserInfoReceived(Box<HttpResult<UserInfo>>),

    // Preview lifecycle
    PreviewOpened {
        document_id: DocumentId,
        file_id: FileId,
    },
    FileListReceived {
        epoch: u64,
        result: Box<HttpResult<FileListData>>,
    },
    VersionListReceived {
        epoch: u64,
        result: Box<HttpResult<FileListData>>,
    },
    CloseRequested,
    TransitionStarted {
        to_state: String,
    },

    // Paging
    GoNextFile,
    GoPreviousFile,

    // Display actions
    OpenFileRequested,
    OpenContentRequested,
    PrintRequested,

    // Image edit
    RotateRequested {
        degrees: i32,
    },
    RotationSaveRequested,
    CropStarted,
    CropRegionChanged {
        region: CropRegion,
    },
    CropCancelled,
    CropSaveRequested,
    EditSourceLoaded {
        epoch: u64,
        kind: EditKind,
        result: Box<HttpResult<Vec<u8>>>,
    },
    EditUploadCompleted {
        epoch: u64,
        kind: EditKind,
        result: Box<HttpResult<Vec<u8>>>,
    },

    DismissError,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::SessionStarted => "session_started",
            Self::UserInfoReceived(_) => "user_info_received",
            Self::PreviewOpened { .. } => "preview_opened",
            Self::FileListReceived { .. } => "file_list_received",
            Self::VersionListReceived { .. } => "version_list_received",
            Self::CloseRequested => "close_requested",
            Self::TransitionStarted { .. } => "transition_started",
            Self::GoNextFile => "go_next_file",
            Self::GoPreviousFile => "go_previous_file",
            Self::OpenFileRequested => "open_file_requested",
            Self::OpenContentRequested => "open_content_requested",
            Self::PrintRequested => "print_requested",
            Self::RotateRequested { .. } => "rotate_requested",
            Self::RotationSaveRequested => "rotation_save_requested",
            Self::CropStarted => "crop_started",
            Self::CropRegionChanged { .. } => "crop_region_changed",
            Self::CropCancelled => "crop_cancelled",
            Self::CropSaveRequested => "crop_save_requested",
            Self::EditSourceLoaded { .. } => "edit_source_loaded",
            Self::EditUploadCompleted { .. } => "edit_upload_completed",
            Self::DismissError => "dismiss_error",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::GoNextFile
                | Self::GoPreviousFile
                | Self::OpenFileRequested
                | Self::OpenContentRequested
                | Self::PrintRequested
                | Self::CloseRequested
                | Self::RotateRequested { .. }
                | Self::RotationSaveRequested
                | Self::CropStarted
                | Self::CropRegionChanged { .. }
                | Self::CropCancelled
                | Self::CropSaveRequested
                | Self::DismissError
        )
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::Noop
    }
}
