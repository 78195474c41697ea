mod navigate;
mod viewer;

pub use self::navigate::{
    HistoryMode, NavTarget, Navigate, NavigateOperation, DOCUMENT_DEFAULT_STATE, FILE_VIEW_STATE,
    LOGIN_STATE,
};
pub use self::viewer::{Viewer, ViewerOperation};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppRender = Render<Event>;
pub type AppNavigate = Navigate<Event>;
pub type AppViewer = Viewer<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub navigate: Navigate<Event>,
    pub viewer: Viewer<Event>,
}
