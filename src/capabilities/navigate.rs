//! Navigation capability: the shell owns the router, the core only
//! names the destination.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::model::{DocumentId, FileId};

pub const LOGIN_STATE: &str = "login";
pub const DOCUMENT_DEFAULT_STATE: &str = "document.default";
pub const FILE_VIEW_STATE: &str = "document.view.file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    Login,
    DocumentDefault,
    DocumentFile {
        document_id: DocumentId,
        file_id: FileId,
    },
}

impl NavTarget {
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_STATE,
            Self::DocumentDefault => DOCUMENT_DEFAULT_STATE,
            Self::DocumentFile { .. } => FILE_VIEW_STATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigateOperation {
    Go {
        target: NavTarget,
        location: HistoryMode,
        notify: bool,
    },
}

impl Operation for NavigateOperation {
    type Output = ();
}

pub struct Navigate<Ev> {
    context: CapabilityContext<NavigateOperation, Ev>,
}

impl<Ev> Capability<Ev> for Navigate<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigate<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static,
    {
        Navigate::new(self.context.map_event(f))
    }
}

impl<Ev> Navigate<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, Ev>) -> Self {
        Self { context }
    }

    /// Regular user-driven state change: pushes history and notifies
    /// state-change listeners.
    pub fn go(&self, target: NavTarget) {
        self.dispatch(target, HistoryMode::Push, true);
    }

    /// Router redirect: replaces the current history entry without
    /// notifying state-change listeners.
    pub fn redirect(&self, target: NavTarget) {
        self.dispatch(target, HistoryMode::Replace, false);
    }

    fn dispatch(&self, target: NavTarget, location: HistoryMode, notify: bool) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context
                .notify_shell(NavigateOperation::Go {
                    target,
                    location,
                    notify,
                })
                .await;
        });
    }
}
