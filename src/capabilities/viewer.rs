//! External viewer capability: opening file data in a separate browser
//! window or tab.
//!
//! Fire and forget. If the shell's popup never loads (blocker, closed
//! tab) nothing comes back; the core does not wait on it.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerOperation {
    /// Open a new window at `url`.
    OpenWindow { url: String },
    /// Open a window at `url`, trigger print when it has loaded, then
    /// close it.
    Print { url: String },
}

impl Operation for ViewerOperation {
    type Output = ();
}

pub struct Viewer<Ev> {
    context: CapabilityContext<ViewerOperation, Ev>,
}

impl<Ev> Capability<Ev> for Viewer<Ev> {
    type Operation = ViewerOperation;
    type MappedSelf<MappedEv> = Viewer<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static,
    {
        Viewer::new(self.context.map_event(f))
    }
}

impl<Ev> Viewer<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<ViewerOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn open_window(&self, url: impl Into<String>) {
        self.notify(ViewerOperation::OpenWindow { url: url.into() });
    }

    pub fn print(&self, url: impl Into<String>) {
        self.notify(ViewerOperation::Print { url: url.into() });
    }

    fn notify(&self, operation: ViewerOperation) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}
