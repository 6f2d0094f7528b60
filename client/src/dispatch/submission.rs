use courier_shared::{Destination, SyncMode};

use crate::dispatch::message_context::{Completion, CompletionHandler};

/// Builder form of `DispatchManager::submit`
///
/// ```ignore
/// manager.send(
///     Submission::new(command)
///         .blocking()
///         .to("/commands")
///         .on_complete(|completion| println!("{:?}", completion.id())),
/// )?;
/// ```
pub struct Submission<P> {
    pub(crate) payload: P,
    pub(crate) sync_mode: SyncMode,
    pub(crate) destination: Option<Destination>,
    pub(crate) on_complete: Option<CompletionHandler<P>>,
}

impl<P> Submission<P> {
    pub fn new(payload: P) -> Self {
        Self {
            payload,
            sync_mode: SyncMode::NonBlocking,
            destination: None,
            on_complete: None,
        }
    }

    pub fn blocking(self) -> Self {
        self.sync_mode(SyncMode::Blocking)
    }

    pub fn sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    /// Overrides the configured default destination for this message
    pub fn to(mut self, destination: impl Into<Destination>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn on_complete(mut self, handler: impl FnOnce(Completion<P>) + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }
}
