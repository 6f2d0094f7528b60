/// Host hooks for a progress indicator covering blocking exchanges.
///
/// `show` is called when a blocking message is sent, `hide` when that message
/// reaches its terminal event (or the DispatchManager is reset while it is
/// outstanding). Calls always alternate, starting with `show`.
pub trait ProgressIndicator {
    fn show(&mut self);
    fn hide(&mut self);
}

/// ProgressIndicator for hosts without a progress UI
#[derive(Default)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn show(&mut self) {}

    fn hide(&mut self) {}
}
