pub mod completion_log;
pub mod recording_progress;
pub mod test_harness;

pub use completion_log::{CompletionLog, CompletionRecord};
pub use recording_progress::{ProgressCall, RecordingProgress};
pub use test_harness::{TestHarness, FRAME_MILLIS};
