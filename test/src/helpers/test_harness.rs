use std::cell::{Cell, RefCell};
use std::rc::Rc;

use courier_client::{DispatchConfig, DispatchManager, IdGenerator, Instant};

use crate::helpers::{
    completion_log::CompletionLog,
    recording_progress::{ProgressCall, RecordingProgress},
};
use crate::scripted_transport::{ScriptedTransport, TransportControl};

/// Milliseconds the harness clock advances per tick, one 60Hz frame
pub const FRAME_MILLIS: u32 = 16;

/// A DispatchManager wired to a ScriptedTransport, a RecordingProgress and a
/// clock that advances one frame per tick
pub struct TestHarness<P: 'static> {
    pub manager: DispatchManager<P>,
    pub transport: TransportControl,
    pub completions: CompletionLog<P>,
    progress_calls: Rc<RefCell<Vec<ProgressCall>>>,
    tick: Rc<Cell<u32>>,
    now: Instant,
    frame_millis: u32,
}

impl<P: 'static> TestHarness<P> {
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        let tick = Rc::new(Cell::new(0));
        let (transport, control) = ScriptedTransport::new(config.success_code);
        let (progress, progress_calls) = RecordingProgress::new(tick.clone());
        let manager = DispatchManager::new(config, Box::new(transport))
            .with_progress(Box::new(progress))
            .with_id_generator(IdGenerator::with_seed(0x5eed));

        Self {
            manager,
            transport: control,
            completions: CompletionLog::new(tick.clone()),
            progress_calls,
            tick,
            now: Instant::now(),
            frame_millis: FRAME_MILLIS,
        }
    }

    pub fn with_frame_millis(mut self, frame_millis: u32) -> Self {
        self.frame_millis = frame_millis;
        self
    }

    /// Runs the dispatch loop at the current tick, then advances one frame
    pub fn tick(&mut self) {
        let tick = self.tick.get();
        self.transport.set_tick(tick);
        self.manager.tick_at(&self.now);
        self.tick.set(tick + 1);
        self.now.add_millis(self.frame_millis);
    }

    pub fn tick_n(&mut self, count: u32) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Moves the clock forward without running the dispatch loop
    pub fn advance_millis(&mut self, millis: u32) {
        self.now.add_millis(millis);
    }

    /// Index of the next tick to run
    pub fn current_tick(&self) -> u32 {
        self.tick.get()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn progress_calls(&self) -> Vec<ProgressCall> {
        self.progress_calls.borrow().clone()
    }
}

impl<P: 'static> Default for TestHarness<P> {
    fn default() -> Self {
        Self::new()
    }
}
