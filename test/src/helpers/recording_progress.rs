use std::cell::{Cell, RefCell};
use std::rc::Rc;

use courier_client::ProgressIndicator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressCall {
    Show { tick: u32 },
    Hide { tick: u32 },
}

/// ProgressIndicator that records each call with the tick it happened on
pub struct RecordingProgress {
    calls: Rc<RefCell<Vec<ProgressCall>>>,
    tick: Rc<Cell<u32>>,
}

impl RecordingProgress {
    pub fn new(tick: Rc<Cell<u32>>) -> (Self, Rc<RefCell<Vec<ProgressCall>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
                tick,
            },
            calls,
        )
    }
}

impl ProgressIndicator for RecordingProgress {
    fn show(&mut self) {
        self.calls.borrow_mut().push(ProgressCall::Show {
            tick: self.tick.get(),
        });
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push(ProgressCall::Hide {
            tick: self.tick.get(),
        });
    }
}
