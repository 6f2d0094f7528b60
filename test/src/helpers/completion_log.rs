use std::cell::{Cell, RefCell};
use std::rc::Rc;

use courier_client::{Completion, CompletionHandler, MessageId};

/// A completion together with the tick its handler ran on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRecord<P> {
    pub tick: u32,
    pub completion: Completion<P>,
}

/// Shared log that hands out completion handlers and records what they receive
pub struct CompletionLog<P> {
    records: Rc<RefCell<Vec<CompletionRecord<P>>>>,
    tick: Rc<Cell<u32>>,
}

impl<P> Clone for CompletionLog<P> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            tick: self.tick.clone(),
        }
    }
}

impl<P: 'static> CompletionLog<P> {
    pub fn new(tick: Rc<Cell<u32>>) -> Self {
        Self {
            records: Rc::new(RefCell::new(Vec::new())),
            tick,
        }
    }

    pub fn handler(&self) -> CompletionHandler<P> {
        let records = self.records.clone();
        let tick = self.tick.clone();
        Box::new(move |completion| {
            records.borrow_mut().push(CompletionRecord {
                tick: tick.get(),
                completion,
            });
        })
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Number of completions recorded for message `id`
    pub fn count_for(&self, id: &MessageId) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.completion.id() == *id)
            .count()
    }
}

impl<P: Clone + 'static> CompletionLog<P> {
    pub fn records(&self) -> Vec<CompletionRecord<P>> {
        self.records.borrow().clone()
    }

    pub fn for_id(&self, id: &MessageId) -> Option<CompletionRecord<P>> {
        self.records
            .borrow()
            .iter()
            .find(|record| record.completion.id() == *id)
            .cloned()
    }
}
