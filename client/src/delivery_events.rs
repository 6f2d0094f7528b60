use std::vec::IntoIter;

use courier_shared::{MessageId, ResponseBody};

use crate::dispatch::message_context::Completion;

/// Terminal events for messages submitted without a completion handler,
/// buffered until the host drains them with `DispatchManager::take_events`
pub struct DeliveryEvents<P> {
    confirmed: Vec<(MessageId, ResponseBody)>,
    timed_out: Vec<(MessageId, P)>,
}

impl<P> Default for DeliveryEvents<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DeliveryEvents<P> {
    pub(crate) fn new() -> Self {
        Self {
            confirmed: Vec::new(),
            timed_out: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.timed_out.is_empty()
    }

    pub fn read<V: DeliveryEvent<P>>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: DeliveryEvent<P>>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push(&mut self, completion: Completion<P>) {
        match completion {
            Completion::Confirmed { id, response } => self.confirmed.push((id, response)),
            Completion::TimedOut { id, payload } => self.timed_out.push((id, payload)),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.confirmed.clear();
        self.timed_out.clear();
    }
}

// Event Trait
pub trait DeliveryEvent<P> {
    type Iter;

    fn iter(events: &mut DeliveryEvents<P>) -> Self::Iter;

    fn has(events: &DeliveryEvents<P>) -> bool;
}

// Confirmed Event
pub struct ConfirmedEvent;
impl<P> DeliveryEvent<P> for ConfirmedEvent {
    type Iter = IntoIter<(MessageId, ResponseBody)>;

    fn iter(events: &mut DeliveryEvents<P>) -> Self::Iter {
        let list = std::mem::take(&mut events.confirmed);
        IntoIterator::into_iter(list)
    }

    fn has(events: &DeliveryEvents<P>) -> bool {
        !events.confirmed.is_empty()
    }
}

// Timed Out Event
pub struct TimedOutEvent;
impl<P> DeliveryEvent<P> for TimedOutEvent {
    type Iter = IntoIter<(MessageId, P)>;

    fn iter(events: &mut DeliveryEvents<P>) -> Self::Iter {
        let list = std::mem::take(&mut events.timed_out);
        IntoIterator::into_iter(list)
    }

    fn has(events: &DeliveryEvents<P>) -> bool {
        !events.timed_out.is_empty()
    }
}
