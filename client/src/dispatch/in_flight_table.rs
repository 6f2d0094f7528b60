use std::{collections::HashMap, time::Duration};

use log::warn;

use courier_shared::{ExpiryQueue, Instant, MessageId};

use crate::dispatch::message_context::MessageContext;

/// Messages that have been sent and answered, keyed by id, plus a
/// time-ordered index so the expiry sweep only visits messages that are
/// actually due
pub(crate) struct InFlightTable<P> {
    entries: HashMap<MessageId, MessageContext<P>>,
    expiry: ExpiryQueue<MessageId>,
}

impl<P> InFlightTable<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            expiry: ExpiryQueue::new(),
        }
    }

    pub fn insert(&mut self, sent_at: Instant, context: MessageContext<P>) {
        let id = context.id();
        if self.entries.insert(id, context).is_some() {
            warn!("Message {} was already in flight, replacing its entry", id);
        }
        self.expiry.push(sent_at, id);
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &MessageId) -> Option<&MessageContext<P>> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, id: &MessageId) -> Option<MessageContext<P>> {
        self.entries.remove(id)
    }

    /// Removes and returns, oldest send first, every entry that has been in
    /// flight for strictly longer than `max_duration`
    pub fn take_expired(
        &mut self,
        now: &Instant,
        max_duration: Duration,
    ) -> Vec<(Instant, MessageContext<P>)> {
        let mut expired = Vec::new();
        for (sent_at, id) in self.expiry.pop_expired(now, max_duration) {
            // entries confirmed before expiring leave a stale index entry behind
            let is_current = self
                .entries
                .get(&id)
                .is_some_and(|context| context.sent_at() == Some(sent_at));
            if !is_current {
                continue;
            }
            if let Some(context) = self.entries.remove(&id) {
                expired.push((sent_at, context));
            }
        }
        expired
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.expiry.clear();
    }
}
