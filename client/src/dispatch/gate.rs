use courier_shared::MessageId;

/// Single-permit gate held by at most one blocking message at a time.
///
/// While held, the dispatch loop sends no primary messages. Only the holder
/// can release it.
#[derive(Default)]
pub(crate) struct Gate {
    holder: Option<MessageId>,
}

impl Gate {
    pub fn new() -> Self {
        Self { holder: None }
    }

    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    pub fn holder(&self) -> Option<MessageId> {
        self.holder
    }

    /// Returns false, leaving the gate untouched, if it is already held
    pub fn try_acquire(&mut self, id: MessageId) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(id);
        true
    }

    /// Releases the gate if `id` holds it. Returns whether it was released.
    pub fn release(&mut self, id: &MessageId) -> bool {
        if self.holder.as_ref() == Some(id) {
            self.holder = None;
            return true;
        }
        false
    }

    /// Releases the gate regardless of holder, returning the previous holder
    pub fn clear(&mut self) -> Option<MessageId> {
        self.holder.take()
    }
}
