use courier_shared::{Destination, Envelope, Instant, MessageId, ResponseBody, SyncMode};

/// The single terminal event of a submitted message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion<P> {
    /// The remote host confirmed it registered the message
    Confirmed { id: MessageId, response: ResponseBody },
    /// The message was still outstanding when the in-flight duration elapsed.
    /// The payload is handed back so the caller can resubmit it.
    TimedOut { id: MessageId, payload: P },
}

impl<P> Completion<P> {
    pub fn id(&self) -> MessageId {
        match self {
            Completion::Confirmed { id, .. } | Completion::TimedOut { id, .. } => *id,
        }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Completion::TimedOut { .. })
    }
}

pub type CompletionHandler<P> = Box<dyn FnOnce(Completion<P>)>;

/// Tracks one Envelope from submission to its terminal event
pub(crate) struct MessageContext<P> {
    envelope: Envelope<P>,
    on_complete: Option<CompletionHandler<P>>,
    sync_mode: SyncMode,
    destination: Option<Destination>,
    sent_at: Option<Instant>,
}

impl<P> MessageContext<P> {
    pub fn new(
        envelope: Envelope<P>,
        sync_mode: SyncMode,
        destination: Option<Destination>,
        on_complete: Option<CompletionHandler<P>>,
    ) -> Self {
        Self {
            envelope,
            on_complete,
            sync_mode,
            destination,
            sent_at: None,
        }
    }

    pub fn id(&self) -> MessageId {
        self.envelope.id()
    }

    pub fn envelope(&self) -> &Envelope<P> {
        &self.envelope
    }

    pub fn sync_mode(&self) -> SyncMode {
        self.sync_mode
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn sent_at(&self) -> Option<Instant> {
        self.sent_at
    }

    pub fn mark_sent(&mut self, now: Instant) {
        self.sent_at = Some(now);
    }

    pub fn into_parts(self) -> (Envelope<P>, Option<CompletionHandler<P>>) {
        (self.envelope, self.on_complete)
    }
}
