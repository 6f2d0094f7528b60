use crate::messages::message_id::MessageId;

/// The unit sent over the transport on a primary send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope<P> {
    id: MessageId,
    payload: P,
    issued_at: u64,
}

impl<P> Envelope<P> {
    /// `issued_at` is wall-clock milliseconds since UNIX epoch
    pub fn new(id: MessageId, payload: P, issued_at: u64) -> Self {
        Self {
            id,
            payload,
            issued_at,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn issued_at(&self) -> u64 {
        self.issued_at
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// Body of a confirmation round request, asking the remote host whether it
/// durably registered the message with the given id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmationProbe {
    pub id: MessageId,
    /// Whether the sender still tracks the message, false once it has expired
    /// locally
    pub still_tracked_locally: bool,
}

impl ConfirmationProbe {
    pub fn new(id: MessageId, still_tracked_locally: bool) -> Self {
        Self {
            id,
            still_tracked_locally,
        }
    }
}
