use courier_shared::{ConfirmationProbe, Destination, Envelope, Response, TransportError};

pub enum ResponseReceiverResult {
    Waiting,
    Success(Response),
    Failed(TransportError),
}

/// The request/response primitive the DispatchManager ships messages over.
///
/// Both methods start a request and return immediately with a handle; the
/// DispatchManager polls that handle once per tick. A transport is free to
/// never resolve a handle, which the dispatch layer treats as loss.
pub trait Transport<P> {
    /// Starts a primary send of `envelope` to `destination`. The response body
    /// is expected to carry at least the message id and an application code.
    fn send(&mut self, destination: &Destination, envelope: &Envelope<P>)
        -> Box<dyn ResponseReceiver>;
    /// Starts a confirmation round for a previously acknowledged message. The
    /// response body is expected to carry at least the message id.
    fn confirm(
        &mut self,
        destination: &Destination,
        probe: &ConfirmationProbe,
    ) -> Box<dyn ResponseReceiver>;
}

/// Handle to one outstanding transport request
pub trait ResponseReceiver {
    /// Polls the request; must not block
    fn receive(&mut self) -> ResponseReceiverResult;
    /// Cancels the request if it is still outstanding. No further result is
    /// read from the handle afterwards.
    fn abort(&mut self) {}
}
