use thiserror::Error;

/// Errors a transport can resolve a request with instead of a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not reach the destination
    #[error("Request to '{destination}' could not be delivered: {reason}")]
    Unreachable { destination: String, reason: String },

    /// The request was aborted before a response arrived
    #[error("Request was aborted before a response arrived")]
    Aborted,

    /// A response arrived but could not be interpreted
    #[error("Malformed response from '{destination}': {reason}")]
    MalformedResponse { destination: String, reason: String },
}
