use crate::{messages::message_id::MessageId, types::ApplicationCode};

/// A resolved transport request: status code plus decoded body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl Response {
    pub fn new(status_code: u16, body: ResponseBody) -> Self {
        Self { status_code, body }
    }

    /// Status code is in the 2xx range
    pub fn is_status_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// The fields of a response body the dispatch layer reads. Everything else
/// the remote host returns stays opaque in `data`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseBody {
    pub id: Option<MessageId>,
    pub code: Option<ApplicationCode>,
    pub data: Vec<u8>,
}

impl ResponseBody {
    /// Body of a primary-send acknowledgement
    pub fn ack(id: MessageId, code: ApplicationCode) -> Self {
        Self {
            id: Some(id),
            code: Some(code),
            data: Vec::new(),
        }
    }

    /// Body of a confirmation round response
    pub fn confirmation(id: MessageId) -> Self {
        Self {
            id: Some(id),
            code: None,
            data: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }
}
