use std::fmt;

/// Application-level result code carried in a primary acknowledgement body
pub type ApplicationCode = i32;

/// Whether a message must hold the dispatch gate while it is outstanding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SyncMode {
    /// Holds the gate from send until its terminal event, suspending all
    /// other primary sends in the meantime
    Blocking,
    #[default]
    NonBlocking,
}

impl SyncMode {
    pub fn is_blocking(&self) -> bool {
        matches!(self, SyncMode::Blocking)
    }
}

/// Name of the remote endpoint a request is sent to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    pub fn new(destination: impl Into<String>) -> Self {
        Self(destination.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Destination {
    fn from(destination: &str) -> Self {
        Self::new(destination)
    }
}

impl From<String> for Destination {
    fn from(destination: String) -> Self {
        Self(destination)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
