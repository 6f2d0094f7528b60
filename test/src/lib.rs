pub mod helpers;

pub use helpers::*;
pub use scripted_transport::{
    ConfirmBehavior, ProbeRecord, ScriptedTransport, SendBehavior, SendRecord, TransportControl,
};
