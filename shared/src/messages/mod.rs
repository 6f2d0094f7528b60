pub mod constants;
pub mod envelope;
pub mod error;
pub mod id_generator;
pub mod message_id;
