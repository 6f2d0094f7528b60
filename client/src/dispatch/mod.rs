pub mod dispatch_manager;
pub mod gate;
pub mod in_flight_table;
pub mod message_context;
pub mod submission;
