pub mod dispatch_config;
pub mod error;
