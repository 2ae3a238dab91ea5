//! Application Ports
//!
//! Service contracts the transport layer depends on.

pub mod services;

pub use services::*;
