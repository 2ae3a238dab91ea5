//! Dependency injection
//!
//! Builds the object graph once at startup and hands out shared handles.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
