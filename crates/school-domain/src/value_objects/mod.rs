//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Page`] | One page of a repository search plus the total match count |
//! | [`Violation`] | A single field-level rule set failure |

/// Paged search results
pub mod page;
/// Rule set violations
pub mod violation;

pub use page::Page;
pub use violation::Violation;
