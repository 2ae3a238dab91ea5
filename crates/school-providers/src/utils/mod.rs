//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod paging;
mod sequence;

pub use paging::{name_matches, paginate};
pub use sequence::IdSequence;
