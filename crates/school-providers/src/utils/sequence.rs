use school_domain::error::{Error, Result};
use std::sync::atomic::{AtomicI32, Ordering};

const MSG_SEQUENCE_EXHAUSTED: &str = "Identity sequence exhausted";

/// Monotonic identity source; the first id handed out is 1
#[derive(Debug, Default)]
pub struct IdSequence(AtomicI32);

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next identity
    ///
    /// Fails once `i32::MAX` has been handed out; ids never wrap.
    pub fn next_id(&self) -> Result<i32> {
        self.0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| Error::database(MSG_SEQUENCE_EXHAUSTED))
    }
}
