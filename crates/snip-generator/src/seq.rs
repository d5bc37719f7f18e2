use crate::Generator;
use snip_core::ShortId;
use std::sync::atomic::{AtomicU32, Ordering};

/// A short id generator using a sequential counter.
///
/// This generator produces ids like "00000000", "00000001", ..., rendered
/// as 8 lowercase hex digits. The counter wraps around after `ffffffff`,
/// at which point ids collide with existing mappings and the shortening
/// service reports a conflict.
#[derive(Debug, Default)]
pub struct SeqGenerator {
    counter: AtomicU32,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU32::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    /// Creates a new generator starting from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state after a restart with a
    /// freshly populated store.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            counter: AtomicU32::new(offset),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortId::new_unchecked(format!("{:08x}", count))
    }
}
