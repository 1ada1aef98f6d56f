use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// A shared, monotonically increasing frame counter.
///
/// The capture source draws one number per delivered frame. Everything derived
/// from that frame carries the number along, so a consumer can tell which of
/// two results is newer without looking at timestamps.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    value: Arc<AtomicU64>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence number. The first call returns 1.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The most recently issued number (0 if none yet).
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// A value stamped with the sequence number of the frame it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub seq: u64,
    pub inner: T,
}

impl<T> Stamped<T> {
    pub fn new(seq: u64, inner: T) -> Self {
        Self { seq, inner }
    }

    pub fn is_newer_than(&self, seq: u64) -> bool {
        self.seq > seq
    }
}
