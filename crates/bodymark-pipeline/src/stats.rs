use std::sync::atomic::{AtomicU64, Ordering};

/// Frame counts since the pipeline started.
///
/// Once the pipeline has stopped, `delivered == processed + dropped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Frames handed over by the capture source.
    pub delivered: u64,
    /// Frames that went through inference.
    pub processed: u64,
    /// Frames discarded because inference was still busy.
    pub dropped: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub delivered: AtomicU64,
    pub processed: AtomicU64,
    pub dropped: AtomicU64,
}

impl Counters {
    pub fn snapshot(&self) -> PipelineStats {
        PipelineStats {
            delivered: self.delivered.load(Ordering::Relaxed),
            processed: self.processed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}
