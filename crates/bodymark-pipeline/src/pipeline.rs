use bodymark_base::{OverlayPoint, Stamped, Vec2};
use bodymark_infer::PoseExtractor;
use bodymark_video::{CaptureSource, Frame, Orientation};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, spawn_blocking};

use crate::stats::Counters;
use crate::{OverlayFeed, PipelineError, PipelineStats};

type Job = (Arc<Frame>, Orientation);

/// A running capture → inference → overlay chain.
///
/// At most one frame is in inference at any time. Frames arriving meanwhile
/// are dropped so that capture never waits on the model.
pub struct Pipeline {
    capture: CaptureSource,
    worker: JoinHandle<PoseExtractor>,
    counters: Arc<Counters>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("capture", &self.capture)
            .field("stats", &self.stats())
            .finish()
    }
}

impl Pipeline {
    /// Start capturing into `extractor`. Must be called within a tokio runtime.
    pub fn start(
        mut capture: CaptureSource,
        extractor: PoseExtractor,
    ) -> Result<(Self, OverlayFeed), PipelineError> {
        let counters = Arc::new(Counters::default());
        let busy = Arc::new(AtomicBool::new(false));
        let (job_tx, job_rx) = mpsc::unbounded_channel::<Job>();
        let (points_tx, points_rx) = watch::channel(Stamped::new(0, Vec::<OverlayPoint>::new()));
        let (preview_tx, preview_rx) = watch::channel(None);

        let worker = {
            let busy = Arc::clone(&busy);
            let counters = Arc::clone(&counters);
            spawn_blocking(move || inference_worker(extractor, job_rx, points_tx, busy, counters))
        };

        let sink = {
            let counters = Arc::clone(&counters);
            move |frame: Frame, orientation: Orientation| {
                counters.delivered.fetch_add(1, Ordering::Relaxed);
                let frame = Arc::new(frame);
                preview_tx.send_replace(Some(Arc::clone(&frame)));

                if busy.swap(true, Ordering::AcqRel) {
                    counters.dropped.fetch_add(1, Ordering::Relaxed);
                    log::debug!("pipeline: dropping frame {} (inference busy)", frame.seq());
                    return;
                }
                if job_tx.send((frame, orientation)).is_err() {
                    // worker is gone; nothing will clear the flag again
                    counters.dropped.fetch_add(1, Ordering::Relaxed);
                }
            }
        };

        if let Err(e) = capture.start(sink) {
            // dropping the sink closed the job channel, so the worker exits
            return Err(e.into());
        }
        log::info!("pipeline: started");

        Ok((
            Self {
                capture,
                worker,
                counters,
            },
            OverlayFeed::new(points_rx, preview_rx),
        ))
    }

    /// (width, height) of the frames flowing through the pipeline.
    pub fn frame_size(&self) -> Vec2<usize> {
        self.capture.native_size()
    }

    pub fn stats(&self) -> PipelineStats {
        self.counters.snapshot()
    }

    /// Stop capture, let the frame in inference finish and hand back the parts.
    pub async fn stop(mut self) -> Result<Stopped, PipelineError> {
        self.capture.stop().await?;
        let extractor = self.worker.await?;
        let stats = self.counters.snapshot();
        log::info!(
            "pipeline: stopped ({} delivered, {} processed, {} dropped)",
            stats.delivered,
            stats.processed,
            stats.dropped
        );
        Ok(Stopped {
            capture: self.capture,
            extractor,
            stats,
        })
    }
}

/// What is left of a [`Pipeline`] after [`stop`](Pipeline::stop). Both parts
/// can be passed to [`Pipeline::start`] again.
#[derive(Debug)]
pub struct Stopped {
    pub capture: CaptureSource,
    pub extractor: PoseExtractor,
    /// Final counts.
    pub stats: PipelineStats,
}

fn inference_worker(
    mut extractor: PoseExtractor,
    mut jobs: mpsc::UnboundedReceiver<Job>,
    points: watch::Sender<Stamped<Vec<OverlayPoint>>>,
    busy: Arc<AtomicBool>,
    counters: Arc<Counters>,
) -> PoseExtractor {
    log::info!("inference worker: started");
    while let Some((frame, orientation)) = jobs.blocking_recv() {
        let seq = frame.seq();
        let result = match panic::catch_unwind(AssertUnwindSafe(|| {
            extractor.extract_points(&frame, orientation)
        })) {
            Ok(found) => found,
            Err(_) => {
                log::error!("inference worker: model panicked on frame {}", seq);
                Vec::new()
            }
        };
        // fire and forget; there may be no reader
        points.send_replace(Stamped::new(seq, result));
        counters.processed.fetch_add(1, Ordering::Relaxed);
        busy.store(false, Ordering::Release);
    }
    log::info!("inference worker: finished");
    extractor
}
