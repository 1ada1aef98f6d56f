use bodymark_base::{OverlayPoint, Stamped};
use bodymark_overlay::OverlayRenderer;
use bodymark_video::Frame;
use std::sync::Arc;
use tokio::sync::watch;

/// Render-side end of a [`Pipeline`](crate::Pipeline).
///
/// Holds the latest published point set and the latest captured frame.
/// Nothing is queued: a reader that falls behind only sees the newest value.
#[derive(Debug)]
pub struct OverlayFeed {
    points: watch::Receiver<Stamped<Vec<OverlayPoint>>>,
    preview: watch::Receiver<Option<Arc<Frame>>>,
    applied: u64,
}

impl OverlayFeed {
    pub(crate) fn new(
        points: watch::Receiver<Stamped<Vec<OverlayPoint>>>,
        preview: watch::Receiver<Option<Arc<Frame>>>,
    ) -> Self {
        Self {
            points,
            preview,
            applied: 0,
        }
    }

    /// Render the latest point set if it comes from a newer frame than the
    /// one last applied. Returns whether the renderer was updated.
    pub fn apply(&mut self, renderer: &mut OverlayRenderer) -> bool {
        let latest = self.points.borrow_and_update();
        if !latest.is_newer_than(self.applied) {
            return false;
        }
        renderer.render(&latest.inner);
        self.applied = latest.seq;
        true
    }

    /// Sequence number of the frame whose points were applied last (0 if none).
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// The most recently published point set.
    pub fn latest(&self) -> Stamped<Vec<OverlayPoint>> {
        self.points.borrow().clone()
    }

    /// The most recently captured frame, for drawing the preview.
    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.preview.borrow().clone()
    }

    /// Wait until a new point set is published. Returns false once the
    /// pipeline is gone.
    pub async fn changed(&mut self) -> bool {
        self.points.changed().await.is_ok()
    }
}
