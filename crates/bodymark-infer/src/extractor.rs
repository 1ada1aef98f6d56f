use bodymark_base::OverlayPoint;
use bodymark_video::{Frame, Orientation};

use crate::{BodyObservation, ExtractorConfig, PoseModel, VerticalAxis};

/// Turns frames into overlay points through a [`PoseModel`].
pub struct PoseExtractor {
    model: Box<dyn PoseModel>,
    config: ExtractorConfig,
    failures: u64,
}

impl std::fmt::Debug for PoseExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoseExtractor")
            .field("config", &self.config)
            .field("vertical_axis", &self.model.vertical_axis())
            .field("failures", &self.failures)
            .finish()
    }
}

impl PoseExtractor {
    pub fn new(model: impl PoseModel) -> Self {
        Self::with_config(model, ExtractorConfig::default())
    }

    pub fn with_config(model: impl PoseModel, config: ExtractorConfig) -> Self {
        Self {
            model: Box::new(model),
            config,
            failures: 0,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Number of frames whose inference failed.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Run the model once on `frame` and return the accepted keypoints in
    /// frame pixel space (origin top-left).
    ///
    /// Bodies are flattened in the order the model reported them. Failures
    /// are logged and yield no points.
    pub fn extract_points(&mut self, frame: &Frame, orientation: Orientation) -> Vec<OverlayPoint> {
        let size = frame.size();
        if size.is_degenerate() {
            log::error!(
                "extractor: rejecting frame {} with size {}x{}",
                frame.seq(),
                size.x,
                size.y
            );
            return Vec::new();
        }

        let bodies = match self.model.infer(frame, orientation) {
            Ok(bodies) => bodies,
            Err(e) => {
                self.failures += 1;
                log::error!("extractor: inference on frame {} failed: {}", frame.seq(), e);
                return Vec::new();
            }
        };

        let axis = self.model.vertical_axis();
        let mut points = Vec::new();
        for body in &bodies {
            self.collect_body(body, axis, frame, &mut points);
        }
        log::debug!(
            "extractor: frame {}: {} bodies, {} points",
            frame.seq(),
            bodies.len(),
            points.len()
        );
        points
    }

    fn collect_body(
        &self,
        body: &BodyObservation,
        axis: VerticalAxis,
        frame: &Frame,
        points: &mut Vec<OverlayPoint>,
    ) {
        for &joint in self.config.joints() {
            let Some(keypoint) = body.keypoint(joint) else {
                log::debug!("extractor: frame {}: no {} in body", frame.seq(), joint);
                continue;
            };
            if !keypoint.is_finite() {
                log::warn!(
                    "extractor: frame {}: skipping non-finite {}",
                    frame.seq(),
                    joint
                );
                continue;
            }
            if keypoint.confidence > self.config.confidence_threshold() {
                points.push(axis.denormalize(keypoint.location, frame.size()));
            }
        }
    }
}
