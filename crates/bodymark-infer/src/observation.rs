use bodymark_base::Vec2;

use crate::BodyJoint;

/// One joint as reported by a pose model.
///
/// `location` is normalized to [0, 1] on both axes; which corner is the
/// origin depends on the model's [`VerticalAxis`](crate::VerticalAxis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub joint: BodyJoint,
    pub location: Vec2<f32>,
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(joint: BodyJoint, location: Vec2<f32>, confidence: f32) -> Self {
        Self {
            joint,
            location,
            confidence,
        }
    }

    /// False when the location or confidence is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.location.is_finite() && self.confidence.is_finite()
    }
}

/// All keypoints the model found for one person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyObservation {
    keypoints: Vec<Keypoint>,
}

impl BodyObservation {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    /// The first keypoint reported for `joint`, if any.
    pub fn keypoint(&self, joint: BodyJoint) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.joint == joint)
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}
