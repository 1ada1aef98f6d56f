use crate::BodyJoint;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Keypoint filtering for [`PoseExtractor`](crate::PoseExtractor).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    confidence_threshold: f32,
    joints: Vec<BodyJoint>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            joints: BodyJoint::ALL.to_vec(),
        }
    }
}

impl ExtractorConfig {
    /// Keypoints are kept only when their confidence is strictly above this.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Joints to keep, in output order.
    pub fn with_joints(mut self, joints: impl IntoIterator<Item = BodyJoint>) -> Self {
        self.joints = joints.into_iter().collect();
        self
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn joints(&self) -> &[BodyJoint] {
        &self.joints
    }
}
