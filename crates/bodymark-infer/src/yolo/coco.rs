use bodymark_base::{Rect, Vec2};

use crate::{BodyJoint, BodyObservation, Keypoint};

pub const COCO_KEYPOINT_COUNT: usize = 17;

/// Keypoint order of COCO-trained pose models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CocoKeypoint {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

// joints COCO reports directly
const DIRECT: [(CocoKeypoint, BodyJoint); COCO_KEYPOINT_COUNT] = [
    (CocoKeypoint::Nose, BodyJoint::Nose),
    (CocoKeypoint::LeftEye, BodyJoint::LeftEye),
    (CocoKeypoint::RightEye, BodyJoint::RightEye),
    (CocoKeypoint::LeftEar, BodyJoint::LeftEar),
    (CocoKeypoint::RightEar, BodyJoint::RightEar),
    (CocoKeypoint::LeftShoulder, BodyJoint::LeftShoulder),
    (CocoKeypoint::RightShoulder, BodyJoint::RightShoulder),
    (CocoKeypoint::LeftElbow, BodyJoint::LeftElbow),
    (CocoKeypoint::RightElbow, BodyJoint::RightElbow),
    (CocoKeypoint::LeftWrist, BodyJoint::LeftWrist),
    (CocoKeypoint::RightWrist, BodyJoint::RightWrist),
    (CocoKeypoint::LeftHip, BodyJoint::LeftHip),
    (CocoKeypoint::RightHip, BodyJoint::RightHip),
    (CocoKeypoint::LeftKnee, BodyJoint::LeftKnee),
    (CocoKeypoint::RightKnee, BodyJoint::RightKnee),
    (CocoKeypoint::LeftAnkle, BodyJoint::LeftAnkle),
    (CocoKeypoint::RightAnkle, BodyJoint::RightAnkle),
];

/// One person found by a YOLO pose model, in image pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseDetection {
    pub bbox: Rect<f32>,
    pub confidence: f32,
    /// (position, confidence) in COCO order.
    pub keypoints: [(Vec2<f32>, f32); COCO_KEYPOINT_COUNT],
}

impl PoseDetection {
    pub fn keypoint(&self, index: CocoKeypoint) -> (Vec2<f32>, f32) {
        self.keypoints[index as usize]
    }

    fn midpoint(&self, a: CocoKeypoint, b: CocoKeypoint) -> (Vec2<f32>, f32) {
        let (pa, ca) = self.keypoint(a);
        let (pb, cb) = self.keypoint(b);
        (pa.midpoint(pb), ca.min(cb))
    }

    /// Convert to a body with locations normalized by `image_size`
    /// (origin top-left). Neck and root are synthesized from the shoulder and
    /// hip pairs and are only as confident as the weaker of the two.
    pub fn to_observation(&self, image_size: Vec2<usize>) -> BodyObservation {
        let size = image_size.to_f32();
        let normalize = |p: Vec2<f32>| Vec2::new(p.x / size.x, p.y / size.y);

        let keypoints = BodyJoint::ALL
            .iter()
            .map(|&joint| {
                let (position, confidence) = match joint {
                    BodyJoint::Neck => {
                        self.midpoint(CocoKeypoint::LeftShoulder, CocoKeypoint::RightShoulder)
                    }
                    BodyJoint::Root => self.midpoint(CocoKeypoint::LeftHip, CocoKeypoint::RightHip),
                    _ => DIRECT
                        .iter()
                        .find(|(_, j)| *j == joint)
                        .map(|(coco, _)| self.keypoint(*coco))
                        .unwrap_or((Vec2::new(f32::NAN, f32::NAN), 0.0)),
                };
                Keypoint::new(joint, normalize(position), confidence)
            })
            .collect();

        BodyObservation::new(keypoints)
    }
}
