use std::fmt;

/// The body joints a pose model may report.
///
/// Declaration order is the order in which accepted keypoints of one body are
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyJoint {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    /// Between the shoulders.
    Neck,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    /// Between the hips.
    Root,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

/// Number of joints in [`BodyJoint::ALL`].
pub const BODY_JOINT_COUNT: usize = 19;

impl BodyJoint {
    pub const ALL: [BodyJoint; BODY_JOINT_COUNT] = [
        BodyJoint::Nose,
        BodyJoint::LeftEye,
        BodyJoint::RightEye,
        BodyJoint::LeftEar,
        BodyJoint::RightEar,
        BodyJoint::LeftShoulder,
        BodyJoint::RightShoulder,
        BodyJoint::Neck,
        BodyJoint::LeftElbow,
        BodyJoint::RightElbow,
        BodyJoint::LeftWrist,
        BodyJoint::RightWrist,
        BodyJoint::LeftHip,
        BodyJoint::RightHip,
        BodyJoint::Root,
        BodyJoint::LeftKnee,
        BodyJoint::RightKnee,
        BodyJoint::LeftAnkle,
        BodyJoint::RightAnkle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyJoint::Nose => "nose",
            BodyJoint::LeftEye => "left_eye",
            BodyJoint::RightEye => "right_eye",
            BodyJoint::LeftEar => "left_ear",
            BodyJoint::RightEar => "right_ear",
            BodyJoint::LeftShoulder => "left_shoulder",
            BodyJoint::RightShoulder => "right_shoulder",
            BodyJoint::Neck => "neck",
            BodyJoint::LeftElbow => "left_elbow",
            BodyJoint::RightElbow => "right_elbow",
            BodyJoint::LeftWrist => "left_wrist",
            BodyJoint::RightWrist => "right_wrist",
            BodyJoint::LeftHip => "left_hip",
            BodyJoint::RightHip => "right_hip",
            BodyJoint::Root => "root",
            BodyJoint::LeftKnee => "left_knee",
            BodyJoint::RightKnee => "right_knee",
            BodyJoint::LeftAnkle => "left_ankle",
            BodyJoint::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for BodyJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
