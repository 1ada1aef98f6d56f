use bodymark_base::Vec2;
use bodymark_infer::{
    BODY_JOINT_COUNT, BodyJoint, BodyObservation, DEFAULT_CONFIDENCE_THRESHOLD, Device,
    ExtractorConfig, InferError, Keypoint, ModelSource, VerticalAxis,
};
use std::collections::HashSet;

#[test]
fn test_all_joints_are_distinct() {
    let unique: HashSet<BodyJoint> = BodyJoint::ALL.iter().copied().collect();
    assert_eq!(unique.len(), BODY_JOINT_COUNT);
    assert_eq!(BodyJoint::ALL[0], BodyJoint::Nose);
    assert_eq!(BodyJoint::ALL[7], BodyJoint::Neck);
    assert_eq!(BodyJoint::ALL[14], BodyJoint::Root);
}

#[test]
fn test_joint_display() {
    assert_eq!(BodyJoint::LeftShoulder.to_string(), "left_shoulder");
    assert_eq!(BodyJoint::Root.to_string(), "root");
}

#[test]
fn test_default_config() {
    let config = ExtractorConfig::default();
    assert_eq!(config.confidence_threshold(), DEFAULT_CONFIDENCE_THRESHOLD);
    assert_eq!(config.confidence_threshold(), 0.5);
    assert_eq!(config.joints(), &BodyJoint::ALL[..]);
}

#[test]
fn test_observation_lookup() {
    let body = BodyObservation::new(vec![
        Keypoint::new(BodyJoint::Nose, Vec2::new(0.1, 0.2), 0.3),
        Keypoint::new(BodyJoint::Neck, Vec2::new(0.4, 0.5), 0.6),
    ]);
    assert_eq!(body.keypoint(BodyJoint::Neck).map(|k| k.confidence), Some(0.6));
    assert!(body.keypoint(BodyJoint::Root).is_none());
    assert!(!body.is_empty());
    assert!(BodyObservation::default().is_empty());
}

#[test]
fn test_vertical_axis_default_is_bottom_up() {
    assert_eq!(VerticalAxis::default(), VerticalAxis::BottomUp);
}

#[test]
fn test_both_axes_agree_on_screen_placement() {
    let size = Vec2::new(640, 480);
    let bottom_up = VerticalAxis::BottomUp.denormalize(Vec2::new(0.3, 0.8), size);
    let top_down = VerticalAxis::TopDown.denormalize(Vec2::new(0.3, 0.2), size);
    assert!((bottom_up.x - top_down.x).abs() < 1e-3);
    assert!((bottom_up.y - top_down.y).abs() < 1e-3);
}

#[test]
fn test_device_parse() {
    assert_eq!(Device::parse("cpu"), Some(Device::Cpu));
    assert_eq!(Device::parse(" CUDA "), Some(Device::Cuda { device_id: 0 }));
    assert_eq!(Device::parse("cuda:2"), Some(Device::Cuda { device_id: 2 }));
    assert_eq!(Device::parse("cuda:x"), None);
    assert_eq!(Device::parse("tpu"), None);
    assert_eq!(Device::Cuda { device_id: 1 }.to_string(), "CUDA(device_id=1)");
}

#[test]
fn test_model_source_display() {
    assert_eq!(ModelSource::Memory(vec![0; 3]).to_string(), "<3 bytes in memory>");
    assert_eq!(
        ModelSource::File("models/pose.onnx".into()).to_string(),
        "models/pose.onnx"
    );
}

#[test]
fn test_error_display() {
    let err = InferError::MalformedResult("no bodies".to_string());
    assert_eq!(err.to_string(), "malformed result: no bodies");
    let err: InferError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, InferError::Io(_)));
}
