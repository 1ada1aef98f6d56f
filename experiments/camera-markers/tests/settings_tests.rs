use bodymark_infer::Device;
use bodymark_video::DeviceOrientation;
use camera_markers::{Settings, parse_device_orientation};
use std::collections::HashMap;
use std::path::PathBuf;

fn settings(vars: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults() {
    let settings = settings(&[]);
    assert_eq!(settings.model_path(), &PathBuf::from("models/yolo11n-pose.onnx"));
    assert_eq!(settings.log_dir(), None);
    assert_eq!(settings.orientation(), DeviceOrientation::Portrait);
    assert_eq!(settings.infer_device(), Device::Cpu);

    let config = settings.capture_config();
    assert_eq!(config.device(), "/dev/video0");
    assert_eq!((config.width(), config.height()), (640, 480));
}

#[test]
fn test_overrides() {
    let settings = settings(&[
        ("BODYMARK_MODEL_PATH", "/opt/pose.onnx"),
        ("BODYMARK_DEVICE", "/dev/video2"),
        ("BODYMARK_LOG_DIR", "/tmp/bodymark"),
        ("BODYMARK_ORIENTATION", "landscape_right"),
        ("BODYMARK_INFER_DEVICE", "cuda:1"),
    ]);
    assert_eq!(settings.model_path(), &PathBuf::from("/opt/pose.onnx"));
    assert_eq!(settings.capture_config().device(), "/dev/video2");
    assert_eq!(settings.log_dir(), Some(&PathBuf::from("/tmp/bodymark")));
    assert_eq!(settings.orientation(), DeviceOrientation::LandscapeRight);
    assert_eq!(settings.infer_device(), Device::Cuda { device_id: 1 });
}

#[test]
fn test_bad_values_fall_back() {
    let settings = settings(&[
        ("BODYMARK_MODEL_PATH", "  "),
        ("BODYMARK_ORIENTATION", "sideways"),
        ("BODYMARK_INFER_DEVICE", "abacus"),
    ]);
    assert_eq!(settings.model_path(), &PathBuf::from("models/yolo11n-pose.onnx"));
    assert_eq!(settings.orientation(), DeviceOrientation::Portrait);
    assert_eq!(settings.infer_device(), Device::Cpu);
}

#[test]
fn test_parse_device_orientation() {
    assert_eq!(
        parse_device_orientation("Portrait-Upside-Down"),
        Some(DeviceOrientation::PortraitUpsideDown)
    );
    assert_eq!(
        parse_device_orientation("landscape-left"),
        Some(DeviceOrientation::LandscapeLeft)
    );
    assert_eq!(parse_device_orientation("face_down"), Some(DeviceOrientation::FaceDown));
    assert_eq!(parse_device_orientation(""), None);
}
