use bodymark_infer::Device;
use bodymark_video::{CaptureConfig, DeviceOrientation};
use std::path::PathBuf;

pub const MODEL_PATH_ENV: &str = "BODYMARK_MODEL_PATH";
pub const CAMERA_ENV: &str = "BODYMARK_DEVICE";
pub const LOG_DIR_ENV: &str = "BODYMARK_LOG_DIR";
pub const ORIENTATION_ENV: &str = "BODYMARK_ORIENTATION";
pub const INFER_DEVICE_ENV: &str = "BODYMARK_INFER_DEVICE";

const DEFAULT_MODEL_PATH: &str = "models/yolo11n-pose.onnx";

/// Parse `portrait`, `portrait-upside-down`, `landscape-left`,
/// `landscape-right`, `face-up` or `face-down`.
pub fn parse_device_orientation(value: &str) -> Option<DeviceOrientation> {
    match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "portrait" => Some(DeviceOrientation::Portrait),
        "portrait-upside-down" | "upside-down" => Some(DeviceOrientation::PortraitUpsideDown),
        "landscape-left" => Some(DeviceOrientation::LandscapeLeft),
        "landscape-right" => Some(DeviceOrientation::LandscapeRight),
        "face-up" => Some(DeviceOrientation::FaceUp),
        "face-down" => Some(DeviceOrientation::FaceDown),
        _ => None,
    }
}

/// Runtime settings of the demo, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    model_path: PathBuf,
    camera: Option<String>,
    log_dir: Option<PathBuf>,
    orientation: DeviceOrientation,
    infer_device: Device,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable lookup. Unparseable values fall back
    /// to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let orientation = match non_empty(ORIENTATION_ENV) {
            Some(value) => parse_device_orientation(&value).unwrap_or_else(|| {
                log::warn!("{}: unknown orientation '{}', using portrait", ORIENTATION_ENV, value);
                DeviceOrientation::Portrait
            }),
            None => DeviceOrientation::Portrait,
        };
        let infer_device = match non_empty(INFER_DEVICE_ENV) {
            Some(value) => Device::parse(&value).unwrap_or_else(|| {
                log::warn!("{}: unknown device '{}', using CPU", INFER_DEVICE_ENV, value);
                Device::Cpu
            }),
            None => Device::Cpu,
        };

        Self {
            model_path: non_empty(MODEL_PATH_ENV)
                .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
                .into(),
            camera: non_empty(CAMERA_ENV),
            log_dir: non_empty(LOG_DIR_ENV).map(PathBuf::from),
            orientation,
            infer_device,
        }
    }

    pub fn model_path(&self) -> &PathBuf {
        &self.model_path
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir.as_ref()
    }

    pub fn orientation(&self) -> DeviceOrientation {
        self.orientation
    }

    pub fn infer_device(&self) -> Device {
        self.infer_device
    }

    /// VGA capture on the configured camera node.
    pub fn capture_config(&self) -> CaptureConfig {
        let config = CaptureConfig::default();
        match &self.camera {
            Some(camera) => config.with_device(camera.as_str()),
            None => config,
        }
    }
}
