use std::fmt;

/// Where a model backend runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Cpu,
    Cuda { device_id: i32 },
}

impl Device {
    /// Parse `cpu`, `cuda` or `cuda:<id>`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "cpu" => Some(Device::Cpu),
            "cuda" => Some(Device::Cuda { device_id: 0 }),
            _ => value
                .strip_prefix("cuda:")
                .and_then(|id| id.parse().ok())
                .map(|device_id| Device::Cuda { device_id }),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}
