use std::fmt;

/// Errors raised by the capture side of the pipeline.
///
/// `DeviceUnavailable`, `InputUnavailable` and `Configuration` happen during
/// setup; the pipeline never starts when one of them is returned.
#[derive(Debug)]
pub enum CaptureError {
    /// No usable camera was found.
    DeviceUnavailable(String),
    /// A camera exists but cannot be opened as an input.
    InputUnavailable(String),
    /// The camera refused the requested format, size or rate.
    Configuration(String),
    Stream(String),
    Channel(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CaptureError::InputUnavailable(msg) => write!(f, "input unavailable: {msg}"),
            CaptureError::Configuration(msg) => write!(f, "configuration failed: {msg}"),
            CaptureError::Stream(msg) => write!(f, "stream error: {msg}"),
            CaptureError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl CaptureError {
    /// True for errors that can only happen while setting the device up.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            CaptureError::DeviceUnavailable(_)
                | CaptureError::InputUnavailable(_)
                | CaptureError::Configuration(_)
        )
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CaptureError::DeviceUnavailable(err.to_string()),
            std::io::ErrorKind::PermissionDenied => CaptureError::InputUnavailable(err.to_string()),
            _ => CaptureError::Stream(err.to_string()),
        }
    }
}

impl From<bodymark_base::TensorError> for CaptureError {
    fn from(err: bodymark_base::TensorError) -> Self {
        CaptureError::Stream(err.to_string())
    }
}

impl From<tokio::task::JoinError> for CaptureError {
    fn from(err: tokio::task::JoinError) -> Self {
        CaptureError::Channel(format!("capture worker died: {err}"))
    }
}
