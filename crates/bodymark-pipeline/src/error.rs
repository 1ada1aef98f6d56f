use bodymark_video::CaptureError;
use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    Capture(CaptureError),
    /// The inference worker panicked or was cancelled.
    Worker(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Capture(err) => write!(f, "capture: {err}"),
            PipelineError::Worker(msg) => write!(f, "inference worker: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Capture(err) => Some(err),
            PipelineError::Worker(_) => None,
        }
    }
}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(err: tokio::task::JoinError) -> Self {
        PipelineError::Worker(err.to_string())
    }
}
