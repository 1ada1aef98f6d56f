use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The model could not be loaded or does not fit the backend.
    Model(String),
    /// The inference call itself failed.
    Inference(String),
    Shape(String),
    /// The model returned something that cannot be read as bodies.
    MalformedResult(String),
    Io(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Model(msg) => write!(f, "model error: {msg}"),
            InferError::Inference(msg) => write!(f, "inference failed: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::MalformedResult(msg) => write!(f, "malformed result: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<bodymark_base::TensorError> for InferError {
    fn from(err: bodymark_base::TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}

#[cfg(feature = "onnx")]
impl From<ort::Error> for InferError {
    fn from(err: ort::Error) -> Self {
        InferError::Inference(err.to_string())
    }
}

#[cfg(feature = "onnx")]
impl From<ndarray::ShapeError> for InferError {
    fn from(err: ndarray::ShapeError) -> Self {
        InferError::Shape(err.to_string())
    }
}
