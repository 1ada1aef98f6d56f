//! YOLO pose models.
//!
//! Pre- and post-processing are plain Rust and always available; running the
//! network needs the `onnx` feature.

mod coco;
mod postprocess;
mod preprocess;

#[cfg(feature = "onnx")]
mod model;

pub use coco::{COCO_KEYPOINT_COUNT, CocoKeypoint, PoseDetection};
pub use postprocess::{DEFAULT_IOU_THRESHOLD, postprocess};
pub use preprocess::{Letterbox, TARGET_SIZE, preprocess};

#[cfg(feature = "onnx")]
pub use model::YoloPoseModel;
