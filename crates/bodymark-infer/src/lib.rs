//! Body pose extraction.
//!
//! A [`PoseModel`] reports bodies as normalized keypoints; the
//! [`PoseExtractor`] filters them and maps them into frame pixels.

pub mod config;
pub mod device;
pub mod error;
pub mod extractor;
pub mod joint;
pub mod model;
pub mod modelsource;
pub mod observation;
pub mod yolo;

pub use config::{DEFAULT_CONFIDENCE_THRESHOLD, ExtractorConfig};
pub use device::Device;
pub use error::InferError;
pub use extractor::PoseExtractor;
pub use joint::{BODY_JOINT_COUNT, BodyJoint};
pub use model::{PoseModel, VerticalAxis};
pub use modelsource::ModelSource;
pub use observation::{BodyObservation, Keypoint};

#[cfg(feature = "onnx")]
pub use yolo::YoloPoseModel;
