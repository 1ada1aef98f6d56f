//! Capture, pose extraction and overlay wired together.
//!
//! Frames flow from a [`CaptureSource`](bodymark_video::CaptureSource) to a
//! single inference worker. A frame that arrives while the worker is busy is
//! dropped. Finished point sets reach the render side through an
//! [`OverlayFeed`].

pub mod error;
pub mod feed;
pub mod pipeline;
pub mod stats;

pub use error::PipelineError;
pub use feed::OverlayFeed;
pub use pipeline::{Pipeline, Stopped};
pub use stats::PipelineStats;
