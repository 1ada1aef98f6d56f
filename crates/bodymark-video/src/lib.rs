//! Camera capture for the bodymark pipeline.
//!
//! A [`CaptureSource`] owns one [`CaptureDevice`], pumps frames on a blocking
//! worker and hands each [`Frame`] with its [`Orientation`] to a [`FrameSink`],
//! one at a time.

pub mod config;
pub mod convert;
pub mod device;
pub mod error;
pub mod frame;
pub mod orientation;
pub mod source;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CaptureConfig;
pub use device::CaptureDevice;
pub use error::CaptureError;
pub use frame::Frame;
pub use orientation::{
    DeviceOrientation, FixedOrientation, Orientation, OrientationSensor, SharedOrientation,
};
pub use source::{CaptureSource, FrameSink};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Device;
