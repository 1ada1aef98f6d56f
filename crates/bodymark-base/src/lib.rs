pub mod affine;
pub mod logging;
pub mod mat2;
pub mod rect;
pub mod stamp;
pub mod tensor;
pub mod vec2;

pub use affine::Affine2;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
pub use mat2::Mat2;
pub use rect::Rect;
pub use stamp::{Sequence, Stamped};
pub use tensor::{Tensor, TensorError};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use bodymark_base::log::*
pub use log;

/// A pixel-space point produced by the pose extractor and consumed by the overlay.
pub type OverlayPoint = Vec2<f32>;
