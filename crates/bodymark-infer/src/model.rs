use bodymark_base::Vec2;
use bodymark_video::{Frame, Orientation};

use crate::{BodyObservation, InferError};

/// Where a model puts the origin of its normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAxis {
    /// Origin at the bottom-left corner, y grows upward.
    #[default]
    BottomUp,
    /// Origin at the top-left corner, y grows downward.
    TopDown,
}

impl VerticalAxis {
    /// Map a normalized location into the pixel space of a `size` frame
    /// (origin top-left, y down).
    pub fn denormalize(self, location: Vec2<f32>, size: Vec2<usize>) -> Vec2<f32> {
        let size = size.to_f32();
        let y = match self {
            VerticalAxis::BottomUp => 1.0 - location.y,
            VerticalAxis::TopDown => location.y,
        };
        Vec2::new(location.x * size.x, y * size.y)
    }
}

/// A body pose model: one frame in, zero or more bodies out.
///
/// Implementations are opaque. They may block for as long as inference
/// takes, and are only ever called from one thread at a time.
pub trait PoseModel: Send + 'static {
    fn infer(
        &mut self,
        frame: &Frame,
        orientation: Orientation,
    ) -> Result<Vec<BodyObservation>, InferError>;

    fn vertical_axis(&self) -> VerticalAxis {
        VerticalAxis::BottomUp
    }
}

impl PoseModel for Box<dyn PoseModel> {
    fn infer(
        &mut self,
        frame: &Frame,
        orientation: Orientation,
    ) -> Result<Vec<BodyObservation>, InferError> {
        (**self).infer(frame, orientation)
    }

    fn vertical_axis(&self) -> VerticalAxis {
        (**self).vertical_axis()
    }
}
