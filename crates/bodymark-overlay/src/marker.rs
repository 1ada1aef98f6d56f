use bodymark_base::{OverlayPoint, Rect};

pub const MARKER_RADIUS: f32 = 6.0;

/// Fill color of markers, 0x00RRGGBB.
pub const MARKER_COLOR: u32 = 0x0000_00ff;

/// A filled circle centered on one overlay point, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: OverlayPoint,
    pub radius: f32,
}

impl Marker {
    pub fn new(center: OverlayPoint) -> Self {
        Self {
            center,
            radius: MARKER_RADIUS,
        }
    }

    /// Square bounding box: top-left at `center - radius`, side `2 * radius`.
    pub fn bounds(&self) -> Rect<f32> {
        Rect::around(self.center, self.radius)
    }
}
