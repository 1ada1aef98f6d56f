use bodymark_base::{Affine2, Mat2, Vec2};

/// Placement of the frame-sized overlay layer on a display surface.
///
/// The layer is rotated a quarter turn and scaled by `(s, -s)` about its
/// center, which is then put on the middle of the surface. Points in frame
/// pixels go in, surface pixels come out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerGeometry {
    frame_size: Vec2<usize>,
    surface_size: Vec2<usize>,
    scale: f32,
    transform: Affine2,
}

impl LayerGeometry {
    /// Fit a `frame_size` (W, H) layer onto a `surface_size` surface.
    ///
    /// `scale = max(surface_w / H, surface_h / W)`. An empty surface, or a
    /// scale that comes out infinite or NaN, uses 1.0.
    pub fn fit(frame_size: Vec2<usize>, surface_size: Vec2<usize>) -> Self {
        let frame = frame_size.to_f32();
        let surface = surface_size.to_f32();

        let fitted = (surface.x / frame.y).max(surface.y / frame.x);
        let scale = if surface_size.is_degenerate() || !fitted.is_finite() {
            1.0
        } else {
            fitted
        };

        let linear = Mat2::quarter_turn() * Mat2::scaling(scale, -scale);
        let transform = Affine2::about(linear, frame * 0.5, surface * 0.5);

        Self {
            frame_size,
            surface_size,
            scale,
            transform,
        }
    }

    pub fn frame_size(&self) -> Vec2<usize> {
        self.frame_size
    }

    pub fn surface_size(&self) -> Vec2<usize> {
        self.surface_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Frame pixel to surface pixel.
    pub fn to_surface(&self, point: Vec2<f32>) -> Vec2<f32> {
        self.transform.apply(point)
    }

    /// Surface pixel back to frame pixel.
    pub fn to_frame(&self, point: Vec2<f32>) -> Option<Vec2<f32>> {
        self.transform.inverse().map(|inverse| inverse.apply(point))
    }
}
