//! Marker overlay drawn on top of the camera preview.

pub mod canvas;
pub mod geometry;
pub mod marker;
pub mod renderer;

pub use canvas::{Canvas, pack_rgb, rgb_to_argb};
pub use geometry::LayerGeometry;
pub use marker::{MARKER_COLOR, MARKER_RADIUS, Marker};
pub use renderer::OverlayRenderer;
