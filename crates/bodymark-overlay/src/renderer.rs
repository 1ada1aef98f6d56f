use bodymark_base::{OverlayPoint, Vec2};
use bodymark_video::Frame;

use crate::{Canvas, LayerGeometry, MARKER_COLOR, Marker};

/// Keeps the markers of the most recent detection and draws them.
///
/// Every [`render`](Self::render) replaces the whole marker set in one step.
/// Markers live in frame pixels; [`LayerGeometry`] places them on the
/// surface and only changes on [`resize`](Self::resize).
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    geometry: LayerGeometry,
    markers: Vec<Marker>,
    commits: u64,
}

impl OverlayRenderer {
    pub fn new(frame_size: Vec2<usize>, surface_size: Vec2<usize>) -> Self {
        let geometry = LayerGeometry::fit(frame_size, surface_size);
        log::debug!(
            "overlay: {}x{} frame on {}x{} surface, scale {}",
            frame_size.x,
            frame_size.y,
            surface_size.x,
            surface_size.y,
            geometry.scale()
        );
        Self {
            geometry,
            markers: Vec::new(),
            commits: 0,
        }
    }

    /// Replace all markers with one marker per point. An empty slice clears.
    pub fn render(&mut self, points: &[OverlayPoint]) {
        let markers: Vec<Marker> = points.iter().copied().map(Marker::new).collect();
        self.markers = markers;
        self.commits += 1;
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of marker sets committed so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn geometry(&self) -> &LayerGeometry {
        &self.geometry
    }

    /// Refit the layer to a new surface size. Markers are kept.
    pub fn resize(&mut self, surface_size: Vec2<usize>) {
        if surface_size == self.geometry.surface_size() {
            return;
        }
        self.geometry = LayerGeometry::fit(self.geometry.frame_size(), surface_size);
        log::debug!(
            "overlay: resized to {}x{}, scale {}",
            surface_size.x,
            surface_size.y,
            self.geometry.scale()
        );
    }

    /// Paint the committed markers onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        let scale = self.geometry.scale();
        for marker in &self.markers {
            let center = self.geometry.to_surface(marker.center);
            canvas.fill_circle(center, marker.radius * scale, MARKER_COLOR);
        }
    }

    /// Paint `frame` through the same geometry as the markers. Surface pixels
    /// that fall outside the frame are left untouched.
    pub fn draw_frame(&self, frame: &Frame, canvas: &mut Canvas) {
        let Some(inverse) = self.geometry.transform().inverse() else {
            return;
        };
        let (w, h) = (frame.width(), frame.height());
        let channels = frame.channels();
        if channels < 3 {
            return;
        }
        let data = &frame.pixels().data;

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let p = inverse.apply(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                if p.x < 0.0 || p.y < 0.0 {
                    continue;
                }
                let (fx, fy) = (p.x as usize, p.y as usize);
                if fx >= w || fy >= h {
                    continue;
                }
                let i = (fy * w + fx) * channels;
                let color = crate::pack_rgb(data[i], data[i + 1], data[i + 2]);
                canvas.set(x as i32, y as i32, color);
            }
        }
    }
}
