use bodymark_base::{Rect, Vec2};
use bodymark_overlay::{Canvas, MARKER_COLOR, MARKER_RADIUS, Marker, OverlayRenderer, pack_rgb};
use bodymark_video::Frame;

fn renderer() -> OverlayRenderer {
    OverlayRenderer::new(Vec2::new(640, 480), Vec2::new(480, 640))
}

#[test]
fn test_single_point_gets_one_marker() {
    let mut renderer = renderer();
    renderer.render(&[Vec2::new(320.0, 240.0)]);

    assert_eq!(renderer.markers().len(), 1);
    let marker = renderer.markers()[0];
    assert_eq!(marker.radius, 6.0);
    assert_eq!(marker.center, Vec2::new(320.0, 240.0));
    assert_eq!(
        marker.bounds(),
        Rect::new(Vec2::new(314.0, 234.0), Vec2::new(12.0, 12.0))
    );
}

#[test]
fn test_render_replaces_previous_markers() {
    let mut renderer = renderer();
    renderer.render(&[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)]);
    renderer.render(&[Vec2::new(9.0, 9.0)]);

    assert_eq!(renderer.markers(), &[Marker::new(Vec2::new(9.0, 9.0))]);
    assert_eq!(renderer.commits(), 2);
}

#[test]
fn test_render_is_idempotent() {
    let points = [Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)];
    let mut once = renderer();
    once.render(&points);
    let mut twice = renderer();
    twice.render(&points);
    twice.render(&points);

    assert_eq!(once.markers(), twice.markers());
}

#[test]
fn test_empty_render_clears() {
    let mut renderer = renderer();
    renderer.render(&[Vec2::new(10.0, 20.0)]);
    renderer.render(&[]);

    assert!(renderer.markers().is_empty());
    assert_eq!(renderer.commits(), 2);
}

#[test]
fn test_resize_refits_and_keeps_markers() {
    let mut renderer = renderer();
    renderer.render(&[Vec2::new(10.0, 20.0)]);
    renderer.resize(Vec2::new(960, 1280));

    assert_eq!(renderer.geometry().scale(), 2.0);
    assert_eq!(renderer.geometry().surface_size(), Vec2::new(960, 1280));
    assert_eq!(renderer.markers().len(), 1);

    renderer.resize(Vec2::new(0, 0));
    assert_eq!(renderer.geometry().scale(), 1.0);
}

#[test]
fn test_draw_paints_markers_on_the_surface() {
    let mut renderer = renderer();
    renderer.render(&[Vec2::new(320.0, 240.0)]);
    let mut canvas = Canvas::new(480, 640);

    renderer.draw(&mut canvas);

    // frame center lands on the surface middle
    assert_eq!(canvas.get(240, 320), Some(MARKER_COLOR));
    assert_eq!(canvas.get(240 + MARKER_RADIUS as usize - 1, 320), Some(MARKER_COLOR));
    assert_eq!(canvas.get(240 + MARKER_RADIUS as usize + 1, 320), Some(0));
    assert_eq!(canvas.get(0, 0), Some(0));
}

#[test]
fn test_draw_scales_marker_radius() {
    let mut renderer = OverlayRenderer::new(Vec2::new(640, 480), Vec2::new(960, 1280));
    renderer.render(&[Vec2::new(320.0, 240.0)]);
    let mut canvas = Canvas::new(960, 1280);

    renderer.draw(&mut canvas);

    assert_eq!(canvas.get(480 + 11, 640), Some(MARKER_COLOR));
    assert_eq!(canvas.get(480 + 13, 640), Some(0));
}

#[test]
fn test_draw_frame_uses_marker_geometry() {
    // 4x2 frame, every pixel a different color
    let mut data = Vec::new();
    for y in 0..2u8 {
        for x in 0..4u8 {
            data.extend_from_slice(&[x * 10, y * 10, 7]);
        }
    }
    let frame = Frame::from_rgb(4, 2, data, 1).unwrap();
    let renderer = OverlayRenderer::new(Vec2::new(4, 2), Vec2::new(2, 4));
    let mut canvas = Canvas::new(2, 4);

    renderer.draw_frame(&frame, &mut canvas);

    // at scale 1 surface (x, y) shows frame (y, x)
    for y in 0..4usize {
        for x in 0..2usize {
            let expected = pack_rgb(y as u8 * 10, x as u8 * 10, 7);
            assert_eq!(canvas.get(x, y), Some(expected), "surface ({x}, {y})");
        }
    }
}
