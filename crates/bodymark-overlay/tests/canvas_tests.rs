use bodymark_base::Vec2;
use bodymark_overlay::{Canvas, pack_rgb, rgb_to_argb};

#[test]
fn test_pack_rgb() {
    assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
}

#[test]
fn test_rgb_to_argb() {
    let rgb = [255, 0, 0, 0, 255, 0];
    assert_eq!(rgb_to_argb(&rgb, 2, 1), vec![0x00ff_0000, 0x0000_ff00]);
}

#[test]
fn test_set_ignores_out_of_bounds() {
    let mut canvas = Canvas::new(4, 4);
    canvas.set(-1, 0, 1);
    canvas.set(4, 0, 1);
    canvas.set(0, 4, 1);
    assert!(canvas.pixels().iter().all(|&p| p == 0));
    assert_eq!(canvas.get(4, 0), None);
}

#[test]
fn test_fill_circle_clips_at_edges() {
    let mut canvas = Canvas::new(10, 10);
    canvas.fill_circle(Vec2::new(0.0, 0.0), 3.0, 5);
    assert_eq!(canvas.get(0, 0), Some(5));
    assert_eq!(canvas.get(2, 0), Some(5));
    assert_eq!(canvas.get(5, 5), Some(0));
}

#[test]
fn test_fill_circle_ignores_bad_input() {
    let mut canvas = Canvas::new(10, 10);
    canvas.fill_circle(Vec2::new(f32::NAN, 5.0), 3.0, 5);
    canvas.fill_circle(Vec2::new(5.0, 5.0), 0.0, 5);
    assert!(canvas.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_resize_clears() {
    let mut canvas = Canvas::new(2, 2);
    canvas.fill(9);
    canvas.resize(3, 1);
    assert_eq!(canvas.size(), Vec2::new(3, 1));
    assert_eq!(canvas.pixels(), &[0, 0, 0]);
}
