use bodymark_base::Vec2;
use bodymark_overlay::LayerGeometry;

fn approx(a: Vec2<f32>, b: Vec2<f32>) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

#[test]
fn test_scale_takes_the_larger_ratio() {
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), Vec2::new(960, 1280));
    assert_eq!(geometry.scale(), 2.0);

    // 1000 / 480 beats 1000 / 640
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), Vec2::new(1000, 1000));
    assert!((geometry.scale() - 1000.0 / 480.0).abs() < 1e-6);
}

#[test]
fn test_empty_surface_uses_unit_scale() {
    let frame = Vec2::new(640, 480);
    assert_eq!(LayerGeometry::fit(frame, Vec2::new(0, 800)).scale(), 1.0);
    assert_eq!(LayerGeometry::fit(frame, Vec2::new(800, 0)).scale(), 1.0);
    assert_eq!(LayerGeometry::fit(frame, Vec2::new(0, 0)).scale(), 1.0);
}

#[test]
fn test_empty_frame_uses_unit_scale() {
    let geometry = LayerGeometry::fit(Vec2::new(0, 0), Vec2::new(480, 640));
    assert_eq!(geometry.scale(), 1.0);
}

#[test]
fn test_frame_center_lands_on_surface_middle() {
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), Vec2::new(1080, 1920));
    assert!(approx(
        geometry.to_surface(Vec2::new(320.0, 240.0)),
        Vec2::new(540.0, 960.0)
    ));
}

#[test]
fn test_quarter_turn_with_flip() {
    // scale 1: frame x runs down the surface, frame y runs across it
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), Vec2::new(480, 640));
    assert_eq!(geometry.scale(), 1.0);
    assert!(approx(geometry.to_surface(Vec2::new(0.0, 0.0)), Vec2::new(0.0, 0.0)));
    assert!(approx(geometry.to_surface(Vec2::new(640.0, 0.0)), Vec2::new(0.0, 640.0)));
    assert!(approx(geometry.to_surface(Vec2::new(0.0, 480.0)), Vec2::new(480.0, 0.0)));
    assert!(approx(geometry.to_surface(Vec2::new(100.0, 50.0)), Vec2::new(50.0, 100.0)));
}

#[test]
fn test_scaled_mapping_matches_closed_form() {
    let (w, h) = (640.0f32, 480.0f32);
    let surface = Vec2::new(1280usize, 1000usize);
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), surface);
    let s = geometry.scale();
    let mid = surface.to_f32() * 0.5;

    let p = Vec2::new(123.0, 45.0);
    let expected = Vec2::new(s * (p.y - h / 2.0) + mid.x, s * (p.x - w / 2.0) + mid.y);
    assert!(approx(geometry.to_surface(p), expected));
}

#[test]
fn test_to_frame_inverts_to_surface() {
    let geometry = LayerGeometry::fit(Vec2::new(640, 480), Vec2::new(800, 600));
    let p = Vec2::new(17.0, 301.0);
    let back = geometry.to_frame(geometry.to_surface(p)).unwrap();
    assert!(approx(back, p));
}
