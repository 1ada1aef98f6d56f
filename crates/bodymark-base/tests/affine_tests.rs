use bodymark_base::{Affine2, Mat2, Vec2};

fn assert_close(a: Vec2<f32>, b: Vec2<f32>) {
    assert!(
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn test_identity_leaves_points_alone() {
    let p = Vec2::new(3.5, -2.0);
    assert_eq!(Affine2::identity().apply(p), p);
}

#[test]
fn test_quarter_turn_matches_rotation() {
    let exact = Mat2::quarter_turn();
    let trig = Mat2::rotation(std::f32::consts::FRAC_PI_2);
    let p = Vec2::new(2.0, 1.0);
    assert_close(exact * p, trig * p);
    assert_eq!(exact * p, Vec2::new(-1.0, 2.0));
}

#[test]
fn test_then_applies_in_order() {
    let scale = Affine2::from_linear(Mat2::scaling(2.0, 3.0));
    let shift = Affine2::from_translation(Vec2::new(1.0, 1.0));

    // scale first, then shift
    assert_eq!(scale.then(shift).apply(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 4.0));
    // shift first, then scale
    assert_eq!(shift.then(scale).apply(Vec2::new(1.0, 1.0)), Vec2::new(4.0, 6.0));
}

#[test]
fn test_about_maps_pivot_to_target() {
    let t = Affine2::about(
        Mat2::quarter_turn(),
        Vec2::new(10.0, 20.0),
        Vec2::new(100.0, 200.0),
    );
    assert_eq!(t.apply(Vec2::new(10.0, 20.0)), Vec2::new(100.0, 200.0));
    assert_eq!(t.apply(Vec2::new(11.0, 20.0)), Vec2::new(100.0, 201.0));
}

#[test]
fn test_inverse_round_trips() {
    let t = Affine2::about(
        Mat2::quarter_turn() * Mat2::scaling(1.5, -1.5),
        Vec2::new(320.0, 240.0),
        Vec2::new(187.5, 406.0),
    );
    let inv = t.inverse().unwrap();
    let p = Vec2::new(12.0, 400.0);
    assert_close(inv.apply(t.apply(p)), p);
}

#[test]
fn test_singular_has_no_inverse() {
    let t = Affine2::from_linear(Mat2::scaling(0.0, 1.0));
    assert!(t.inverse().is_none());
}
