use bodymark_base::{Tensor, Vec2};
use bodymark_video::{
    DeviceOrientation, FixedOrientation, Orientation, OrientationSensor, SharedOrientation,
};

#[test]
fn test_from_device() {
    use DeviceOrientation::*;
    assert_eq!(Orientation::from_device(Portrait), Orientation::Up);
    assert_eq!(Orientation::from_device(PortraitUpsideDown), Orientation::Left);
    assert_eq!(Orientation::from_device(LandscapeLeft), Orientation::UpMirrored);
    assert_eq!(Orientation::from_device(LandscapeRight), Orientation::Down);
    assert_eq!(Orientation::from_device(FaceUp), Orientation::Up);
    assert_eq!(Orientation::from_device(FaceDown), Orientation::Up);
    assert_eq!(Orientation::from_device(Unknown), Orientation::Up);
}

#[test]
fn test_exif_codes() {
    assert_eq!(Orientation::Up.exif(), 1);
    assert_eq!(Orientation::UpMirrored.exif(), 2);
    assert_eq!(Orientation::Down.exif(), 3);
    assert_eq!(Orientation::Left.exif(), 8);
}

// 3x2 single-channel image:
//   1 2 3
//   4 5 6
fn sample() -> Tensor<u8> {
    Tensor::new(vec![2, 3, 1], vec![1, 2, 3, 4, 5, 6]).unwrap()
}

#[test]
fn test_apply_up_is_identity() {
    assert_eq!(Orientation::Up.apply(&sample()), sample());
}

#[test]
fn test_apply_mirrored() {
    let out = Orientation::UpMirrored.apply(&sample());
    assert_eq!(out.shape, vec![2, 3, 1]);
    assert_eq!(out.data, vec![3, 2, 1, 6, 5, 4]);
}

#[test]
fn test_apply_down() {
    let out = Orientation::Down.apply(&sample());
    assert_eq!(out.data, vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_apply_left_turns_counter_clockwise() {
    let out = Orientation::Left.apply(&sample());
    // upright:
    //   3 6
    //   2 5
    //   1 4
    assert_eq!(out.shape, vec![3, 2, 1]);
    assert_eq!(out.data, vec![3, 6, 2, 5, 1, 4]);
    assert_eq!(Orientation::Left.upright_size(Vec2::new(3, 2)), Vec2::new(2, 3));
}

#[test]
fn test_apply_keeps_channels_together() {
    let rgb = Tensor::new(vec![1, 2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    let out = Orientation::UpMirrored.apply(&rgb);
    assert_eq!(out.data, vec![4, 5, 6, 1, 2, 3]);
}

#[test]
fn test_sensors() {
    let fixed = FixedOrientation(DeviceOrientation::LandscapeRight);
    assert_eq!(fixed.device_orientation(), DeviceOrientation::LandscapeRight);

    let shared = SharedOrientation::new(DeviceOrientation::Portrait);
    let handle = shared.clone();
    handle.set(DeviceOrientation::PortraitUpsideDown);
    assert_eq!(shared.device_orientation(), DeviceOrientation::PortraitUpsideDown);
}
