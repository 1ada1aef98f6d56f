use bodymark_video::convert::yuyv_to_rgb;

#[test]
fn test_yuyv_to_rgb_gray() {
    let rgb = yuyv_to_rgb(&[128, 128, 128, 128], 2, 1).expect("valid input");
    assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
}

#[test]
fn test_yuyv_to_rgb_black_and_white() {
    let rgb = yuyv_to_rgb(&[255, 128, 0, 128], 2, 1).expect("valid input");
    assert_eq!(rgb, vec![255, 255, 255, 0, 0, 0]);
}

#[test]
fn test_yuyv_to_rgb_short_input() {
    assert!(yuyv_to_rgb(&[0, 0, 0], 2, 1).is_none());
}

#[test]
fn test_yuyv_to_rgb_odd_width() {
    assert!(yuyv_to_rgb(&[128; 6], 3, 1).is_none());
}

#[test]
fn test_odd_yuyv_width_is_a_configuration_error() {
    use bodymark_video::{CaptureError, convert::check_yuyv_width};

    assert!(check_yuyv_width(640).is_ok());
    assert!(matches!(
        check_yuyv_width(641),
        Err(CaptureError::Configuration(_))
    ));
}
