use bodymark_base::{Tensor, Vec2};

use crate::{CaptureConfig, CaptureError};

/// A camera backend.
///
/// All three methods run on the capture worker thread; some backends need
/// `open` and `blocking_capture` on the same OS thread.
pub trait CaptureDevice: Send + 'static {
    /// Open and configure the device. Returns the native frame size
    /// (width, height) the device actually settled on.
    fn open(&mut self, config: &CaptureConfig) -> Result<Vec2<usize>, CaptureError>;

    /// Close the device, if open.
    fn close(&mut self);

    /// Block until the next frame is available. Returns an RGB image with
    /// shape `[height, width, 3]`.
    fn blocking_capture(&mut self) -> Result<Tensor<u8>, CaptureError>;
}

impl CaptureDevice for Box<dyn CaptureDevice> {
    fn open(&mut self, config: &CaptureConfig) -> Result<Vec2<usize>, CaptureError> {
        (**self).open(config)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn blocking_capture(&mut self) -> Result<Tensor<u8>, CaptureError> {
        (**self).blocking_capture()
    }
}
