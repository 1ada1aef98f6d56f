use bodymark_base::{Tensor, Vec2};
use v4l::{
    Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
    io::traits::CaptureStream, video::Capture,
};

use crate::{
    CaptureConfig, CaptureDevice, CaptureError,
    convert::{check_yuyv_width, yuyv_to_rgb},
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

/// V4L2 webcam backend. Negotiates YUYV and converts to RGB.
pub struct V4l2Device {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
}

impl std::fmt::Debug for V4l2Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Device")
            .field("stream", &self.stream.is_some())
            .field("size", &self.size)
            .finish()
    }
}

impl Default for V4l2Device {
    fn default() -> Self {
        Self::new()
    }
}

impl V4l2Device {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
        }
    }
}

impl CaptureDevice for V4l2Device {
    fn open(&mut self, config: &CaptureConfig) -> Result<Vec2<usize>, CaptureError> {
        self.stream.take();

        let device = Device::with_path(config.device()).map_err(|e| {
            CaptureError::DeviceUnavailable(format!("{}: {}", config.device(), e))
        })?;

        let requested = Format::new(config.width(), config.height(), FourCC::new(b"YUYV"));
        let actual = Capture::set_format(&device, &requested)
            .map_err(|e| CaptureError::Configuration(format!("set_format failed: {}", e)))?;
        if actual.fourcc != FourCC::new(b"YUYV") {
            return Err(CaptureError::Configuration(format!(
                "device does not support YUYV (offered {})",
                actual.fourcc
            )));
        }
        check_yuyv_width(actual.width as usize)?;
        self.size = Vec2::new(actual.width as usize, actual.height as usize);
        if actual.width != config.width() || actual.height != config.height() {
            log::warn!(
                "v4l2: requested {}x{}, device chose {}x{}",
                config.width(),
                config.height(),
                actual.width,
                actual.height
            );
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)
            .map_err(|e| CaptureError::Configuration(format!("set_params failed: {}", e)))?;

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|e| CaptureError::InputUnavailable(e.to_string()))?;
        self.stream = Some(stream);

        Ok(self.size)
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Tensor<u8>, CaptureError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| CaptureError::Stream("device not open".to_string()))?;
        let (frame_data, _metadata) =
            CaptureStream::next(stream).map_err(|e| CaptureError::Stream(e.to_string()))?;
        let rgb = yuyv_to_rgb(frame_data, self.size.x, self.size.y).ok_or_else(|| {
            CaptureError::Stream(format!(
                "short YUYV frame: {} bytes for {}x{}",
                frame_data.len(),
                self.size.x,
                self.size.y
            ))
        })?;
        Ok(Tensor::new(vec![self.size.y, self.size.x, 3], rgb)?)
    }
}
