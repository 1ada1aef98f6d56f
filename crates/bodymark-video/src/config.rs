/// Configuration for camera capture.
///
/// Defaults to the VGA preset the pose model is happy with.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    device: String,
    width: u32,
    height: u32,
    fps: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl CaptureConfig {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    /// Set the requested capture width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the requested capture height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the requested frames per second.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
