use bodymark_base::{Tensor, Vec2};
use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

/// Physical orientation of the device holding the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceOrientation {
    Unknown = 0,
    /// Upright, home button at the bottom.
    Portrait = 1,
    /// Upside down, home button at the top.
    PortraitUpsideDown = 2,
    /// Horizontal, home button on the right.
    LandscapeLeft = 3,
    /// Horizontal, home button on the left.
    LandscapeRight = 4,
    FaceUp = 5,
    FaceDown = 6,
}

impl DeviceOrientation {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => DeviceOrientation::Portrait,
            2 => DeviceOrientation::PortraitUpsideDown,
            3 => DeviceOrientation::LandscapeLeft,
            4 => DeviceOrientation::LandscapeRight,
            5 => DeviceOrientation::FaceUp,
            6 => DeviceOrientation::FaceDown,
            _ => DeviceOrientation::Unknown,
        }
    }
}

/// How the stored pixels relate to the upright scene, in EXIF terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Stored upright (EXIF 1).
    #[default]
    Up,
    /// Mirrored left to right (EXIF 2).
    UpMirrored,
    /// Rotated 180 degrees (EXIF 3).
    Down,
    /// Needs a 270 degree clockwise turn to stand upright (EXIF 8).
    Left,
}

impl Orientation {
    /// Orientation of the next captured frame for the given device posture.
    pub fn from_device(device: DeviceOrientation) -> Self {
        match device {
            DeviceOrientation::PortraitUpsideDown => Orientation::Left,
            DeviceOrientation::LandscapeLeft => Orientation::UpMirrored,
            DeviceOrientation::LandscapeRight => Orientation::Down,
            DeviceOrientation::Portrait => Orientation::Up,
            _ => Orientation::Up,
        }
    }

    pub fn exif(self) -> u8 {
        match self {
            Orientation::Up => 1,
            Orientation::UpMirrored => 2,
            Orientation::Down => 3,
            Orientation::Left => 8,
        }
    }

    /// True when upright width and height are swapped relative to storage.
    pub fn swaps_axes(self) -> bool {
        self == Orientation::Left
    }

    /// Size (width, height) of the upright image.
    pub fn upright_size(self, stored: Vec2<usize>) -> Vec2<usize> {
        if self.swaps_axes() {
            Vec2::new(stored.y, stored.x)
        } else {
            stored
        }
    }

    /// Produce the upright image for an HWC tensor stored with this orientation.
    pub fn apply<T: Copy + Default>(self, image: &Tensor<T>) -> Tensor<T> {
        let Some((h, w, c)) = image.hwc() else {
            return image.clone();
        };
        if self == Orientation::Up {
            return image.clone();
        }

        let out_size = self.upright_size(Vec2::new(w, h));
        let mut data = vec![T::default(); image.data.len()];
        for oy in 0..out_size.y {
            for ox in 0..out_size.x {
                // source pixel for upright pixel (ox, oy)
                let (sx, sy) = match self {
                    Orientation::Up => (ox, oy),
                    Orientation::UpMirrored => (w - 1 - ox, oy),
                    Orientation::Down => (w - 1 - ox, h - 1 - oy),
                    Orientation::Left => (w - 1 - oy, ox),
                };
                let src = (sy * w + sx) * c;
                let dst = (oy * out_size.x + ox) * c;
                data[dst..dst + c].copy_from_slice(&image.data[src..src + c]);
            }
        }

        Tensor {
            shape: vec![out_size.y, out_size.x, c],
            data,
        }
    }
}

/// Reports the physical orientation at the moment a frame is captured.
pub trait OrientationSensor: Send + Sync + 'static {
    fn device_orientation(&self) -> DeviceOrientation;
}

/// A sensor that never moves (desktop webcams).
#[derive(Debug, Clone, Copy)]
pub struct FixedOrientation(pub DeviceOrientation);

impl OrientationSensor for FixedOrientation {
    fn device_orientation(&self) -> DeviceOrientation {
        self.0
    }
}

/// An orientation another thread can update, e.g. from a UI control.
#[derive(Debug, Clone)]
pub struct SharedOrientation {
    value: Arc<AtomicU8>,
}

impl SharedOrientation {
    pub fn new(initial: DeviceOrientation) -> Self {
        Self {
            value: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    pub fn set(&self, orientation: DeviceOrientation) {
        self.value.store(orientation as u8, Ordering::Relaxed);
    }
}

impl OrientationSensor for SharedOrientation {
    fn device_orientation(&self) -> DeviceOrientation {
        DeviceOrientation::from_u8(self.value.load(Ordering::Relaxed))
    }
}
