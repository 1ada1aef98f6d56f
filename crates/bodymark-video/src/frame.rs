use bodymark_base::{Tensor, Vec2};
use std::time::Instant;

use crate::CaptureError;

/// One captured camera frame.
///
/// The pixel buffer is immutable once captured. `seq` increases by one for
/// every frame a capture source delivers and gives frames a total order.
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Tensor<u8>,
    seq: u64,
    timestamp: Instant,
}

impl Frame {
    /// Wrap an HWC pixel tensor. Fails unless the tensor is 3D with non-zero
    /// width and height and its buffer holds exactly `H * W * C` elements.
    pub fn new(pixels: Tensor<u8>, seq: u64, timestamp: Instant) -> Result<Self, CaptureError> {
        match pixels.hwc() {
            Some((h, w, c)) if h > 0 && w > 0 && c > 0 => {}
            _ => {
                return Err(CaptureError::Stream(format!(
                    "expected a non-empty [H, W, C] frame, got {:?}",
                    pixels.shape
                )));
            }
        }
        // fields are public, so the buffer length is checked again here
        let Tensor { shape, data } = pixels;
        Ok(Self {
            pixels: Tensor::new(shape, data)?,
            seq,
            timestamp,
        })
    }

    /// Build an RGB frame from raw bytes, stamped now.
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>, seq: u64) -> Result<Self, CaptureError> {
        let pixels = Tensor::new(vec![height, width, 3], data)?;
        Self::new(pixels, seq, Instant::now())
    }

    pub fn pixels(&self) -> &Tensor<u8> {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.pixels.shape[1]
    }

    pub fn height(&self) -> usize {
        self.pixels.shape[0]
    }

    pub fn channels(&self) -> usize {
        self.pixels.shape[2]
    }

    /// (width, height)
    pub fn size(&self) -> Vec2<usize> {
        Vec2::new(self.width(), self.height())
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}
