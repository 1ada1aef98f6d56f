use bodymark_base::Tensor;

use crate::InferError;

/// Side length of the square network input.
pub const TARGET_SIZE: usize = 640;

// gray letterbox padding, already in [0, 1]
const PAD_VALUE: f32 = 114.0 / 255.0;

/// How an image was fitted into the network input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
}

impl Letterbox {
    /// Map a network-space coordinate back to the source image.
    pub fn unmap(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pad_x) / self.scale, (y - self.pad_y) / self.scale)
    }
}

/// Letterbox an RGB `[H, W, 3]` image into a `[1, 3, 640, 640]` float tensor
/// with values in [0, 1]. Nearest-neighbor resampling.
pub fn preprocess(image: &Tensor<u8>) -> Result<(Tensor<f32>, Letterbox), InferError> {
    let (h, w) = match image.hwc() {
        Some((h, w, 3)) if h > 0 && w > 0 => (h, w),
        _ => {
            return Err(InferError::Shape(format!(
                "expected a non-empty [H, W, 3] image, got {:?}",
                image.shape
            )));
        }
    };

    let scale = (TARGET_SIZE as f32 / w as f32).min(TARGET_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).clamp(1, TARGET_SIZE);
    let new_h = ((h as f32 * scale) as usize).clamp(1, TARGET_SIZE);
    let pad_x = (TARGET_SIZE - new_w) / 2;
    let pad_y = (TARGET_SIZE - new_h) / 2;

    let plane = TARGET_SIZE * TARGET_SIZE;
    let mut data = vec![PAD_VALUE; 3 * plane];
    for y in 0..new_h {
        let src_y = ((y as f32 / scale) as usize).min(h - 1);
        for x in 0..new_w {
            let src_x = ((x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            let dst = (y + pad_y) * TARGET_SIZE + (x + pad_x);
            for ch in 0..3 {
                data[ch * plane + dst] = image.data[src + ch] as f32 / 255.0;
            }
        }
    }

    let tensor = Tensor::new(vec![1, 3, TARGET_SIZE, TARGET_SIZE], data)?;
    Ok((
        tensor,
        Letterbox {
            scale,
            pad_x: pad_x as f32,
            pad_y: pad_y as f32,
        },
    ))
}
