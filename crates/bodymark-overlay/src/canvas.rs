use bodymark_base::Vec2;

/// Pack 8-bit RGB as 0x00RRGGBB.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Convert an HWC RGB buffer to packed 0x00RRGGBB pixels.
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    buf.chunks_exact(3)
        .take(width * height)
        .map(|px| pack_rgb(px[0], px[1], px[2]))
        .collect()
}

/// A 0x00RRGGBB pixel surface, the format minifb presents.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Vec2<usize> {
        Vec2::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Change the size; contents are cleared to black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Fill every pixel whose center lies within `radius` of `center`.
    pub fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: u32) {
        if !center.is_finite() || radius.is_nan() || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;

        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.set(x, y, color);
                }
            }
        }
    }
}
