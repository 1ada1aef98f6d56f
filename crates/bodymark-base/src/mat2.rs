use std::ops::Mul;

use crate::Vec2;

/// Column-major 2x2 matrix, the linear part of an [`Affine2`](crate::Affine2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub cols: [Vec2<f32>; 2],
}

impl Mat2 {
    pub fn from_cols(c0: Vec2<f32>, c1: Vec2<f32>) -> Self {
        Self { cols: [c0, c1] }
    }

    pub fn identity() -> Self {
        Self::from_cols(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
    }

    /// Counter-clockwise rotation by `angle` radians (in a y-up frame).
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos))
    }

    /// Quarter turn, exact (no trigonometric rounding).
    pub fn quarter_turn() -> Self {
        Self::from_cols(Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0))
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::from_cols(Vec2::new(sx, 0.0), Vec2::new(0.0, sy))
    }

    pub fn determinant(self) -> f32 {
        self.cols[0].x * self.cols[1].y - self.cols[1].x * self.cols[0].y
    }

    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-7 {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.cols[0].x;
        let c = self.cols[0].y;
        let b = self.cols[1].x;
        let d = self.cols[1].y;
        Some(Self::from_cols(
            Vec2::new(d * inv_det, -c * inv_det),
            Vec2::new(-b * inv_det, a * inv_det),
        ))
    }
}

// Mat2 * Vec2
impl Mul<Vec2<f32>> for Mat2 {
    type Output = Vec2<f32>;
    fn mul(self, v: Vec2<f32>) -> Vec2<f32> {
        self.cols[0] * v.x + self.cols[1] * v.y
    }
}

// Mat2 * Mat2
impl Mul<Mat2> for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Mat2) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1])
    }
}
