use crate::{Mat2, Vec2};

/// 2D affine transform: `p' = linear * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub linear: Mat2,
    pub translation: Vec2<f32>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    pub fn identity() -> Self {
        Self {
            linear: Mat2::identity(),
            translation: Vec2::zero(),
        }
    }

    pub fn from_linear(linear: Mat2) -> Self {
        Self {
            linear,
            translation: Vec2::zero(),
        }
    }

    pub fn from_translation(translation: Vec2<f32>) -> Self {
        Self {
            linear: Mat2::identity(),
            translation,
        }
    }

    /// Apply `linear` around `pivot`, then move the pivot onto `target`.
    ///
    /// This is how a layer transform behaves: the linear part acts about the
    /// layer's anchor point, and the anchor is placed at the layer position.
    pub fn about(linear: Mat2, pivot: Vec2<f32>, target: Vec2<f32>) -> Self {
        Self::from_translation(-pivot)
            .then(Self::from_linear(linear))
            .then(Self::from_translation(target))
    }

    /// Compose so that `self` is applied first, then `next`.
    pub fn then(self, next: Affine2) -> Self {
        Self {
            linear: next.linear * self.linear,
            translation: next.linear * self.translation + next.translation,
        }
    }

    pub fn apply(&self, point: Vec2<f32>) -> Vec2<f32> {
        self.linear * point + self.translation
    }

    pub fn inverse(&self) -> Option<Self> {
        let linear = self.linear.inverse()?;
        Some(Self {
            linear,
            translation: -(linear * self.translation),
        })
    }
}
