use crate::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Default> Default for Rect<T> {
    fn default() -> Self {
        Self {
            origin: Vec2::zero(),
            size: Vec2::zero(),
        }
    }
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Default> Rect<T> {
    /// A rectangle at the origin with the given size (layer "bounds").
    pub fn from_size(size: Vec2<T>) -> Self {
        Self {
            origin: Vec2::zero(),
            size,
        }
    }
}

impl<T: std::ops::Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: std::ops::Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }

    pub fn intersects(&self, other: Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        self.origin.x < other_max.x
            && other.origin.x < self_max.x
            && self.origin.y < other_max.y
            && other.origin.y < self_max.y
    }
}

impl Rect<f32> {
    /// Square bounding box of a circle of `radius` centered on `center`.
    pub fn around(center: Vec2<f32>, radius: f32) -> Self {
        Self {
            origin: Vec2::new(center.x - radius, center.y - radius),
            size: Vec2::new(2.0 * radius, 2.0 * radius),
        }
    }

    pub fn center(&self) -> Vec2<f32> {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    pub fn intersection(&self, other: Rect<f32>) -> Option<Rect<f32>> {
        if !self.intersects(other) {
            return None;
        }
        let min = Vec2::new(
            self.origin.x.max(other.origin.x),
            self.origin.y.max(other.origin.y),
        );
        let max = Vec2::new(
            self.max().x.min(other.max().x),
            self.max().y.min(other.max().y),
        );
        Some(Rect::new(min, max - min))
    }

    /// Intersection over union; 0.0 for disjoint or empty boxes.
    pub fn iou(&self, other: Rect<f32>) -> f32 {
        if self.area() <= 0.0 || other.area() <= 0.0 {
            return 0.0;
        }
        let intersection = self.intersection(other).map_or(0.0, |r| r.area());
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }
}
