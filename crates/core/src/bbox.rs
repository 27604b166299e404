use crate::point::{self, Point3};

/// Axis-aligned bounding box. An empty box contains nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
    empty: bool,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
            empty: true,
        }
    }

    /// Box spanning `[origin, origin + extent]`.
    pub fn from_origin_extent(origin: Point3, extent: Point3) -> Self {
        let mut aabb = Self::empty();
        aabb.expand_with_point(origin);
        aabb.expand_with_point(point::add(origin, extent));
        aabb
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand_with_point(*p);
        }
        aabb
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Grow to include `point`; non-finite points are skipped.
    pub fn expand_with_point(&mut self, point: Point3) {
        if !point::is_finite(&point) {
            return;
        }

        if self.empty {
            self.min = point;
            self.max = point;
            self.empty = false;
            return;
        }

        for (axis, &val) in point.iter().enumerate() {
            self.min[axis] = self.min[axis].min(val);
            self.max[axis] = self.max[axis].max(val);
        }
    }

    pub fn contains(&self, point: &Point3) -> bool {
        if self.empty || !point::is_finite(point) {
            return false;
        }

        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    pub fn extent(&self) -> Point3 {
        if self.empty {
            return [0.0; 3];
        }
        point::sub(self.max, self.min)
    }

    pub fn center(&self) -> Point3 {
        if self.empty {
            return [0.0; 3];
        }
        point::scale(point::add(self.min, self.max), 0.5)
    }
}
