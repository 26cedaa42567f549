//! Line segments in 3D.

use nalgebra::{Point3, Vector3};

use crate::{approx_zero, points_approx_eq, VectorExt};

/// A finite line segment from `p0` to `p1`.
///
/// Zero-length segments are valid; their [`direction`](Self::direction) is the
/// zero vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    p0: Point3<f64>,
    p1: Point3<f64>,
}

impl LineSegment {
    /// Creates a segment from two endpoints.
    pub fn new(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        Self { p0, p1 }
    }

    /// Creates a segment from a start point and a directed length vector (`p1 = p0 + v`).
    pub fn from_point_and_vector(p0: Point3<f64>, v: Vector3<f64>) -> Self {
        Self { p0, p1: p0 + v }
    }

    #[inline]
    pub fn p0(&self) -> Point3<f64> {
        self.p0
    }

    #[inline]
    pub fn p1(&self) -> Point3<f64> {
        self.p1
    }

    /// Returns `p1 - p0`.
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        self.p1 - self.p0
    }

    /// Returns the unit direction from `p0` to `p1`, or zero for a degenerate segment.
    pub fn direction(&self) -> Vector3<f64> {
        self.vector().normalized_or_zero()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.vector().norm_squared()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.length())
    }

    /// Returns the point at parameter `t` (`0.0` = `p0`, `1.0` = `p1`).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.p0 + self.vector() * t
    }

    pub fn midpoint(&self) -> Point3<f64> {
        self.point_at(0.5)
    }

    /// Returns the segment with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// Returns `true` if both segments have the same endpoints, in either order.
    pub fn same_endpoints(&self, other: &LineSegment) -> bool {
        (points_approx_eq(&self.p0, &other.p0) && points_approx_eq(&self.p1, &other.p1))
            || (points_approx_eq(&self.p0, &other.p1) && points_approx_eq(&self.p1, &other.p0))
    }

    /// Distance from `point` to the infinite line through the segment.
    ///
    /// Falls back to the distance to `p0` for a degenerate segment.
    pub fn line_distance(&self, point: &Point3<f64>) -> f64 {
        let offset = point - self.p0;
        let direction = self.direction();
        (offset - direction * direction.dot(&offset)).norm()
    }
}
