//! Infinite supporting planes.

use nalgebra::{Point3, Vector3};

use crate::{approx_zero, GEOMETRY_EPSILON};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies on the plane (within epsilon tolerance)
    OnPlane,
}

/// A plane in 3D space, represented as `normal · point = offset`.
///
/// In the `normal · p + d = 0` form used by the plane-pair intersection,
/// `d` is `-offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3D {
    normal: Vector3<f64>,
    offset: f64,
}

impl Plane3D {
    /// Creates a plane from a point on the plane and a normal vector.
    /// The normal will be normalized automatically.
    ///
    /// # Panics
    /// Panics if the normal vector has zero length.
    pub fn from_point_and_normal(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        let norm = normal.norm();
        assert!(norm > GEOMETRY_EPSILON, "Plane normal cannot be zero");
        let unit_normal = normal / norm;
        Self {
            normal: unit_normal,
            offset: unit_normal.dot(&point.coords),
        }
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along the normal.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The point of the plane closest to the origin.
    #[inline]
    pub fn anchor(&self) -> Point3<f64> {
        Point3::from(self.normal * self.offset)
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    /// - Zero: point is on the plane
    #[inline]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies which side of the plane a point lies on.
    pub fn classify_point(&self, point: &Point3<f64>) -> PlaneSide {
        let dist = self.signed_distance(point);
        if approx_zero(dist) {
            PlaneSide::OnPlane
        } else if dist > 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        }
    }

    /// Returns `true` if the point lies on the plane within [`GEOMETRY_EPSILON`].
    #[inline]
    pub fn contains_point(&self, point: &Point3<f64>) -> bool {
        self.classify_point(point) == PlaneSide::OnPlane
    }
}
