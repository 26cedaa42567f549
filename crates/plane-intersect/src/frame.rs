//! Plane-aligned local coordinate frames.

use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

use crate::VectorExt;

/// A right-handed orthonormal frame attached to a plane.
///
/// The local x and y axes span the plane and the local z axis is its normal,
/// so points on the plane have a local z coordinate of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    isometry: Isometry3<f64>,
}

impl LocalFrame {
    /// Creates a frame centered at `origin` with the given orientation.
    ///
    /// The orientation maps local axes to world axes; the plane normal is
    /// `orientation * z`.
    pub fn new(origin: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            isometry: Isometry3::from_parts(Translation3::from(origin.coords), orientation),
        }
    }

    /// Creates a frame from two in-plane axes.
    ///
    /// `y_axis` is orthogonalized against `x_axis` and the normal is `x × y`.
    /// Returns `None` if either axis has zero length or the axes are parallel.
    pub fn from_axes(
        origin: Point3<f64>,
        x_axis: Vector3<f64>,
        y_axis: Vector3<f64>,
    ) -> Option<Self> {
        let x = x_axis.normalized_or_zero();
        let y = (y_axis - x * x.dot(&y_axis)).normalized_or_zero();
        if x.approx_zero() || y.approx_zero() {
            return None;
        }
        let z = x.cross(&y);
        let orientation = UnitQuaternion::from_basis_unchecked(&[x, y, z]);
        Some(Self::new(origin, orientation))
    }

    /// Returns the world-space origin of the frame.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.isometry.translation.vector)
    }

    /// Returns the rotation from local to world axes.
    #[inline]
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.isometry.rotation
    }

    /// Returns the world-space direction of the local x axis.
    pub fn x_axis(&self) -> Unit<Vector3<f64>> {
        self.isometry.rotation * Vector3::x_axis()
    }

    /// Returns the world-space direction of the local y axis.
    pub fn y_axis(&self) -> Unit<Vector3<f64>> {
        self.isometry.rotation * Vector3::y_axis()
    }

    /// Returns the unit normal (the local z axis in world space).
    pub fn normal(&self) -> Unit<Vector3<f64>> {
        self.isometry.rotation * Vector3::z_axis()
    }

    /// Expresses a world-space point in local coordinates.
    #[inline]
    pub fn to_local(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry.inverse_transform_point(point)
    }

    /// Expresses a local point in world coordinates.
    #[inline]
    pub fn to_world(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry.transform_point(point)
    }
}
