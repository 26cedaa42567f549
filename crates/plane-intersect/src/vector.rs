//! Tolerance-aware helpers on top of nalgebra's vector algebra.

use nalgebra::{Point3, Vector3};

use crate::GEOMETRY_EPSILON;

/// Returns `true` if `value` is within [`GEOMETRY_EPSILON`] of zero.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < GEOMETRY_EPSILON
}

/// Componentwise approximate equality of two points.
#[inline]
pub fn points_approx_eq(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).approx_zero()
}

/// Extra operations on `Vector3<f64>` used by the intersection routines.
///
/// Addition, scaling, `dot`, `cross`, `norm` and `norm_squared` come from nalgebra;
/// this trait adds the degenerate-input policy on top.
pub trait VectorExt {
    /// Returns the unit vector in the same direction.
    ///
    /// A vector shorter than [`GEOMETRY_EPSILON`] has no direction; the zero vector
    /// is returned instead of dividing by (almost) zero.
    fn normalized_or_zero(&self) -> Self;

    /// Sum of the absolute values of the components.
    fn abs_sum(&self) -> f64;

    /// Returns `true` if every component is within [`GEOMETRY_EPSILON`] of zero.
    fn approx_zero(&self) -> bool;

    /// Componentwise approximate equality.
    fn approx_eq(&self, other: &Self) -> bool;
}

impl VectorExt for Vector3<f64> {
    fn normalized_or_zero(&self) -> Self {
        let len = self.norm();
        if len < GEOMETRY_EPSILON {
            Vector3::zeros()
        } else {
            self / len
        }
    }

    #[inline]
    fn abs_sum(&self) -> f64 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    #[inline]
    fn approx_zero(&self) -> bool {
        self.amax() < GEOMETRY_EPSILON
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).approx_zero()
    }
}
