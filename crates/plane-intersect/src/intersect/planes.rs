//! Intersection line of two infinite planes.

use log::debug;
use nalgebra::{Point3, Vector3};

use crate::{approx_zero, LineSegment, Plane3D, PlaneSide, VectorExt};

/// Which point of the intersection line is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAnchor {
    /// Zero the coordinate along which the line direction is largest and solve
    /// for the other two.
    #[default]
    DominantAxis,
    /// The point of the line closest to the origin.
    NearestOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// Picks the axis of the largest direction component.
///
/// Ties resolve towards z: x needs to beat both y and z strictly, and y needs
/// to beat z strictly.
fn dominant_axis(ax: f64, ay: f64, az: f64) -> Axis {
    if ax > ay {
        if ax > az { Axis::X } else { Axis::Z }
    } else if ay > az {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Cross product of the normals, or `None` when the planes are parallel.
///
/// Coincident and disjoint parallel planes both yield `None`; they are told
/// apart only in the log.
fn line_direction(plane1: &Plane3D, plane2: &Plane3D) -> Option<Vector3<f64>> {
    let u = plane1.normal().cross(&plane2.normal());
    if approx_zero(u.abs_sum()) {
        if plane1.classify_point(&plane2.anchor()) == PlaneSide::OnPlane {
            debug!("planes coincide, no single intersection line");
        } else {
            debug!("planes are parallel and disjoint");
        }
        return None;
    }
    Some(u)
}

/// Computes the line where two planes meet.
///
/// Returns the segment `{iP, iP + u}` where `u = n1 × n2` and `iP` is the point
/// of the line on the coordinate plane selected by the dominant axis of `u`.
/// The segment is not clipped to anything; it only carries a point and a
/// direction. Returns `None` for parallel planes.
pub fn intersect_planes(plane1: &Plane3D, plane2: &Plane3D) -> Option<LineSegment> {
    let u = line_direction(plane1, plane2)?;
    let n1 = plane1.normal();
    let n2 = plane2.normal();
    let d1 = -plane1.offset();
    let d2 = -plane2.offset();

    let point = match dominant_axis(u.x.abs(), u.y.abs(), u.z.abs()) {
        Axis::X => Point3::new(
            0.0,
            (d2 * n1.z - d1 * n2.z) / u.x,
            (d1 * n2.y - d2 * n1.y) / u.x,
        ),
        Axis::Y => Point3::new(
            (d1 * n2.z - d2 * n1.z) / u.y,
            0.0,
            (d2 * n1.x - d1 * n2.x) / u.y,
        ),
        Axis::Z => Point3::new(
            (d2 * n1.y - d1 * n2.y) / u.z,
            (d1 * n2.x - d2 * n1.x) / u.z,
            0.0,
        ),
    };

    debug!("point of intersection: {:?}", point);
    Some(LineSegment::from_point_and_vector(point, u))
}

/// Computes the line where two planes meet, anchored at the point closest to the origin.
///
/// Uses the three-plane formula with the third plane through the origin and
/// normal `n3 = n1 × n2`:
/// `iP = ((n3 × n2) d1 + (n1 × n3) d2) / |n3|²`.
pub fn intersect_planes_nearest_origin(plane1: &Plane3D, plane2: &Plane3D) -> Option<LineSegment> {
    let n3 = line_direction(plane1, plane2)?;
    let n1 = plane1.normal();
    let n2 = plane2.normal();
    let d1 = -plane1.offset();
    let d2 = -plane2.offset();

    let determinant = n3.norm_squared();
    let point = Point3::from((n3.cross(&n2) * d1 + n1.cross(&n3) * d2) / determinant);

    debug!("point of intersection nearest origin: {:?}", point);
    Some(LineSegment::from_point_and_vector(point, n3))
}

/// Computes the line where two planes meet, anchored as selected by `anchor`.
pub fn intersect_planes_with(
    plane1: &Plane3D,
    plane2: &Plane3D,
    anchor: LineAnchor,
) -> Option<LineSegment> {
    match anchor {
        LineAnchor::DominantAxis => intersect_planes(plane1, plane2),
        LineAnchor::NearestOrigin => intersect_planes_nearest_origin(plane1, plane2),
    }
}
