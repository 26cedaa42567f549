//! Intersection of two coplanar finite segments.
//!
//! Only the x and y coordinates are read: callers move both segments into a
//! plane's local frame first, where the plane is `z = 0`.

use nalgebra::{Point3, Vector3};

use crate::{approx_zero, LineSegment, GEOMETRY_EPSILON};

/// How two coplanar segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// No shared point.
    Disjoint,
    /// Exactly one shared point.
    Intersect(Point3<f64>),
    /// The segments are collinear and share the sub-segment `[p0, p1]`.
    Overlap(Point3<f64>, Point3<f64>),
}

impl LineIntersection {
    /// The shared point, if the segments meet in exactly one point.
    pub fn point(&self) -> Option<Point3<f64>> {
        match self {
            LineIntersection::Intersect(point) => Some(*point),
            LineIntersection::Disjoint | LineIntersection::Overlap(..) => None,
        }
    }

    /// The shared sub-segment, if the segments overlap.
    pub fn segment(&self) -> Option<LineSegment> {
        match self {
            LineIntersection::Overlap(p0, p1) => Some(LineSegment::new(*p0, *p1)),
            LineIntersection::Disjoint | LineIntersection::Intersect(_) => None,
        }
    }

    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, LineIntersection::Disjoint)
    }
}

/// 2D perp product: `u.x * v.y - u.y * v.x`.
#[inline]
fn perp(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
fn dot_2d(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.x * v.x + u.y * v.y
}

#[inline]
fn same_point_2d(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    approx_zero(a.x - b.x) && approx_zero(a.y - b.y)
}

/// Returns `true` if `point` lies within the extent of `segment`.
///
/// `point` must be collinear with the segment. Containment is tested on the x
/// axis unless the segment is vertical, in which case y is used. The segment's
/// endpoints may come in either order.
pub fn in_segment(point: &Point3<f64>, segment: &LineSegment) -> bool {
    let (p0, p1) = (segment.p0(), segment.p1());
    let between = |a: f64, b: f64, value: f64| (a <= value && value <= b) || (a >= value && value >= b);

    if !approx_zero(p0.x - p1.x) {
        between(p0.x, p1.x, point.x)
    } else {
        between(p0.y, p1.y, point.y)
    }
}

/// Intersects two finite segments lying in the same plane.
///
/// Parallel segments (including zero-length ones) are checked for
/// collinearity and then resolved in this order: both points, `s1` a point,
/// `s2` a point, collinear overlap. Overlap endpoints are reported along `s2`.
pub fn intersect_segments_2d(s1: &LineSegment, s2: &LineSegment) -> LineIntersection {
    let u = s1.vector();
    let v = s2.vector();
    let w = s1.p0() - s2.p0();
    let d = perp(&u, &v);

    if d.abs() < GEOMETRY_EPSILON {
        if !approx_zero(perp(&u, &w)) || !approx_zero(perp(&v, &w)) {
            return LineIntersection::Disjoint;
        }

        // The tolerance applies to lengths, not squared lengths.
        let s1_is_point = approx_zero(dot_2d(&u, &u).sqrt());
        let s2_is_point = approx_zero(dot_2d(&v, &v).sqrt());

        if s1_is_point && s2_is_point {
            return if same_point_2d(&s1.p0(), &s2.p0()) {
                LineIntersection::Intersect(s1.p0())
            } else {
                LineIntersection::Disjoint
            };
        }
        if s1_is_point {
            return if in_segment(&s1.p0(), s2) {
                LineIntersection::Intersect(s1.p0())
            } else {
                LineIntersection::Disjoint
            };
        }
        if s2_is_point {
            return if in_segment(&s2.p0(), s1) {
                LineIntersection::Intersect(s2.p0())
            } else {
                LineIntersection::Disjoint
            };
        }

        return collinear_overlap(s1, s2, &v, &w);
    }

    let s_i = perp(&v, &w) / d;
    if !(0.0..=1.0).contains(&s_i) {
        return LineIntersection::Disjoint;
    }

    let t_i = perp(&u, &w) / d;
    if !(0.0..=1.0).contains(&t_i) {
        return LineIntersection::Disjoint;
    }

    LineIntersection::Intersect(s1.p0() + u * s_i)
}

/// Overlap of two non-degenerate collinear segments.
///
/// `t0` and `t1` locate the endpoints of `s1` in the parametrization of `s2`.
fn collinear_overlap(
    s1: &LineSegment,
    s2: &LineSegment,
    v: &Vector3<f64>,
    w: &Vector3<f64>,
) -> LineIntersection {
    let w2 = s1.p1() - s2.p0();
    let (t0, t1) = if !approx_zero(v.x) {
        (w.x / v.x, w2.x / v.x)
    } else {
        (w.y / v.y, w2.y / v.y)
    };
    let (t0, t1) = if t0 > t1 { (t1, t0) } else { (t0, t1) };

    let t0 = t0.max(0.0);
    let t1 = t1.min(1.0);
    if t0 > t1 {
        return LineIntersection::Disjoint;
    }
    if approx_zero(t1 - t0) {
        return LineIntersection::Intersect(s2.point_at(t0));
    }

    LineIntersection::Overlap(s2.point_at(t0), s2.point_at(t1))
}
