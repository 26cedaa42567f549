//! Clipping an infinite intersection line against rectangle boundaries.

use log::{debug, trace};
use nalgebra::{Point3, Vector3};

use crate::{approx_zero, LineSegment, Rectangle};

use super::segments::intersect_segments_2d;

/// Clips the line through `point` along unit `direction` to the edges of `rectangle`.
///
/// Two rays of the rectangle's diagonal length leave `point` in opposite
/// directions. Each ray is moved into the rectangle's local frame and
/// tested against the edges `v1–v3`, `v1–v4`, `v2–v3`, `v2–v4`; the first
/// single-point hit is its endpoint. The line must lie in the rectangle's
/// plane.
///
/// Returns `None` unless both rays reach the boundary, which requires
/// `point` to lie on the rectangle.
pub fn clip_to_rectangle(
    point: &Point3<f64>,
    direction: &Vector3<f64>,
    rectangle: &Rectangle,
) -> Option<LineSegment> {
    let reach = direction * rectangle.diagonal_length();
    let forward = LineSegment::new(*point, point + reach);
    let backward = LineSegment::new(*point, point - reach);

    let p0 = edge_crossing(&forward, rectangle)?;
    let p1 = edge_crossing(&backward, rectangle)?;
    Some(LineSegment::new(p0, p1))
}

/// First point where `ray` crosses an edge of `rectangle`, in world space.
fn edge_crossing(ray: &LineSegment, rectangle: &Rectangle) -> Option<Point3<f64>> {
    let frame = rectangle.frame();
    let local = LineSegment::new(frame.to_local(&ray.p0()), frame.to_local(&ray.p1()));

    if !approx_zero(local.p0().z) || !approx_zero(local.p1().z) {
        trace!("ray {:?} leaves the rectangle's plane", ray);
        return None;
    }

    let hit = rectangle
        .local_edges()
        .iter()
        .find_map(|edge| intersect_segments_2d(&local, edge).point());

    if hit.is_none() {
        trace!("ray {:?} does not reach the rectangle boundary", ray);
    }
    hit.map(|p| frame.to_world(&p))
}

/// Returns the shorter of two clips.
///
/// The first segment wins only if it is strictly shorter. If either clip is
/// missing the line leaves one of the rectangles, so there is no common
/// segment and the result is `None`.
pub fn shorter_segment(
    segment1: Option<LineSegment>,
    segment2: Option<LineSegment>,
) -> Option<LineSegment> {
    let (a, b) = (segment1?, segment2?);
    if a.length_squared() < b.length_squared() {
        Some(a)
    } else {
        Some(b)
    }
}

/// Finds the visible part of the intersection line of two rectangles.
///
/// The line (`point`, unit `direction`) must lie in both rectangles' planes.
/// It is clipped against each rectangle separately and the shorter clip is
/// returned. Returns `None` if either clip fails.
pub fn find_intersection_end_points(
    point: &Point3<f64>,
    direction: &Vector3<f64>,
    rectangle1: &Rectangle,
    rectangle2: &Rectangle,
) -> Option<LineSegment> {
    let segment1 = clip_to_rectangle(point, direction, rectangle1);
    let segment2 = clip_to_rectangle(point, direction, rectangle2);

    if let Some(segment) = &segment1 {
        debug!("plane 1 intersection: {:?} -> {:?}", segment.p0(), segment.p1());
    }
    if let Some(segment) = &segment2 {
        debug!("plane 2 intersection: {:?} -> {:?}", segment.p0(), segment.p1());
    }

    shorter_segment(segment1, segment2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane3D, VectorExt};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::UnitQuaternion;

    fn square(center: [f64; 3], size: f64) -> Rectangle {
        Rectangle::new(Point3::from(center), UnitQuaternion::identity(), size, size)
    }

    #[test]
    fn clips_horizontal_line_to_square() {
        let rect = square([0.0, 0.0, 0.0], 2.0);
        let clip = clip_to_rectangle(&Point3::new(0.25, 0.5, 0.0), &Vector3::x(), &rect).unwrap();

        assert!(clip.same_endpoints(&LineSegment::new(
            Point3::new(1.0, 0.5, 0.0),
            Point3::new(-1.0, 0.5, 0.0),
        )));
    }

    #[test]
    fn forward_ray_gives_first_endpoint() {
        let rect = square([0.0, 0.0, 0.0], 2.0);
        let clip = clip_to_rectangle(&Point3::origin(), &Vector3::y(), &rect).unwrap();

        assert_relative_eq!(clip.p0(), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(clip.p1(), Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn diagonal_line_ends_on_boundary() {
        let orientation = UnitQuaternion::from_euler_angles(0.4, -0.3, 0.8);
        let rect = Rectangle::new(Point3::new(1.0, 2.0, -1.0), orientation, 0.8, 0.3);
        let direction = (rect.frame().x_axis().into_inner() * 2.0 + rect.frame().y_axis().into_inner())
            .normalized_or_zero();
        let clip = clip_to_rectangle(&rect.center(), &direction, &rect).unwrap();

        for end in [clip.p0(), clip.p1()] {
            assert!(rect.contains_point(&end));
            let local = rect.frame().to_local(&end);
            assert_abs_diff_eq!(local.y.abs(), 0.15, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(clip.line_distance(&rect.center()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn line_outside_rectangle_is_not_clipped() {
        let rect = square([0.0, 0.0, 0.0], 1.0);
        assert!(clip_to_rectangle(&Point3::new(0.0, 2.0, 0.0), &Vector3::x(), &rect).is_none());
    }

    #[test]
    fn anchor_outside_rectangle_is_not_clipped() {
        // The line crosses the square, but only on one side of the anchor.
        let rect = square([0.0, 0.0, 0.0], 1.0);
        assert!(clip_to_rectangle(&Point3::new(-0.8, 0.0, 0.0), &Vector3::x(), &rect).is_none());
    }

    #[test]
    fn line_off_the_plane_is_not_clipped() {
        let rect = square([0.0, 0.0, 0.0], 1.0);
        let direction = Vector3::new(1.0, 0.0, 1.0).normalized_or_zero();
        assert!(clip_to_rectangle(&Point3::origin(), &direction, &rect).is_none());
    }

    #[test]
    fn shorter_segment_prefers_shorter() {
        let short = LineSegment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        let long = LineSegment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0));

        assert_eq!(shorter_segment(Some(short), Some(long)), Some(short));
        assert_eq!(shorter_segment(Some(long), Some(short)), Some(short));
    }

    #[test]
    fn shorter_segment_needs_both_clips() {
        let long = LineSegment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(shorter_segment(None, Some(long)), None);
        assert_eq!(shorter_segment(Some(long), None), None);
        assert_eq!(shorter_segment(None, None), None);
    }

    #[test]
    fn shorter_segment_tie_keeps_second() {
        let a = LineSegment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        let b = LineSegment::new(Point3::origin(), Point3::new(0.0, 1.0, 0.0));
        assert_eq!(shorter_segment(Some(a), Some(b)), Some(b));
    }

    #[test]
    fn end_points_bounded_by_smaller_rectangle() {
        // A wide floor and a narrow upright card crossing it along x.
        let floor = Rectangle::new(
            Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2),
            4.0,
            4.0,
        );
        let card = square([0.0, 0.0, 0.0], 1.0);
        assert!(Plane3D::from(&floor).contains_point(&Point3::new(1.0, 0.0, -1.0)));

        let segment =
            find_intersection_end_points(&Point3::origin(), &Vector3::x(), &floor, &card).unwrap();
        assert!(segment.same_endpoints(&LineSegment::new(
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(-0.5, 0.0, 0.0),
        )));
    }

    #[test]
    fn end_points_need_both_clips() {
        let floor = Rectangle::new(
            Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2),
            4.0,
            4.0,
        );
        // The card sits to the side; the anchor is outside it.
        let card = square([3.0, 0.0, 0.0], 1.0);

        assert!(clip_to_rectangle(&Point3::origin(), &Vector3::x(), &floor).is_some());
        assert!(find_intersection_end_points(&Point3::origin(), &Vector3::x(), &floor, &card).is_none());
    }
}
