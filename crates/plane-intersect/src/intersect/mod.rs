//! Intersection routines for rectangular planes.
//!
//! The visible intersection of two rectangles is found in three steps:
//!
//! 1. [`intersect_planes`]: the infinite line where the supporting planes meet.
//! 2. [`clip_to_rectangle`]: that line clipped to each rectangle's edges, using
//!    [`intersect_segments_2d`] in the rectangle's local frame.
//! 3. [`shorter_segment`]: the shorter of the two clips.
//!
//! [`intersect_rectangles`] runs all three.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, UnitQuaternion, Vector3};
//! use plane_intersect::intersect::{intersect_planes, find_intersection_end_points};
//! use plane_intersect::{Plane3D, Rectangle};
//!
//! let a = Rectangle::new(
//!     Point3::origin(),
//!     UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.5),
//!     1.0,
//!     1.0,
//! );
//! let b = Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 0.5, 0.5);
//!
//! let line = intersect_planes(&Plane3D::from(&a), &Plane3D::from(&b)).unwrap();
//! let visible = find_intersection_end_points(&line.p0(), &line.direction(), &a, &b);
//! assert!(visible.is_some());
//! ```

mod clip;
mod planes;
mod segments;

pub use clip::{clip_to_rectangle, find_intersection_end_points, shorter_segment};
pub use planes::{
    intersect_planes, intersect_planes_nearest_origin, intersect_planes_with, LineAnchor,
};
pub use segments::{in_segment, intersect_segments_2d, LineIntersection};

use crate::{LineSegment, Plane3D, Rectangle};

/// Computes the visible intersection segment of two rectangles.
///
/// Returns `None` if the rectangles are parallel or the intersection line of
/// their planes misses them.
pub fn intersect_rectangles(rectangle1: &Rectangle, rectangle2: &Rectangle) -> Option<LineSegment> {
    intersect_rectangles_with(rectangle1, rectangle2, LineAnchor::default())
}

/// Like [`intersect_rectangles`], choosing where the infinite line is anchored
/// before clipping.
pub fn intersect_rectangles_with(
    rectangle1: &Rectangle,
    rectangle2: &Rectangle,
    anchor: LineAnchor,
) -> Option<LineSegment> {
    let line = intersect_planes_with(
        &Plane3D::from(rectangle1),
        &Plane3D::from(rectangle2),
        anchor,
    )?;
    find_intersection_end_points(&line.p0(), &line.direction(), rectangle1, rectangle2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, UnitQuaternion, Vector3};

    fn floor(size: f64) -> Rectangle {
        Rectangle::new(
            Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2),
            size,
            size,
        )
    }

    #[test]
    fn parallel_rectangles_do_not_intersect() {
        let a = Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 1.0, 1.0);
        let b = Rectangle::new(Point3::new(0.0, 0.0, 0.5), UnitQuaternion::identity(), 1.0, 1.0);
        assert!(intersect_rectangles(&a, &b).is_none());
    }

    #[test]
    fn upright_card_on_floor() {
        let card = Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 0.6, 1.0);
        let segment = intersect_rectangles(&floor(2.0), &card).unwrap();
        assert_relative_eq!(segment.length(), 0.6, epsilon = 1e-12);
        assert_relative_eq!(segment.midpoint(), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn rectangles_far_apart_do_not_intersect() {
        // The planes meet along y = 0, z = 5, which misses both rectangles.
        let card = Rectangle::new(Point3::new(5.0, 0.0, 5.0), UnitQuaternion::identity(), 1.0, 1.0);
        assert!(intersect_rectangles(&floor(2.0), &card).is_none());
    }

    #[test]
    fn card_above_the_floor_does_not_intersect() {
        // The planes meet along the x axis, which the floor covers but the card does not.
        let card = Rectangle::new(Point3::new(0.0, 5.0, 0.0), UnitQuaternion::identity(), 1.0, 1.0);
        let floor = floor(2.0);
        let line = intersect_planes(&Plane3D::from(&floor), &Plane3D::from(&card)).unwrap();

        assert!(clip_to_rectangle(&line.p0(), &line.direction(), &floor).is_some());
        assert!(intersect_rectangles(&floor, &card).is_none());
        assert!(intersect_rectangles(&card, &floor).is_none());
    }

    #[test]
    fn card_crossing_away_from_the_anchor_does_not_intersect() {
        // The card does cross the floor, along x in [2.5, 3.5], but the line is
        // anchored at the origin, outside the card, so the card yields no clip.
        let card = Rectangle::new(Point3::new(3.0, 0.3, 0.0), UnitQuaternion::identity(), 1.0, 1.0);
        let floor = floor(8.0);
        let line = intersect_planes(&Plane3D::from(&floor), &Plane3D::from(&card)).unwrap();

        assert_relative_eq!(line.p0(), Point3::origin(), epsilon = 1e-12);
        assert!(clip_to_rectangle(&line.p0(), &line.direction(), &card).is_none());
        assert!(intersect_rectangles(&floor, &card).is_none());
    }

    #[test]
    fn nearest_origin_anchor_gives_same_segment() {
        let tilted = Rectangle::new(
            Point3::new(0.1, 0.0, 0.05),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.6),
            0.8,
            0.8,
        );
        let by_axis = intersect_rectangles_with(&floor(2.0), &tilted, LineAnchor::DominantAxis).unwrap();
        let by_origin = intersect_rectangles_with(&floor(2.0), &tilted, LineAnchor::NearestOrigin).unwrap();
        assert!(by_axis.same_endpoints(&by_origin));
    }
}
