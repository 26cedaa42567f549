//! Intersection of two finite rectangular planes in 3D space.
//!
//! Given two [`Rectangle`]s in a shared coordinate space, the crate computes
//! the infinite line where their supporting planes meet and clips it against
//! the rectangles' edges, producing the visible intersection segment.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, UnitQuaternion, Vector3};
//! use plane_intersect::{intersect_rectangles, Rectangle};
//!
//! let floor = Rectangle::new(
//!     Point3::origin(),
//!     UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2),
//!     2.0,
//!     2.0,
//! );
//! let wall = Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 1.0, 1.0);
//!
//! let segment = intersect_rectangles(&floor, &wall).expect("the planes cross");
//! assert!((segment.length() - 1.0).abs() < 1e-9);
//! ```

pub mod intersect;

mod frame;
mod plane;
mod rectangle;
mod segment;
mod vector;

pub use frame::LocalFrame;
pub use intersect::{
    clip_to_rectangle, find_intersection_end_points, in_segment, intersect_planes,
    intersect_planes_nearest_origin, intersect_planes_with, intersect_rectangles,
    intersect_rectangles_with, intersect_segments_2d, shorter_segment, LineAnchor,
    LineIntersection,
};
pub use plane::{Plane3D, PlaneSide};
pub use rectangle::Rectangle;
pub use segment::LineSegment;
pub use vector::{approx_zero, points_approx_eq, VectorExt};

/// Tolerance for every "effectively zero" decision in the crate.
///
/// Lengths, perp products and parallelism tests below this value are treated as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-8;
