//! Finite rectangular planes.

use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

use crate::{LineSegment, LocalFrame, Plane3D};

/// A finite rectangular plane in 3D space.
///
/// The rectangle lies in the x/y plane of its [`LocalFrame`], centered on the
/// frame origin. Its corners follow a fixed winding, named after the local
/// bounding box `min`/`max`:
///
/// - `v1`: `(min.x, min.y)`
/// - `v2`: `(max.x, max.y)`
/// - `v3`: `(min.x, max.y)`
/// - `v4`: `(max.x, min.y)`
///
/// so `v1`/`v2` and `v3`/`v4` are opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    frame: LocalFrame,
    corners: [Point3<f64>; 4],
    local_corners: [Point3<f64>; 4],
}

impl Rectangle {
    /// Creates a `width` × `height` rectangle centered at `center`.
    ///
    /// Before rotation the rectangle spans the x/y plane with its normal along +z;
    /// `orientation` rotates it into place.
    pub fn new(
        center: Point3<f64>,
        orientation: UnitQuaternion<f64>,
        width: f64,
        height: f64,
    ) -> Self {
        let frame = LocalFrame::new(center, orientation);
        let (hw, hh) = (width / 2.0, height / 2.0);
        let local_corners = [
            Point3::new(-hw, -hh, 0.0),
            Point3::new(hw, hh, 0.0),
            Point3::new(-hw, hh, 0.0),
            Point3::new(hw, -hh, 0.0),
        ];
        Self::with_local_corners(frame, local_corners)
    }

    /// Creates a rectangle from world-space corners in `v1, v2, v3, v4` order.
    ///
    /// The center is the midpoint of the `v1`–`v2` diagonal, the local x axis
    /// runs from `v1` to `v4` and the local y axis from `v1` to `v3`.
    ///
    /// Returns `None` if the corners do not span a plane.
    ///
    /// # Panics (debug builds only)
    /// Panics if `v2` does not lie on the plane of the other three corners.
    pub fn from_corners(
        v1: Point3<f64>,
        v2: Point3<f64>,
        v3: Point3<f64>,
        v4: Point3<f64>,
    ) -> Option<Self> {
        let center = nalgebra::center(&v1, &v2);
        let frame = LocalFrame::from_axes(center, v4 - v1, v3 - v1)?;
        debug_assert!(
            Plane3D::from_point_and_normal(v1, frame.normal().into_inner()).contains_point(&v2),
            "Rectangle corners must be coplanar"
        );
        let local_corners = [v1, v2, v3, v4].map(|corner| {
            let local = frame.to_local(&corner);
            Point3::new(local.x, local.y, 0.0)
        });
        Some(Self {
            frame,
            corners: [v1, v2, v3, v4],
            local_corners,
        })
    }

    fn with_local_corners(frame: LocalFrame, local_corners: [Point3<f64>; 4]) -> Self {
        Self {
            corners: local_corners.map(|corner| frame.to_world(&corner)),
            frame,
            local_corners,
        }
    }

    /// Returns the center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point3<f64> {
        self.frame.origin()
    }

    /// Returns the unit normal of the rectangle.
    #[inline]
    pub fn normal(&self) -> Unit<Vector3<f64>> {
        self.frame.normal()
    }

    /// Returns the local frame the rectangle is defined in.
    #[inline]
    pub fn frame(&self) -> &LocalFrame {
        &self.frame
    }

    /// Returns the world-space corners in `v1, v2, v3, v4` order.
    #[inline]
    pub fn corners(&self) -> [Point3<f64>; 4] {
        self.corners
    }

    /// Returns the corners in local coordinates (all with `z = 0`).
    #[inline]
    pub fn local_corners(&self) -> [Point3<f64>; 4] {
        self.local_corners
    }

    #[inline]
    pub fn v1(&self) -> Point3<f64> {
        self.corners[0]
    }

    #[inline]
    pub fn v2(&self) -> Point3<f64> {
        self.corners[1]
    }

    #[inline]
    pub fn v3(&self) -> Point3<f64> {
        self.corners[2]
    }

    #[inline]
    pub fn v4(&self) -> Point3<f64> {
        self.corners[3]
    }

    /// Length of the `v1`–`v4` side.
    pub fn width(&self) -> f64 {
        (self.v4() - self.v1()).norm()
    }

    /// Length of the `v1`–`v3` side.
    pub fn height(&self) -> f64 {
        (self.v3() - self.v1()).norm()
    }

    /// Length of the `v1`–`v2` diagonal.
    pub fn diagonal_length(&self) -> f64 {
        (self.v2() - self.v1()).norm()
    }

    pub fn area(&self) -> f64 {
        (self.v4() - self.v1()).cross(&(self.v3() - self.v1())).norm()
    }

    /// Returns the four edges in local coordinates.
    ///
    /// The order is fixed: `v1–v3`, `v1–v4`, `v2–v3`, `v2–v4`.
    pub fn local_edges(&self) -> [LineSegment; 4] {
        edges(&self.local_corners)
    }

    /// Returns the four edges in world coordinates, in the same order as
    /// [`local_edges`](Self::local_edges).
    pub fn edges(&self) -> [LineSegment; 4] {
        edges(&self.corners)
    }

    /// Returns the plane that this rectangle lies on.
    pub fn supporting_plane(&self) -> Plane3D {
        Plane3D::from_point_and_normal(self.v1(), self.normal().into_inner())
    }

    /// Returns `true` if `point` lies on the rectangle (boundary included).
    pub fn contains_point(&self, point: &Point3<f64>) -> bool {
        if !self.supporting_plane().contains_point(point) {
            return false;
        }
        let local = self.frame.to_local(point);
        let (min, max) = self.local_bounds();
        let tolerance = crate::GEOMETRY_EPSILON;
        local.x >= min.x - tolerance
            && local.x <= max.x + tolerance
            && local.y >= min.y - tolerance
            && local.y <= max.y + tolerance
    }

    fn local_bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let [first, rest @ ..] = self.local_corners;
        rest.iter()
            .fold((first, first), |(min, max), corner| (min.inf(corner), max.sup(corner)))
    }
}

fn edges(corners: &[Point3<f64>; 4]) -> [LineSegment; 4] {
    let [v1, v2, v3, v4] = *corners;
    [
        LineSegment::new(v1, v3),
        LineSegment::new(v1, v4),
        LineSegment::new(v2, v3),
        LineSegment::new(v2, v4),
    ]
}

impl From<Rectangle> for Plane3D {
    fn from(rectangle: Rectangle) -> Self {
        rectangle.supporting_plane()
    }
}

impl From<&Rectangle> for Plane3D {
    fn from(rectangle: &Rectangle) -> Self {
        rectangle.supporting_plane()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn unit_square() -> Rectangle {
        Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 1.0, 1.0)
    }

    #[test]
    fn corner_winding() {
        let rect = Rectangle::new(Point3::new(1.0, 2.0, 3.0), UnitQuaternion::identity(), 0.4, 0.2);
        assert_relative_eq!(rect.v1(), Point3::new(0.8, 1.9, 3.0), epsilon = 1e-12);
        assert_relative_eq!(rect.v2(), Point3::new(1.2, 2.1, 3.0), epsilon = 1e-12);
        assert_relative_eq!(rect.v3(), Point3::new(0.8, 2.1, 3.0), epsilon = 1e-12);
        assert_relative_eq!(rect.v4(), Point3::new(1.2, 1.9, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn dimensions() {
        let rect = Rectangle::new(Point3::origin(), UnitQuaternion::identity(), 3.0, 4.0);
        assert_relative_eq!(rect.width(), 3.0);
        assert_relative_eq!(rect.height(), 4.0);
        assert_relative_eq!(rect.diagonal_length(), 5.0);
        assert_relative_eq!(rect.area(), 12.0);
    }

    #[test]
    fn normal_is_orthogonal_to_sides() {
        let orientation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_4);
        let rect = Rectangle::new(Point3::new(0.0, 0.2, 0.0), orientation, 1.0, 1.0);
        let normal = rect.normal().into_inner();
        assert_relative_eq!(normal.dot(&(rect.v3() - rect.v1())), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normal.dot(&(rect.v4() - rect.v1())), 0.0, epsilon = 1e-12);
        let s = FRAC_PI_4.sin();
        assert_relative_eq!(normal, Vector3::new(-s, 0.0, s), epsilon = 1e-12);
    }

    #[test]
    fn corners_lie_on_supporting_plane() {
        let orientation = UnitQuaternion::from_euler_angles(0.3, -0.7, 1.1);
        let rect = Rectangle::new(Point3::new(-2.0, 0.5, 4.0), orientation, 2.0, 0.5);
        let plane = rect.supporting_plane();
        for corner in rect.corners() {
            assert!(plane.contains_point(&corner));
        }
        assert!(plane.contains_point(&rect.center()));
    }

    #[test]
    fn edges_follow_fixed_order() {
        let rect = unit_square();
        let [e13, e14, e23, e24] = rect.edges();
        assert_eq!((e13.p0(), e13.p1()), (rect.v1(), rect.v3()));
        assert_eq!((e14.p0(), e14.p1()), (rect.v1(), rect.v4()));
        assert_eq!((e23.p0(), e23.p1()), (rect.v2(), rect.v3()));
        assert_eq!((e24.p0(), e24.p1()), (rect.v2(), rect.v4()));
    }

    #[test]
    fn local_corners_are_flat() {
        let orientation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.4);
        let rect = Rectangle::new(Point3::new(0.1, 0.2, 0.3), orientation, 0.6, 0.8);
        for (local, world) in rect.local_corners().iter().zip(rect.corners()) {
            assert_eq!(local.z, 0.0);
            assert_relative_eq!(rect.frame().to_world(local), world, epsilon = 1e-12);
        }
    }

    #[test]
    fn from_corners_reproduces_new() {
        let orientation = UnitQuaternion::from_euler_angles(0.2, 0.9, -0.4);
        let rect = Rectangle::new(Point3::new(1.0, -1.0, 0.5), orientation, 1.5, 0.5);
        let rebuilt = Rectangle::from_corners(rect.v1(), rect.v2(), rect.v3(), rect.v4()).unwrap();

        assert_relative_eq!(rebuilt.center(), rect.center(), epsilon = 1e-12);
        assert_relative_eq!(rebuilt.normal().into_inner(), rect.normal().into_inner(), epsilon = 1e-12);
        for (a, b) in rebuilt.local_corners().iter().zip(rect.local_corners()) {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn from_corners_rejects_collapsed_rectangle() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Rectangle::from_corners(p, p, p, p).is_none());
    }

    #[test]
    fn contains_point_checks_plane_and_bounds() {
        let rect = unit_square();
        assert!(rect.contains_point(&Point3::new(0.25, -0.5, 0.0)));
        assert!(!rect.contains_point(&Point3::new(0.75, 0.0, 0.0)));
        assert!(!rect.contains_point(&Point3::new(0.0, 0.0, 0.1)));
    }

    #[test]
    fn converts_into_supporting_plane() {
        let rect = Rectangle::new(Point3::new(0.0, 0.0, 2.0), UnitQuaternion::identity(), 1.0, 1.0);
        let plane: Plane3D = (&rect).into();
        assert_relative_eq!(plane.normal(), Vector3::z());
        assert_relative_eq!(plane.offset(), 2.0);
    }
}
