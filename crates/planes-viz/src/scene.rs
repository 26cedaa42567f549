//! The two planes on screen and their intersection.

use anyhow::{bail, Result};
use log::{debug, info};
use macroquad::color::Color;
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use plane_intersect::{
    clip_to_rectangle, intersect_planes_with, shorter_segment, LineAnchor, LineSegment, Rectangle,
};

use crate::config::{PlaneConfig, SceneConfig};

/// A rectangle with a name, a color and a pose that can be changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneNode {
    name: String,
    center: Point3<f64>,
    orientation: UnitQuaternion<f64>,
    width: f64,
    height: f64,
    color: Color,
}

impl PlaneNode {
    pub fn from_config(config: &PlaneConfig) -> Self {
        let [r, g, b] = config.color;
        Self {
            name: config.name.clone(),
            center: config.center(),
            orientation: config.orientation(),
            width: config.size[0],
            height: config.size[1],
            color: Color::from_rgba(r, g, b, 255),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.orientation
    }

    /// The plane's current corners and frame.
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.center, self.orientation, self.width, self.height)
    }

    /// Rotates the plane about one of its own axes.
    pub fn rotate_local(&mut self, axis: &Unit<Vector3<f64>>, angle: f64) {
        self.orientation *= UnitQuaternion::from_axis_angle(axis, angle);
    }
}

/// Everything computed for one arrangement of the planes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneIntersection {
    /// Infinite intersection line as a point and a direction; `None` if parallel.
    pub line: Option<LineSegment>,
    /// The line clipped to each plane.
    pub clips: [Option<LineSegment>; 2],
    /// The shorter of the two clips.
    pub visible: Option<LineSegment>,
}

pub struct Scene {
    planes: [PlaneNode; 2],
    initial: [PlaneNode; 2],
    anchor: LineAnchor,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let [first, second] = config.planes.as_slice() else {
            bail!("a scene needs exactly 2 planes, found {}", config.planes.len());
        };
        let planes = [PlaneNode::from_config(first), PlaneNode::from_config(second)];
        info!(
            "scene with planes '{}' and '{}', anchor {:?}",
            first.name, second.name, config.anchor
        );

        Ok(Self {
            initial: planes.clone(),
            planes,
            anchor: config.anchor.into(),
        })
    }

    pub fn planes(&self) -> &[PlaneNode; 2] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Option<&PlaneNode> {
        self.planes.get(index)
    }

    pub fn anchor(&self) -> LineAnchor {
        self.anchor
    }

    /// Midpoint of the two plane centers, where the camera looks.
    pub fn focus(&self) -> Point3<f64> {
        nalgebra::center(&self.planes[0].center, &self.planes[1].center)
    }

    /// Rotates plane `index` about its local `axis`. Returns false for an unknown index.
    pub fn rotate_plane(&mut self, index: usize, axis: &Unit<Vector3<f64>>, angle: f64) -> bool {
        match self.planes.get_mut(index) {
            Some(plane) => {
                plane.rotate_local(axis, angle);
                true
            }
            None => false,
        }
    }

    /// Puts both planes back where the scene file placed them.
    pub fn reset(&mut self) {
        self.planes = self.initial.clone();
    }

    pub fn intersect(&self) -> SceneIntersection {
        let rectangles = [self.planes[0].rectangle(), self.planes[1].rectangle()];
        let line = intersect_planes_with(
            &rectangles[0].supporting_plane(),
            &rectangles[1].supporting_plane(),
            self.anchor,
        );

        let Some(line) = line else {
            debug!("'{}' and '{}' are parallel", self.planes[0].name, self.planes[1].name);
            return SceneIntersection::default();
        };

        let clips = rectangles.map(|r| clip_to_rectangle(&line.p0(), &line.direction(), &r));
        let visible = shorter_segment(clips[0], clips[1]);
        match &visible {
            Some(segment) => debug!(
                "visible intersection {:?} -> {:?}, length {:.4}",
                segment.p0(),
                segment.p1(),
                segment.length()
            ),
            None => debug!("intersection line leaves at least one plane"),
        }

        SceneIntersection {
            line: Some(line),
            clips,
            visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plane_intersect::intersect_rectangles_with;

    fn reference() -> Scene {
        Scene::from_config(&SceneConfig::default()).unwrap()
    }

    #[test]
    fn matches_the_library_pipeline() {
        let scene = reference();
        let result = scene.intersect();
        let expected = intersect_rectangles_with(
            &scene.planes()[0].rectangle(),
            &scene.planes()[1].rectangle(),
            scene.anchor(),
        );

        assert!(result.line.is_some());
        assert_eq!(result.visible, expected);
        assert_eq!(result.visible, result.clips[1]);
    }

    #[test]
    fn unrotated_planes_have_no_intersection() {
        let mut config = SceneConfig::default();
        for plane in &mut config.planes {
            plane.rotation = None;
        }
        let result = Scene::from_config(&config).unwrap().intersect();
        assert_eq!(result, SceneIntersection::default());
    }

    #[test]
    fn crossing_scene_is_bounded_by_the_card() {
        let config = SceneConfig::parse(include_str!("../scenes/crossing.toml")).unwrap();
        let result = Scene::from_config(&config).unwrap().intersect();

        let visible = result.visible.unwrap();
        assert_relative_eq!(visible.length(), 0.8, epsilon = 1e-9);
        assert_relative_eq!(result.clips[0].unwrap().length(), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn rotation_changes_the_result_and_reset_restores_it() {
        let mut scene = reference();
        let before = scene.intersect();

        assert!(scene.rotate_plane(1, &Vector3::y_axis(), 0.3));
        assert_ne!(scene.intersect(), before);

        scene.reset();
        assert_eq!(scene.intersect(), before);
    }

    #[test]
    fn rotate_plane_ignores_unknown_index() {
        let mut scene = reference();
        assert!(!scene.rotate_plane(2, &Vector3::x_axis(), 0.1));
        assert_eq!(scene.planes(), &scene.initial);
    }

    #[test]
    fn local_rotation_uses_plane_axes() {
        let mut scene = reference();
        // Green is turned about y, so spinning it about its own normal keeps the normal.
        let normal = scene.planes()[0].rectangle().normal();
        scene.rotate_plane(0, &Vector3::z_axis(), 0.7);
        assert_relative_eq!(scene.planes()[0].rectangle().normal(), normal, epsilon = 1e-12);
    }

    #[test]
    fn focus_is_between_the_planes() {
        let scene = reference();
        assert_relative_eq!(scene.focus(), Point3::new(0.0625, 0.125, 0.05), epsilon = 1e-12);
    }

    #[test]
    fn clip_on_one_plane_only_is_not_visible() {
        let mut config = SceneConfig::default();
        config.planes[1].position = [0.0, 5.0, 0.0];
        config.planes[1].rotation = None;
        let result = Scene::from_config(&config).unwrap().intersect();

        assert!(result.line.is_some());
        assert!(result.clips[0].is_some());
        assert!(result.clips[1].is_none());
        assert!(result.visible.is_none());
    }

    #[test]
    fn rejects_wrong_plane_count() {
        let mut config = SceneConfig::default();
        config.planes.pop();
        assert!(Scene::from_config(&config).is_err());
    }
}
