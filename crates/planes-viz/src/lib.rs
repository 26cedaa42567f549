//! Interactive viewer for the intersection of two rectangular planes.

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use nalgebra::Point3;
use plane_intersect::{LineSegment, Rectangle};

pub mod camera;
pub mod config;
pub mod controls;
pub mod scene;

pub use camera::OrbitCamera;
pub use config::SceneConfig;
pub use controls::PlaneControls;
pub use scene::{PlaneNode, Scene, SceneIntersection};

/// Opacity of the plane surfaces.
pub const SURFACE_ALPHA: f32 = 0.4;

const MARKER_RADIUS: f32 = 0.008;

/// Converts a nalgebra point into macroquad's render space.
pub fn to_vec3(p: &Point3<f64>) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Draws the surface of a rectangle as a translucent quad, visible from both sides.
pub fn draw_surface(rectangle: &Rectangle, color: Color) {
    let color = with_alpha(color, SURFACE_ALPHA);
    let vertices = [rectangle.v1(), rectangle.v4(), rectangle.v2(), rectangle.v3()]
        .iter()
        .map(|p| Vertex::new2(to_vec3(p), vec2(0.0, 0.0), color))
        .collect();

    let mesh = Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3, 0, 2, 1, 0, 3, 2],
        texture: None,
    };

    draw_mesh(&mesh);
}

/// Draws the four edges of a rectangle, each in its own color.
pub fn draw_outline(rectangle: &Rectangle) {
    let edges = [
        (rectangle.v1(), rectangle.v3(), ORANGE),
        (rectangle.v4(), rectangle.v2(), WHITE),
        (rectangle.v2(), rectangle.v3(), YELLOW),
        (rectangle.v1(), rectangle.v4(), BLUE),
    ];
    for (start, end, color) in edges {
        draw_line_3d(to_vec3(&start), to_vec3(&end), color);
    }
}

pub fn draw_marker(point: &Point3<f64>, scale: f32, color: Color) {
    draw_sphere(to_vec3(point), MARKER_RADIUS * scale, None, color);
}

pub fn draw_segment(segment: &LineSegment, color: Color) {
    draw_line_3d(to_vec3(&segment.p0()), to_vec3(&segment.p1()), color);
}

/// Draws a plane with its outline, center and corners. `v1` is marked white.
pub fn draw_plane_node(plane: &PlaneNode) {
    let rectangle = plane.rectangle();
    draw_surface(&rectangle, plane.color());
    draw_outline(&rectangle);

    draw_marker(&rectangle.center(), 1.0, DARKGRAY);
    for (index, corner) in rectangle.corners().iter().enumerate() {
        let color = if index == 0 { WHITE } else { RED };
        draw_marker(corner, 0.75, color);
    }
}

/// Draws the intersection line, each plane's clip and the visible segment.
pub fn draw_intersection(scene: &Scene, intersection: &SceneIntersection) {
    if let Some(line) = &intersection.line {
        let reach = line.direction() * 4.0;
        let extended = LineSegment::new(line.p0() - reach, line.p0() + reach);
        draw_segment(&extended, with_alpha(GRAY, 0.5));
        draw_marker(&line.p0(), 1.0, MAGENTA);
    }

    for (plane, clip) in scene.planes().iter().zip(&intersection.clips) {
        if let Some(clip) = clip {
            draw_marker(&clip.p0(), 1.5, plane.color());
            draw_marker(&clip.p1(), 1.5, plane.color());
        }
    }

    if let Some(visible) = &intersection.visible {
        draw_segment(visible, RED);
    }
}

/// Draws the whole scene in the current 3D camera.
pub fn draw_scene(scene: &Scene, intersection: &SceneIntersection) {
    draw_marker(&Point3::origin(), 1.0, WHITE);
    for plane in scene.planes() {
        draw_plane_node(plane);
    }
    draw_intersection(scene, intersection);
}

/// Short colored lines along the world axes.
pub fn draw_axes(length: f32) {
    draw_line_3d(Vec3::ZERO, vec3(length, 0.0, 0.0), RED);
    draw_line_3d(Vec3::ZERO, vec3(0.0, length, 0.0), GREEN);
    draw_line_3d(Vec3::ZERO, vec3(0.0, 0.0, length), BLUE);
}
