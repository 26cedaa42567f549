//! Keyboard control of the planes.

use macroquad::prelude::*;
use nalgebra::{Unit, Vector3};

use crate::scene::{Scene, SceneIntersection};

/// Radians turned per frame while a rotation key is held.
const DEFAULT_STEP: f64 = 0.01;

/// Local axis a rotation key turns about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            RotationAxis::X => Vector3::x_axis(),
            RotationAxis::Y => Vector3::y_axis(),
            RotationAxis::Z => Vector3::z_axis(),
        }
    }
}

/// Selects one of the two planes and turns it from the keyboard.
pub struct PlaneControls {
    selected: usize,
    step: f64,
}

impl Default for PlaneControls {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneControls {
    pub fn new() -> Self {
        Self {
            selected: 0,
            step: DEFAULT_STEP,
        }
    }

    /// Sets the rotation speed in radians per frame.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Index of the plane the keys act on.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selects plane `index`. Returns true if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index > 1 || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % 2;
    }

    /// Applies one rotation step to the selected plane.
    pub fn rotate(&self, scene: &mut Scene, axis: RotationAxis, sign: f64) -> bool {
        scene.rotate_plane(self.selected, &axis.unit(), sign * self.step)
    }

    /// Handles keyboard input.
    /// Returns true if a plane moved and the intersection must be recomputed.
    pub fn update(&mut self, scene: &mut Scene) -> bool {
        if is_key_pressed(KeyCode::Tab) {
            self.select_next();
        }
        if is_key_pressed(KeyCode::Key1) {
            self.select(0);
        }
        if is_key_pressed(KeyCode::Key2) {
            self.select(1);
        }

        if is_key_pressed(KeyCode::Backspace) {
            scene.reset();
            return true;
        }

        let bindings = [
            (KeyCode::W, RotationAxis::X, 1.0),
            (KeyCode::S, RotationAxis::X, -1.0),
            (KeyCode::A, RotationAxis::Y, 1.0),
            (KeyCode::D, RotationAxis::Y, -1.0),
            (KeyCode::Q, RotationAxis::Z, 1.0),
            (KeyCode::E, RotationAxis::Z, -1.0),
        ];

        let mut moved = false;
        for (key, axis, sign) in bindings {
            if is_key_down(key) {
                moved |= self.rotate(scene, axis, sign);
            }
        }
        moved
    }

    /// Draws the selection and intersection overlay.
    pub fn draw_ui(&self, scene: &Scene, intersection: &SceneIntersection, y_offset: f32) {
        for (index, plane) in scene.planes().iter().enumerate() {
            let marker = if index == self.selected { ">" } else { " " };
            let (roll, pitch, yaw) = plane.orientation().euler_angles();
            draw_text(
                &format!(
                    "{} [{}] {}  rpy {:.0}/{:.0}/{:.0} deg",
                    marker,
                    index + 1,
                    plane.name(),
                    roll.to_degrees(),
                    pitch.to_degrees(),
                    yaw.to_degrees()
                ),
                10.0,
                y_offset + 20.0 * index as f32,
                18.0,
                plane.color(),
            );
        }

        let status = match (&intersection.line, &intersection.visible) {
            (None, _) => "planes are parallel".to_string(),
            (Some(_), None) => "line leaves at least one plane".to_string(),
            (Some(_), Some(segment)) => format!("visible segment length {:.4}", segment.length()),
        };
        draw_text(&status, 10.0, y_offset + 45.0, 18.0, RED);

        draw_text(
            "[Tab]/[1]/[2] select | W/S A/D Q/E rotate | [Backspace] reset",
            10.0,
            y_offset + 65.0,
            16.0,
            DARKGRAY,
        );
    }
}
