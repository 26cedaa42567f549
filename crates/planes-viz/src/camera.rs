//! Orbit camera aimed at the two planes.

use macroquad::prelude::*;

use crate::config::CameraConfig;

const MIN_DISTANCE: f32 = 0.2;
const MAX_DISTANCE: f32 = 20.0;
const MAX_PITCH: f32 = 1.5;

/// Share of the current distance covered by one scroll step.
const ZOOM_STEP: f32 = 0.1;

/// Radians per frame while an arrow key is held.
const KEY_ORBIT_SPEED: f32 = 0.02;

/// Camera circling a fixed target at a configurable distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    distance: f32,
    yaw: f32,
    pitch: f32,
    target: Vec3,
    home: CameraConfig,
}

impl OrbitCamera {
    /// Starts at the view described by `config`, looking at `target`.
    pub fn new(config: CameraConfig, target: Vec3) -> Self {
        let mut camera = Self {
            distance: config.distance,
            yaw: config.yaw,
            pitch: config.pitch,
            target,
            home: config,
        };
        camera.reset();
        camera
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Turns around the target. Pitch stops short of the poles.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch = (self.pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves `steps` scroll steps closer (negative: further away).
    pub fn zoom(&mut self, steps: f32) {
        let factor = (1.0 - ZOOM_STEP).powf(steps);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Returns to the configured view.
    pub fn reset(&mut self) {
        self.distance = self.home.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.yaw = self.home.yaw;
        self.pitch = self.home.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Mouse drag and arrow keys orbit, the wheel zooms, `C` recenters.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.orbit(-delta.x * 2.0, -delta.y * 2.0);
        }

        let scroll = mouse_wheel().1;
        if scroll != 0.0 {
            // Wheel deltas differ between platforms; only the direction is used.
            self.zoom(scroll.signum());
        }

        let arrows = [
            (KeyCode::Left, KEY_ORBIT_SPEED, 0.0),
            (KeyCode::Right, -KEY_ORBIT_SPEED, 0.0),
            (KeyCode::Up, 0.0, KEY_ORBIT_SPEED),
            (KeyCode::Down, 0.0, -KEY_ORBIT_SPEED),
        ];
        for (key, yaw, pitch) in arrows {
            if is_key_down(key) {
                self.orbit(yaw, pitch);
            }
        }

        if is_key_pressed(KeyCode::C) {
            self.reset();
        }
    }

    pub fn position(&self) -> Vec3 {
        let offset = vec3(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset * self.distance
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: Vec3::Y,
            target: self.target,
            ..Default::default()
        }
    }
}
