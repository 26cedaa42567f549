//! Scene files.
//!
//! A scene is a TOML document with exactly two `[[plane]]` tables, an
//! optional `[camera]` table and an optional `anchor` key:
//!
//! ```toml
//! anchor = "dominant-axis"
//!
//! [[plane]]
//! name = "green"
//! position = [0.0, 0.2, 0.0]
//! size = [1.0, 1.0]
//! color = [0, 200, 0]
//! rotation = { axis = [0.0, 1.0, 0.0], degrees = -45.0 }
//! ```

use std::path::Path;

use anyhow::{ensure, Context, Result};
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use plane_intersect::LineAnchor;
use serde::Deserialize;

/// The scene shown when no file is given.
pub const REFERENCE_SCENE: &str = include_str!("../scenes/reference.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub anchor: AnchorConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(rename = "plane")]
    pub planes: Vec<PlaneConfig>,
}

/// Serialized form of [`LineAnchor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorConfig {
    #[default]
    DominantAxis,
    NearestOrigin,
}

impl From<AnchorConfig> for LineAnchor {
    fn from(anchor: AnchorConfig) -> Self {
        match anchor {
            AnchorConfig::DominantAxis => LineAnchor::DominantAxis,
            AnchorConfig::NearestOrigin => LineAnchor::NearestOrigin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            yaw: 0.6,
            pitch: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaneConfig {
    pub name: String,
    /// Center of the plane.
    pub position: [f64; 3],
    /// Width and height.
    pub size: [f64; 2],
    /// RGB color of the surface.
    pub color: [u8; 3],
    /// Initial rotation; the plane faces +z without one.
    #[serde(default)]
    pub rotation: Option<RotationConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationConfig {
    pub axis: [f64; 3],
    pub degrees: f64,
}

impl PlaneConfig {
    pub fn center(&self) -> Point3<f64> {
        Point3::from(self.position)
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.rotation
            .and_then(|rotation| {
                Unit::try_new(Vector3::from(rotation.axis), plane_intersect::GEOMETRY_EPSILON)
                    .map(|axis| UnitQuaternion::from_axis_angle(&axis, rotation.degrees.to_radians()))
            })
            .unwrap_or_else(UnitQuaternion::identity)
    }
}

impl SceneConfig {
    /// Reads and validates a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scene file {}", path.display()))
    }

    /// Parses and validates a scene from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.planes.len() == 2,
            "a scene needs exactly 2 planes, found {}",
            self.planes.len()
        );
        for plane in &self.planes {
            ensure!(
                plane.size.iter().all(|s| *s > 0.0),
                "plane '{}' has a non-positive size {:?}",
                plane.name,
                plane.size
            );
            if let Some(rotation) = &plane.rotation {
                ensure!(
                    Vector3::from(rotation.axis).norm() > plane_intersect::GEOMETRY_EPSILON,
                    "plane '{}' has a zero rotation axis",
                    plane.name
                );
            }
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    /// The reference scene, identical to `scenes/reference.toml`.
    fn default() -> Self {
        Self {
            anchor: AnchorConfig::DominantAxis,
            camera: CameraConfig::default(),
            planes: vec![
                PlaneConfig {
                    name: "green".to_string(),
                    position: [0.0, 0.2, 0.0],
                    size: [1.0, 1.0],
                    color: [0, 200, 0],
                    rotation: Some(RotationConfig {
                        axis: [0.0, 1.0, 0.0],
                        degrees: -45.0,
                    }),
                },
                PlaneConfig {
                    name: "blue".to_string(),
                    position: [0.125, 0.05, 0.1],
                    size: [0.4, 0.3],
                    color: [40, 90, 255],
                    rotation: Some(RotationConfig {
                        axis: [1.0, 0.0, 0.0],
                        degrees: 22.5,
                    }),
                },
            ],
        }
    }
}
