// config.rs - Immutable scene configuration
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::CubicBezier;
use crate::types::MAX_POINT_LIGHTS;

pub const DEFAULT_SEED: u64 = 0x00C0_FFEE;

/// Everything tunable about the scene, fixed for the life of the process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub road: RoadConfig,
    pub city: CityConfig,
    pub animation: AnimationConfig,
    /// Car mesh, `.obj` or `.gltf`/`.glb`
    pub model_path: PathBuf,
    pub car_scale: f32,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadConfig {
    pub curve: CubicBezier,
    pub segments: usize,
    pub half_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    pub buildings: usize,
    /// Every n-th building gets a streetlight
    pub streetlight_every: usize,
    pub max_point_lights: usize,
    /// Distance from the road edge to the streetlight post
    pub streetlight_setback: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds per loop
    pub period: f32,
    pub zoom_far: f32,
    pub zoom_near: f32,
    /// Degrees
    pub fov_wide: f32,
    /// Degrees
    pub fov_narrow: f32,
    pub camera_height: f32,
    pub car_drop: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            road: RoadConfig::default(),
            city: CityConfig::default(),
            animation: AnimationConfig::default(),
            model_path: PathBuf::from("assets/car.obj"),
            car_scale: 1.5,
            seed: DEFAULT_SEED,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Neon Velocity".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            curve: CubicBezier::road(),
            segments: 100,
            half_width: 5.0,
        }
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            buildings: 20,
            streetlight_every: 3,
            max_point_lights: MAX_POINT_LIGHTS,
            streetlight_setback: 1.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period: 10.0,
            zoom_far: 35.0,
            zoom_near: 10.0,
            fov_wide: 60.0,
            fov_narrow: 45.0,
            camera_height: 5.0,
            car_drop: 0.2,
            near_plane: 0.1,
            far_plane: 200.0,
        }
    }
}

impl WindowConfig {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl SceneConfig {
    /// Loads a JSON file; missing fields keep their defaults.
    /// The light cap is clamped to what the shader supports.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if self.city.max_point_lights > MAX_POINT_LIGHTS {
            log::warn!(
                "max_point_lights {} exceeds shader limit, clamping to {}",
                self.city.max_point_lights,
                MAX_POINT_LIGHTS
            );
            self.city.max_point_lights = MAX_POINT_LIGHTS;
        }
        self.city.streetlight_every = self.city.streetlight_every.max(1);
        self.road.segments = self.road.segments.max(1);
        if !(self.animation.period.is_finite() && self.animation.period > 0.0) {
            log::warn!("Invalid animation period, using default");
            self.animation.period = AnimationConfig::default().period;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_values() {
        let config = SceneConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.road.segments, 100);
        assert_eq!(config.city.buildings, 20);
        assert_eq!(config.city.max_point_lights, 10);
        assert_eq!(config.animation.period, 10.0);
        assert_eq!(config.car_scale, 1.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "seed": 7, "city": { "buildings": 4 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.city.buildings, 4);
        assert_eq!(config.city.streetlight_every, 3);
        assert_eq!(config.road, RoadConfig::default());
    }

    #[test]
    fn test_sanitized_clamps_light_cap() {
        let mut config = SceneConfig::default();
        config.city.max_point_lights = 64;
        config.city.streetlight_every = 0;
        config.animation.period = -1.0;
        let config = config.sanitized();
        assert_eq!(config.city.max_point_lights, MAX_POINT_LIGHTS);
        assert_eq!(config.city.streetlight_every, 1);
        assert_eq!(config.animation.period, 10.0);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = SceneConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("exist.json"));
    }

    #[test]
    fn test_aspect() {
        assert!((WindowConfig::default().aspect() - 16.0 / 9.0).abs() < 1e-6);
    }
}
