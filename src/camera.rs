use glam::{Mat4, Vec3};

use crate::config::AnimationConfig;

/// Linear dolly-zoom ramp: the camera closes in while the lens narrows,
/// keeping the car roughly the same size as the background compresses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyZoom {
    pub zoom_far: f32,
    pub zoom_near: f32,
    pub fov_wide: f32,
    pub fov_narrow: f32,
}

/// Distance behind the car and field of view for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyParams {
    pub zoom: f32,
    /// Degrees
    pub fov: f32,
}

impl DollyZoom {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            zoom_far: config.zoom_far,
            zoom_near: config.zoom_near,
            fov_wide: config.fov_wide,
            fov_narrow: config.fov_narrow,
        }
    }

    pub fn at(&self, progress: f32) -> DollyParams {
        DollyParams {
            zoom: self.zoom_far - (self.zoom_far - self.zoom_near) * progress,
            fov: self.fov_wide - (self.fov_wide - self.fov_narrow) * progress,
        }
    }
}

impl Default for DollyZoom {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// Camera for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraPose {
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }
}
