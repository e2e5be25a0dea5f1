use glam::{Mat4, Vec3};

use crate::camera::{CameraPose, DollyParams, DollyZoom};
use crate::config::SceneConfig;
use crate::math::{look_rotation, CubicBezier};

/// Everything that moves in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePose {
    pub progress: f32,
    pub dolly: DollyParams,
    pub camera: CameraPose,
    pub car: Mat4,
}

/// Derives camera and car pose from animation progress along the road
#[derive(Debug, Clone, Copy)]
pub struct FrameComposer {
    curve: CubicBezier,
    dolly: DollyZoom,
    camera_height: f32,
    car_drop: f32,
    car_scale: f32,
    near: f32,
    far: f32,
}

impl FrameComposer {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            curve: config.road.curve,
            dolly: DollyZoom::from_config(&config.animation),
            camera_height: config.animation.camera_height,
            car_drop: config.animation.car_drop,
            car_scale: config.car_scale,
            near: config.animation.near_plane,
            far: config.animation.far_plane,
        }
    }

    pub fn compose(&self, progress: f32) -> FramePose {
        let position = self.curve.position(progress);
        let tangent = self.curve.tangent(progress);
        let dolly = self.dolly.at(progress);

        FramePose {
            progress,
            dolly,
            camera: self.camera(position, tangent, dolly),
            car: self.car_transform(position, tangent),
        }
    }

    /// Trails the car by `zoom` along the tangent, raised above the road
    fn camera(&self, position: Vec3, tangent: Vec3, dolly: DollyParams) -> CameraPose {
        CameraPose {
            position: position - tangent * dolly.zoom + Vec3::new(0.0, self.camera_height, 0.0),
            target: position,
            up: Vec3::Y,
            fov: dolly.fov,
            near: self.near,
            far: self.far,
        }
    }

    /// The car mesh faces +Z, so the look rotation (which aims -Z) is
    /// followed by a half turn
    fn car_transform(&self, position: Vec3, tangent: Vec3) -> Mat4 {
        Mat4::from_translation(position - Vec3::new(0.0, self.car_drop, 0.0))
            * look_rotation(tangent)
            * Mat4::from_rotation_y(std::f32::consts::PI)
            * Mat4::from_scale(Vec3::splat(self.car_scale))
    }
}
