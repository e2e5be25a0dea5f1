use glam::Vec3;

use crate::types::{PointLightRaw, SceneUniform, MAX_POINT_LIGHTS};

/// Sodium-ish streetlight with fixed distance falloff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl PointLight {
    pub const COLOR: Vec3 = Vec3::new(1.0, 0.7, 0.3);

    pub fn streetlight(position: Vec3) -> Self {
        Self {
            position,
            color: Self::COLOR,
            constant: 1.0,
            linear: 0.07,
            quadratic: 0.017,
        }
    }

    /// 1 / (c + l*d + q*d^2), matching the shader
    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }

    pub fn to_raw(&self) -> PointLightRaw {
        PointLightRaw {
            position: self.position.to_array(),
            falloff_constant: self.constant,
            color: self.color.to_array(),
            falloff_linear: self.linear,
            falloff_quadratic: self.quadratic,
            _pad: [0.0; 3],
        }
    }
}

/// Global lighting: moonlight, ambient, fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub dir_light_dir: Vec3,
    pub dir_light_color: Vec3,
    /// Also the clear colour, so distant geometry fades into the sky
    pub fog_color: Vec3,
    pub fog_density: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ambient_strength: 0.3,
            specular_strength: 1.0,
            dir_light_dir: Vec3::new(-20.0, -50.0, -20.0),
            dir_light_color: Vec3::new(0.6, 0.6, 0.7),
            fog_color: Vec3::new(0.05, 0.05, 0.1),
            fog_density: 0.02,
        }
    }
}

impl Environment {
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.fog_color.x as f64,
            g: self.fog_color.y as f64,
            b: self.fog_color.z as f64,
            a: 1.0,
        }
    }

    /// Packs camera, environment and up to `MAX_POINT_LIGHTS` lights.
    /// Extra lights are dropped.
    pub fn to_uniform(&self, view_proj: glam::Mat4, view_pos: Vec3, lights: &[PointLight]) -> SceneUniform {
        let mut point_lights = [PointLightRaw::default(); MAX_POINT_LIGHTS];
        let count = lights.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in point_lights.iter_mut().zip(lights) {
            *slot = light.to_raw();
        }

        SceneUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view_pos: view_pos.to_array(),
            ambient_strength: self.ambient_strength,
            dir_light_dir: self.dir_light_dir.to_array(),
            specular_strength: self.specular_strength,
            dir_light_color: self.dir_light_color.to_array(),
            fog_density: self.fog_density,
            fog_color: self.fog_color.to_array(),
            num_point_lights: count as u32,
            point_lights,
        }
    }
}
