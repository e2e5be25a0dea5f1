use glam::{Mat4, Vec3};

use crate::math::normal_matrix;

/// Upper bound on point lights the lit shader iterates over
pub const MAX_POINT_LIGHTS: usize = 10;

/// Interleaved vertex: position followed by normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn from_vec3(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Per-instance data for one placed object
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// Normal matrix columns, padded to vec4
    pub normal: [[f32; 4]; 3],
    /// rgb colour, w = specular shininess (ignored by the emissive pipeline)
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: &Mat4, color: Vec3, shininess: f32) -> Self {
        let n = normal_matrix(model);
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color: color.extend(shininess).to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
            7 => Float32x4,
            8 => Float32x4,
            9 => Float32x4,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Point light as laid out in the scene uniform (48 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 3],
    pub falloff_constant: f32,
    pub color: [f32; 3],
    pub falloff_linear: f32,
    pub falloff_quadratic: f32,
    pub _pad: [f32; 3],
}

/// Per-frame uniform shared by the lit and emissive pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub ambient_strength: f32,
    pub dir_light_dir: [f32; 3],
    pub specular_strength: f32,
    pub dir_light_color: [f32; 3],
    pub fog_density: f32,
    pub fog_color: [f32; 3],
    pub num_point_lights: u32,
    pub point_lights: [PointLightRaw; MAX_POINT_LIGHTS],
}
