use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::composer::FramePose;
use crate::config::SceneConfig;
use crate::core::gpu_context::GpuContext;
use crate::core::window::WindowDimensions;
use crate::scenes::meshes::unit_cube;
use crate::scenes::{car_batch, CityScene, DrawBatch, Environment, MeshKind, Palette, PointLight};
use crate::types::{InstanceRaw, SceneUniform, Vertex};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Static vertex buffer for one mesh
struct GpuMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// Instance buffer for one draw batch
struct GpuBatch {
    label: &'static str,
    mesh: MeshKind,
    emissive: bool,
    instances: wgpu::Buffer,
    instance_count: u32,
}

impl GpuBatch {
    fn upload(device: &wgpu::Device, batch: &DrawBatch, usage: wgpu::BufferUsages) -> Self {
        let instances = batch.instances();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(batch.label),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX | usage,
        });

        Self {
            label: batch.label,
            mesh: batch.mesh,
            emissive: batch.is_emissive(),
            instances: buffer,
            instance_count: instances.len() as u32,
        }
    }
}

/// Rasterizes the city with a lit and an emissive pipeline
pub struct SceneRenderer {
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    lit_pipeline: wgpu::RenderPipeline,
    emissive_pipeline: wgpu::RenderPipeline,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    meshes: HashMap<MeshKind, GpuMesh>,
    batches: Vec<GpuBatch>,
    car: GpuBatch,
    palette: Palette,
    environment: Environment,
    point_lights: Vec<PointLight>,
    aspect: f32,
}

impl SceneRenderer {
    pub async fn new(
        window: Arc<Window>,
        scene: &CityScene,
        car_mesh: &[Vertex],
        config: &SceneConfig,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create window surface")?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let surface_config = gpu.surface_config(&surface, size.width, size.height);
        surface.configure(gpu.device(), &surface_config);
        let depth_view = Self::create_depth_view(gpu.device(), &surface_config);

        let palette = Palette::default();
        let environment = Environment::default();

        let scene_buffer = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: std::mem::size_of::<SceneUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = gpu
            .device()
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let scene_bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let lit_pipeline = Self::create_pipeline(
            &gpu,
            "Lit Pipeline",
            include_str!("shaders/lit.wgsl"),
            &bind_group_layout,
            surface_config.format,
        );
        let emissive_pipeline = Self::create_pipeline(
            &gpu,
            "Emissive Pipeline",
            include_str!("shaders/emissive.wgsl"),
            &bind_group_layout,
            surface_config.format,
        );

        let meshes = HashMap::from([
            (MeshKind::Road, Self::upload_mesh(gpu.device(), "Road Vertices", &scene.road)),
            (MeshKind::Cube, Self::upload_mesh(gpu.device(), "Cube Vertices", &unit_cube())),
            (MeshKind::Car, Self::upload_mesh(gpu.device(), "Car Vertices", car_mesh)),
        ]);

        let batches: Vec<GpuBatch> = scene
            .static_batches(&palette)
            .iter()
            .filter(|batch| !batch.transforms.is_empty())
            .map(|batch| GpuBatch::upload(gpu.device(), batch, wgpu::BufferUsages::empty()))
            .collect();

        let car = GpuBatch::upload(
            gpu.device(),
            &car_batch(&palette, glam::Mat4::IDENTITY),
            wgpu::BufferUsages::COPY_DST,
        );

        log::info!(
            "Renderer ready: {} static batches, {} car vertices, surface {}x{} ({:?})",
            batches.len(),
            car_mesh.len(),
            surface_config.width,
            surface_config.height,
            surface_config.format
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            depth_view,
            lit_pipeline,
            emissive_pipeline,
            scene_buffer,
            scene_bind_group,
            meshes,
            batches,
            car,
            palette,
            environment,
            point_lights: scene.point_lights.clone(),
            aspect: config.window.aspect(),
        })
    }

    /// Reconfigures the surface and depth buffer; the projection aspect stays
    /// fixed to the configured window size.
    pub fn resize(&mut self, dimensions: WindowDimensions) {
        if dimensions.is_empty() {
            return;
        }

        self.surface_config.width = dimensions.width;
        self.surface_config.height = dimensions.height;
        self.surface.configure(self.gpu.device(), &self.surface_config);
        self.depth_view = Self::create_depth_view(self.gpu.device(), &self.surface_config);
    }

    /// Reconfigure with the current size, e.g. after the surface was lost
    pub fn reconfigure(&mut self) {
        let dimensions = self.dimensions();
        self.resize(dimensions);
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.surface_config.width, self.surface_config.height)
    }

    pub fn render(&mut self, pose: &FramePose) -> std::result::Result<(), wgpu::SurfaceError> {
        let uniform = self.environment.to_uniform(
            pose.camera.view_projection(self.aspect),
            pose.camera.position,
            &self.point_lights,
        );
        self.gpu
            .queue()
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[uniform]));

        let car = InstanceRaw::new(&pose.car, self.palette.car.color, self.palette.car.shininess);
        self.gpu
            .queue()
            .write_buffer(&self.car.instances, 0, bytemuck::cast_slice(&[car]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.environment.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

            render_pass.set_pipeline(&self.lit_pipeline);
            for batch in self.batches.iter().chain(std::iter::once(&self.car)) {
                if !batch.emissive {
                    Self::draw_batch(&mut render_pass, &self.meshes, batch);
                }
            }

            render_pass.set_pipeline(&self.emissive_pipeline);
            for batch in self.batches.iter().filter(|b| b.emissive) {
                Self::draw_batch(&mut render_pass, &self.meshes, batch);
            }
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn draw_batch(
        render_pass: &mut wgpu::RenderPass<'_>,
        meshes: &HashMap<MeshKind, GpuMesh>,
        batch: &GpuBatch,
    ) {
        let Some(mesh) = meshes.get(&batch.mesh) else {
            log::warn!("No mesh uploaded for batch {}", batch.label);
            return;
        };
        render_pass.set_vertex_buffer(0, mesh.buffer.slice(..));
        render_pass.set_vertex_buffer(1, batch.instances.slice(..));
        render_pass.draw(0..mesh.vertex_count, 0..batch.instance_count);
    }

    fn upload_mesh(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> GpuMesh {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        GpuMesh {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    fn create_depth_view(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipeline(
        gpu: &GpuContext,
        label: &str,
        source: &str,
        bind_group_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = gpu.validated(label, |device| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            })
        });

        gpu.validated(label, |device| {
            let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout(), InstanceRaw::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    // Imported meshes have unknown winding
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        })
    }
}
