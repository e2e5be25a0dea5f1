use anyhow::{anyhow, Result};
use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Instance, Queue, Surface, SurfaceConfiguration};

/// Device and queue bound to the adapter that drives the window surface
#[derive(Clone)]
pub struct GpuContext {
    adapter: Arc<Adapter>,
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a GPU context compatible with a surface (for window rendering)
    pub async fn new_with_surface(instance: &Instance, surface: &Surface<'_>) -> Result<Self> {
        let adapter = Self::request_adapter(instance, surface).await?;
        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            adapter: Arc::new(adapter),
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Surface configuration with vsync presentation.
    ///
    /// Prefers a non-sRGB format: scene colours are authored for a linear
    /// framebuffer.
    pub fn surface_config(&self, surface: &Surface<'_>, width: u32, height: u32) -> SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(&self.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    /// Runs `create` inside a validation error scope.
    ///
    /// Errors (bad WGSL, incompatible pipeline layout) are logged rather than
    /// panicking; the returned object may be invalid and fail at draw time.
    pub fn validated<T>(&self, label: &str, create: impl FnOnce(&Device) -> T) -> T {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let created = create(&self.device);
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            log::error!("{} failed validation:\n{}", label, error);
        }
        created
    }

    /// Request adapter with surface compatibility
    async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find appropriate adapter: {:?}", e))
    }

    /// Request device and queue
    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("GPU Context Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| anyhow!("Failed to create device: {:?}", e))
    }
}
