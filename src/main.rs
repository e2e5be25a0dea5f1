use anyhow::{anyhow, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use dolly_zoom::cli::Cli;
use dolly_zoom::composer::FrameComposer;
use dolly_zoom::config::SceneConfig;
use dolly_zoom::core::clock::AnimationClock;
use dolly_zoom::core::window::WindowDimensions;
use dolly_zoom::frame::FpsCounter;
use dolly_zoom::loaders::load_mesh;
use dolly_zoom::renderer::SceneRenderer;
use dolly_zoom::scenes::{CityScene, SceneBuilder};
use dolly_zoom::types::Vertex;

struct App {
    config: SceneConfig,
    scene: CityScene,
    car_mesh: Vec<Vertex>,
    composer: FrameComposer,
    clock: AnimationClock,
    fps: FpsCounter,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: SceneConfig, scene: CityScene, car_mesh: Vec<Vertex>) -> Self {
        Self {
            composer: FrameComposer::new(&config),
            clock: AnimationClock::new(config.animation.period),
            fps: FpsCounter::new(),
            config,
            scene,
            car_mesh,
            window: None,
            renderer: None,
            startup_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.startup_error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        self.fps.frame();

        let pose = self.composer.compose(self.clock.progress());
        match renderer.render(&pose) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout, skipping frame"),
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, anyhow!("Failed to create window: {}", e));
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.scene,
            &self.car_mesh,
            &self.config,
        )) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e.context("Failed to initialize renderer"));
                return;
            }
        };

        // Start the loop on the first presented frame, not at process start
        self.clock.reset();
        self.fps = FpsCounter::new();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(WindowDimensions::from(size));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().resolve()?;
    let car_mesh = load_mesh(&config.model_path)?;
    let scene = SceneBuilder::new(&config).build();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene, car_mesh);

    log::info!("Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
