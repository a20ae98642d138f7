use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use orbit_viewer::camera::{OrbitInput, OrbitSpeeds, OrbitState, Projection};
use orbit_viewer::cli::Cli;
use orbit_viewer::config::ViewerConfig;
use orbit_viewer::core::{Button, Controller, WinitController};
use orbit_viewer::frame::FrameTimer;
use orbit_viewer::renderer::Renderer;
use orbit_viewer::scene::Scene;
use orbit_viewer::scenes::create_scene;
use orbit_viewer::types::FrameUniforms;

// === Application ===

struct App {
    config: ViewerConfig,
    scene: Box<dyn Scene>,
    // Dropped before the window it presents to
    renderer: Option<Renderer>,
    window: Option<Arc<Window>>,
    controller: WinitController,
    orbit: Option<OrbitState>,
    projection: Projection,
    speeds: OrbitSpeeds,
    timer: FrameTimer,
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig, scene: Box<dyn Scene>) -> Self {
        let projection = config
            .projection
            .projection(config.window.width, config.window.height);
        let speeds = config.camera.speeds();
        let orbit = scene.initial_orbit();

        Self {
            config,
            scene,
            renderer: None,
            window: None,
            controller: WinitController::new(),
            orbit,
            projection,
            speeds,
            timer: FrameTimer::new(),
            fatal: None,
        }
    }

    fn title(&self) -> String {
        format!("{} - {}", self.config.window.title, self.scene.name())
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.title())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    )),
            )?,
        );

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.scene.as_ref(),
            self.config.clear_color.into(),
        ))?;

        let (width, height) = renderer.size();
        self.projection.set_viewport(width, height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.timer = FrameTimer::new();
        Ok(())
    }

    fn redraw(&mut self) {
        let frame = self.timer.tick();

        if let (Some(fps), Some(window)) = (frame.fps, &self.window) {
            window.set_title(&format!("{} ({fps:.0} FPS)", self.title()));
        }

        if let Some(orbit) = self.orbit {
            let input = OrbitInput::from_controller(&self.controller);
            self.orbit = Some(orbit.advance(&input, frame.delta, &self.speeds));
        }

        let uniforms = FrameUniforms::for_camera(self.orbit.as_ref(), &self.projection);
        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&uniforms) {
                log::error!("Render error: {e:#}");
            }
        }
    }

    fn into_result(mut self) -> Result<()> {
        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to initialize viewer: {e:#}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } if self.controller.is_down(Button::Escape) => {
                event_loop.exit()
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.projection.set_viewport(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Load settings and build the scene; failures are logged before returning
fn startup(cli: &Cli) -> Result<(ViewerConfig, Box<dyn Scene>)> {
    let config = ViewerConfig::load(cli.config.as_deref())
        .inspect_err(|e| log::error!("Invalid configuration: {e:#}"))?;
    let scene = create_scene(cli.scene, &cli.model)
        .inspect_err(|e| log::error!("Failed to build scene: {e:#}"))?;

    Ok((config, scene))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (config, scene) = startup(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);

    log::info!("Controls: A/D or Left/Right rotate, Q/E or Up/Down tilt, W/S zoom, Escape quits");
    event_loop.run_app(&mut app)?;

    app.into_result()
}
