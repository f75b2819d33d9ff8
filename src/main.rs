//! Starfield - a flight through an endless field of stars
//!
//! Stars drift toward the viewer at constant speed and wrap back to the far
//! plane, drawn as textured sprites in a single batched draw call.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use starfield::config::AppConfig;
use starfield::input::{InputAction, InputMapper};
use starfield::systems::{FrameClock, RenderError, RenderSystem, SimulationSystem, WindowSystem};
use starfield_render::QuadBuffer;

/// Systems that exist once the window has been created
struct Running {
    window: WindowSystem,
    render: RenderSystem,
    simulation: SimulationSystem,
    quads: QuadBuffer,
}

/// Main application state
struct App {
    config: AppConfig,
    seed: u64,
    clock: FrameClock,
    running: Option<Running>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let seed = config.stars.seed.unwrap_or_else(rand::random);
        let clock = FrameClock::new(config.timing.frame_interval(), Instant::now());
        Self {
            config,
            seed,
            clock,
            running: None,
        }
    }

    /// Create the window and every system that depends on it
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running, Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;

        // Fullscreen windows may not match the configured size
        let size = window.window().inner_size();
        let star_config = self.config.star_config_for(size.width, size.height);
        let simulation = SimulationSystem::new(&star_config, self.seed)?;

        let render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
            simulation.star_count(),
        )?;

        let quads = QuadBuffer::new(simulation.star_count(), render.texture_extent());

        Ok(Running {
            window,
            render,
            simulation,
            quads,
        })
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(running) = &self.running {
                    running.window.toggle_fullscreen();
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = &mut self.running else {
            return;
        };

        let now = Instant::now();
        if self.clock.is_due(now) {
            running.simulation.tick();
            if let Some(fps) = self.clock.tick(now) {
                if self.config.debug.show_fps {
                    running
                        .window
                        .update_title(running.simulation.star_count(), fps);
                }
                log::trace!("{:.1} fps", fps);
            }
        }

        running.simulation.project_into(&mut running.quads);

        match running.render.render_frame(&running.quads) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                running.render.recover_surface();
                running.window.request_redraw();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => {
                let (width, height) = running.render.size();
                log::info!(
                    "Running {} stars at {}x{}, {} fps cap",
                    running.simulation.star_count(),
                    width,
                    height,
                    self.config.timing.max_framerate
                );
                self.running = Some(running);
            }
            Err(e) => {
                log::error!("Startup failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(running) = &mut self.running {
                    running.render.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            if self.clock.is_due(Instant::now()) {
                running.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

fn main() {
    // Logger is not up yet; report a config failure once it is
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Starfield");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
