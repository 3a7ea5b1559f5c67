//! Application main loop
//!
//! Everything runs on the event loop thread: images are decoded and files
//! renamed synchronously between frames. Any error ends the loop and is
//! returned from [`run`].

use anyhow::Result;
use app_core::{load_scaled, AppConfig, AppError, Command, RenameWorkflow, WorkflowState};
use app_ui::{
    components::{EmptyFolderNotice, RenamePanel},
    InputHandler, Renderer, Theme,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// What the window is showing
enum Screen {
    /// Terminal state: nothing to rename
    Notice(EmptyFolderNotice),
    Rename(RenamePanel),
}

struct App {
    config: AppConfig,
    workflow: RenameWorkflow,
    screen: Screen,

    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    input_handler: InputHandler,
    theme: Theme,
    /// Texture size limit of the device; scaled images are kept within it
    max_texture_side: u32,

    /// Next frame egui asked for (text cursor blink and the like)
    repaint_at: Option<Instant>,
    /// First error that stopped the loop
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config: AppConfig, workflow: RenameWorkflow) -> Self {
        let screen = match workflow.state() {
            WorkflowState::Empty => {
                tracing::info!("No images in {}", workflow.source_dir().display());
                Screen::Notice(EmptyFolderNotice::new())
            }
            WorkflowState::Editing => Screen::Rename(RenamePanel::new()),
        };

        let input_handler = InputHandler::new(config.keybindings.clone());
        let theme = Theme::by_name(&config.display.theme);

        Self {
            config,
            workflow,
            screen,
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            input_handler,
            theme,
            max_texture_side: 2048,
            repaint_at: None,
            fatal: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = match self.screen {
            Screen::Notice(_) => self.config.display.notice_size,
            Screen::Rename(_) => self.config.display.window_size,
        };

        let window_attrs = Window::default_attributes()
            .with_title(self.workflow.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;
        self.max_texture_side = renderer.max_texture_side();

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(self.max_texture_side as usize),
        );

        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);

        self.load_head()?;
        Ok(())
    }

    /// Decode the head image and hand it to the rename panel
    fn load_head(&mut self) -> Result<(), AppError> {
        let panel = match &mut self.screen {
            Screen::Rename(panel) => panel,
            Screen::Notice(_) => return Ok(()),
        };

        let path = match self.workflow.head_path() {
            Some(path) => path,
            None => return Ok(()),
        };

        let display = &self.config.display;
        let image = load_scaled(
            &path,
            display.image_height,
            self.max_texture_side,
            display.interpolation,
        )?;
        tracing::debug!("Showing {} at {}x{}", path.display(), image.width, image.height);

        panel.set_image(&self.egui_ctx, &image);
        Ok(())
    }

    /// Run commands through the workflow and refresh what they changed
    fn apply(&mut self, commands: Vec<Command>) -> Result<(), AppError> {
        for cmd in commands {
            let transition = self.workflow.execute(&cmd)?;
            tracing::debug!("{} -> {:?}", cmd.id.as_str(), transition);

            if transition.head_changed() {
                self.load_head()?;
            }

            if transition.title_changed() {
                if let Some(window) = &self.window {
                    window.set_title(&self.workflow.window_title());
                }
            }
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("Fatal error: {:#}", err);
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        let raw_input = match &mut self.egui_state {
            Some(state) => state.take_egui_input(&window),
            None => return,
        };

        let ctx = self.egui_ctx.clone();
        let workflow = &mut self.workflow;
        let screen = &mut self.screen;
        let keys = &self.input_handler;

        let mut commands = Vec::new();
        let mut dismissed = false;

        let full_output = ctx.run(raw_input, |ctx| match screen {
            Screen::Notice(notice) => {
                dismissed |= notice.ui(ctx);
            }
            Screen::Rename(panel) => {
                let can_skip = workflow.can_skip();
                commands.extend(panel.ui(ctx, workflow.input_mut(), can_skip, keys));
            }
        });

        if let Some(state) = &mut self.egui_state {
            state.handle_platform_output(&window, full_output.platform_output);
        }

        let primitives = ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let painted = match &mut self.renderer {
            Some(renderer) => {
                renderer.paint(&primitives, &full_output.textures_delta, full_output.pixels_per_point)
            }
            None => return,
        };

        match painted {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.handle_surface_lost();
                }
                window.request_redraw();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface timeout, skipping frame");
            }
            Err(e) => {
                self.fail(event_loop, anyhow::anyhow!("Surface error: {:?}", e));
                return;
            }
        }

        if dismissed {
            tracing::info!("Notice dismissed");
            event_loop.exit();
            return;
        }

        if !commands.is_empty() {
            if let Err(e) = self.apply(commands) {
                self.fail(event_loop, e.into());
                return;
            }
            window.request_redraw();
        }

        let repaint_delay = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|viewport| viewport.repaint_delay)
            .unwrap_or(Duration::MAX);

        if repaint_delay.is_zero() {
            window.request_redraw();
        } else if let Some(at) = Instant::now().checked_add(repaint_delay) {
            self.repaint_at = Some(at);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.fail(event_loop, e.context("Failed to initialize window"));
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.fatal.is_some() {
            return;
        }

        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        // Let egui see every event first; shortcuts are resolved inside the frame
        if let Some(egui_state) = &mut self.egui_state {
            let response = egui_state.on_window_event(&window, &event);
            if response.repaint {
                window.request_redraw();
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
                window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.repaint_at {
            Some(at) if Instant::now() >= at => {
                self.repaint_at = None;
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

/// Run the application until the window is closed or an error occurs
pub fn run(config: AppConfig, workflow: RenameWorkflow) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, workflow);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
