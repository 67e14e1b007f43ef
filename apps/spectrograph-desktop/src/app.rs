use anyhow::{Context, Result};
use glam::Mat4;
use spectrograph_input::{Action, NormalizedPointer};
use spectrograph_render::{CameraRig, FramePlan, Renderer};
use spectrograph_render_wgpu::{ShaderSources, WgpuBackend};
use std::path::PathBuf;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

/// How the viewer window is created.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub shader_dir: PathBuf,
    pub windowed: bool,
    pub width: u32,
    pub height: u32,
}

/// Everything that exists once startup has succeeded.
struct AppContext {
    window: Arc<Window>,
    backend: WgpuBackend,
    camera: CameraRig,
    view: Mat4,
}

impl AppContext {
    fn apply(&mut self, action: Action) {
        match action {
            Action::Look(pointer) => {
                self.view = self.camera.view_for_pointer(pointer);
                self.window.request_redraw();
            }
            Action::Resize { width, height } => {
                self.backend.resize(width, height);
                self.window.request_redraw();
            }
            Action::Redraw => self.redraw(),
            Action::Quit => {}
        }
    }

    fn redraw(&mut self) {
        // Aspect comes from the surface as it is right now.
        let plan = FramePlan::new(self.view, self.backend.aspect_ratio());
        match self.backend.draw(&plan) {
            Ok(true) => {}
            Ok(false) => self.window.request_redraw(),
            Err(e) => tracing::error!("frame dropped: {e}"),
        }
    }

    fn surface_size(&self) -> (u32, u32) {
        self.backend.gpu().size()
    }
}

/// Window application with a two-phase lifecycle: nothing can be drawn
/// until `resumed` has produced an [`AppContext`].
pub struct GpuApp {
    config: ViewerConfig,
    context: Option<AppContext>,
    startup_error: Option<anyhow::Error>,
}

impl GpuApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            context: None,
            startup_error: None,
        }
    }

    /// The error that aborted startup, if any.
    pub fn take_startup_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }

    fn initialize(&self, event_loop: &ActiveEventLoop) -> Result<AppContext> {
        let shaders = ShaderSources::load(&self.config.shader_dir).with_context(|| {
            format!(
                "failed to load shaders from {}",
                self.config.shader_dir.display()
            )
        })?;

        let mut attrs = Window::default_attributes().with_title("Spectrograph");
        attrs = if self.config.windowed {
            attrs.with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
        } else {
            attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
        };
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let backend = pollster::block_on(WgpuBackend::initialize(
            window.clone(),
            size.width,
            size.height,
            &shaders,
        ))
        .context("failed to initialize graphics")?;

        let camera = CameraRig::default();
        let view = camera.view_for_pointer(NormalizedPointer::CENTER);
        tracing::info!(
            width = size.width,
            height = size.height,
            "viewer initialized"
        );

        Ok(AppContext {
            window,
            backend,
            camera,
            view,
        })
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, action: Action) {
        if action == Action::Quit {
            event_loop.exit();
            return;
        }
        if let Some(ctx) = &mut self.context {
            ctx.apply(action);
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() || self.startup_error.is_some() {
            return;
        }

        match self.initialize(event_loop) {
            Ok(ctx) => {
                // First frame uses the neutral camera.
                ctx.window.request_redraw();
                self.context = Some(ctx);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let action = match event {
            WindowEvent::CloseRequested => Action::Quit,
            WindowEvent::Resized(size) => Action::Resize {
                width: size.width,
                height: size.height,
            },
            WindowEvent::CursorMoved { position, .. } => {
                let Some(ctx) = &self.context else {
                    return;
                };
                let action = Action::look_at_cursor((position.x, position.y), ctx.surface_size());
                tracing::trace!(?action, "pointer moved");
                action
            }
            WindowEvent::RedrawRequested => Action::Redraw,
            _ => return,
        };
        self.dispatch(event_loop, action);
    }
}
