//! Native demo application.
//!
//! Opens a window whose client area is the container and drives one
//! transformer with real pointer and keyboard input. The element's state is
//! mirrored into the window title.

use crate::host::{self, WindowCursor};
use kurbo::Point;
use std::sync::Arc;
use thiserror::Error;
use transformer_core::{
    EventHub, HostBinding, Position, Size, TransformError, TransformState, Transformer,
    TransformerConfig,
};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Environment variable naming a JSON transformer config file.
pub const CONFIG_ENV: &str = "TRANSFORMER_CONFIG";

/// Errors from the native demo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub transformer: TransformerConfig,
    pub initial_state: TransformState,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Transformer".to_string(),
            width: 1024,
            height: 768,
            transformer: TransformerConfig::interactive(),
            initial_state: TransformState::new(
                Position::new(35.0, 35.0),
                Size::new(30.0, 30.0),
                0.0,
            ),
        }
    }
}

impl AppConfig {
    /// Defaults, with the transformer config read from the file named by
    /// `TRANSFORMER_CONFIG` when set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let json = std::fs::read_to_string(&path)
                .map_err(|source| AppError::ReadConfig { path: path.clone(), source })?;
            config.transformer = TransformerConfig::from_json(&json)?;
            log::info!("Loaded transformer config from {}", path);
        }
        Ok(config)
    }
}

/// Title text describing `state`.
pub(crate) fn status_line(base: &str, state: &TransformState) -> String {
    format!(
        "{} | x {:.1}% y {:.1}% | {:.1}% x {:.1}% | {:.1}°{}",
        base,
        state.position.x,
        state.position.y,
        state.size.width,
        state.size.height,
        state.rotation,
        if state.selected { " | selected" } else { "" }
    )
}

/// Live window plus its bound transformer.
struct AppState {
    window: Arc<Window>,
    binding: HostBinding<EventHub>,
    pointer: Point,
}

impl AppState {
    fn new(window: Arc<Window>, config: &AppConfig) -> Self {
        let transformer = Transformer::new(
            config.transformer.clone(),
            WindowCursor::new(Arc::clone(&window)),
        )
        .with_state(config.initial_state);
        window.set_title(&status_line(&config.title, transformer.state()));

        let mut binding = HostBinding::new(EventHub::new(), transformer);
        {
            let title_window = Arc::clone(&window);
            let base = config.title.clone();
            binding
                .transformer()
                .borrow_mut()
                .subscribe(move |state| title_window.set_title(&status_line(&base, state)));
        }
        binding.start();

        let size = window.inner_size();
        binding
            .host_mut()
            .container_resized(f64::from(size.width), f64::from(size.height));

        Self {
            window,
            binding,
            pointer: Point::ZERO,
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.binding.stop();
                return false;
            }
            WindowEvent::Resized(size) => {
                self.binding
                    .host_mut()
                    .container_resized(f64::from(size.width), f64::from(size.height));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Point::new(position.x, position.y);
                self.binding.host_mut().pointer_move(self.pointer);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = host::mouse_button(button);
                match state {
                    ElementState::Pressed => {
                        self.binding.host_mut().pointer_down(self.pointer, button);
                    }
                    ElementState::Released => {
                        self.binding.host_mut().pointer_up(self.pointer, button);
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = host::key_name(&event.logical_key) else {
                    return true;
                };
                match event.state {
                    ElementState::Pressed if event.repeat => {}
                    ElementState::Pressed => {
                        if key == "0" {
                            self.binding.transformer().borrow_mut().reset_rotation();
                        } else {
                            self.binding.host_mut().key_down(&key);
                        }
                    }
                    ElementState::Released => {
                        self.binding.host_mut().key_up(&key);
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost once focus moves away.
                let snap_key = self.binding.transformer().borrow().config().snap_key.clone();
                self.binding.host_mut().key_up(&snap_key);
            }
            _ => {}
        }
        true
    }
}

/// Main application.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Run the event loop until the window closes.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new(config);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let state = AppState::new(window, &self.config);
        log::info!(
            "Transformer {} bound to window",
            state.binding.transformer().borrow().id()
        );
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.window.id() != window_id {
            return;
        }
        if !state.handle_window_event(event) {
            self.state = None;
            event_loop.exit();
        }
    }
}
