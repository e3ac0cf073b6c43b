use anyhow::Result;
use clap::Parser;
use octasphere_input::{Action, InputEvent, Key, LoopControl, apply};
use octasphere_kernel::{FramePacer, FrameTimer, ViewState};
use octasphere_render::{RenderView, present_frame};
use octasphere_render_wgpu::{GpuContext, InitError, WgpuRenderer};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "octasphere";
const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;

#[derive(Parser)]
#[command(
    name = "octasphere-desktop",
    about = "Rotating subdivided octahedron. Numpad +/- change the level, mouse tilts, Esc quits."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::NumpadAdd => Key::NumpadPlus,
        KeyCode::NumpadSubtract => Key::NumpadMinus,
        _ => Key::Other,
    }
}

/// Turns absolute cursor positions into relative motion events.
#[derive(Debug, Default)]
struct CursorTracker {
    last: Option<PhysicalPosition<f64>>,
}

impl CursorTracker {
    /// Motion since the previous position. The first position after the
    /// cursor enters the window only primes the tracker.
    fn moved_to(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        let event = self.last.map(|last| InputEvent::MouseMotion {
            dx: (position.x - last.x) as f32,
            dy: (position.y - last.y) as f32,
        });
        self.last = Some(position);
        event
    }

    fn left(&mut self) {
        self.last = None;
    }
}

struct App {
    state: ViewState,
    view: RenderView,
    pacer: FramePacer,
    timer: FrameTimer,
    cursor: CursorTracker,
    window: Option<Arc<Window>>,
    renderer: Option<WgpuRenderer>,
    last_frame: Option<Instant>,
    init_error: Option<InitError>,
    /// Set once an exit was requested; later events and redraws are dropped.
    exiting: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: ViewState::default(),
            view: RenderView {
                width: WINDOW_WIDTH,
                height: WINDOW_HEIGHT,
                ..RenderView::default()
            },
            pacer: FramePacer::default(),
            timer: FrameTimer::new(100),
            cursor: CursorTracker::default(),
            window: None,
            renderer: None,
            last_frame: None,
            init_error: None,
            exiting: false,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| InitError::Window(e.to_string()))?,
        );

        let size = window.inner_size();
        let context = GpuContext::new(window.clone(), size.width, size.height)?;
        let (width, height) = context.size();
        self.view.width = width;
        self.view.height = height;

        self.renderer = Some(WgpuRenderer::new(context));
        self.window = Some(window);
        Ok(())
    }

    /// Translate a window event into the platform-neutral form.
    fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => Some(InputEvent::KeyDown(map_key(*code))),
            WindowEvent::CursorMoved { position, .. } => self.cursor.moved_to(*position),
            WindowEvent::CursorLeft { .. } => {
                self.cursor.left();
                None
            }
            _ => None,
        }
    }

    /// Apply one translated event. Returns `true` when the loop should exit.
    fn handle_input(&mut self, input: &InputEvent) -> bool {
        if self.exiting {
            return true;
        }
        if apply(Action::from_event(input), &mut self.state) == LoopControl::Exit {
            self.exiting = true;
        }
        self.exiting
    }

    fn redraw(&mut self) {
        if self.exiting {
            return;
        }
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        if let Err(e) = present_frame(renderer, &mut self.state, &self.view) {
            tracing::warn!("surface error: {e}; frame skipped");
        }

        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.timer.record(now - last);
        }
        self.pacer.frame_presented(now);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            tracing::error!("initialization failed: {e}");
            self.init_error = Some(e);
            self.exiting = true;
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exiting {
            return;
        }
        match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                    let (width, height) = renderer.context().size();
                    self.view.width = width;
                    self.view.height = height;
                }
            }
            other => {
                let Some(input) = self.translate(&other) else {
                    return;
                };
                if self.handle_input(&input) {
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            return;
        }
        let now = Instant::now();
        if self.pacer.is_due(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(deadline) = self.pacer.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut app = App::new();
    tracing::info!(
        interval_ms = app.pacer.interval().as_millis() as u64,
        "octasphere-desktop starting"
    );

    let event_loop = EventLoop::new().map_err(|e| InitError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    event_loop.run_app(&mut app)?;
    finish(app)
}

/// Turn the state left behind by the event loop into the process result.
///
/// A stored initialization error becomes the failure returned from `main`.
fn finish(app: App) -> Result<()> {
    if let Some(err) = app.init_error {
        return Err(err.into());
    }

    tracing::info!(
        frames = app.pacer.frames(),
        fps = app.timer.fps(),
        worst_frame_ms = app.timer.max().as_millis() as u64,
        level = %app.state.level(),
        "octasphere-desktop exiting"
    );
    Ok(())
}
