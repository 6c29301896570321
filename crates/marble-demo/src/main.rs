//! Draggable-disc demo.
//!
//! Opens a window, builds a [`DiscRenderer`] once the GPU is up, and maps
//! left-button drags to the clip-space offset the disc is drawn at.

use anyhow::Result;
use winit::event::{ElementState, MouseButton, WindowEvent};

use marble_engine::coords::{ColorRgba, Vec2, Viewport};
use marble_engine::core::{App, AppControl, FrameCtx};
use marble_engine::device::GpuInit;
use marble_engine::logging::{init_logging, LoggingConfig};
use marble_engine::render::disc::{DiscConfig, DiscRenderer};
use marble_engine::window::{Runtime, RuntimeConfig};

const CLEAR: ColorRgba = ColorRgba::black();

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("marble demo starting; drag the disc with the left mouse button");

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), BallApp::new())
}

/// A drag in progress: where the pointer grabbed, and the disc offset at
/// that moment.
struct DragState {
    grab_pointer: Vec2,
    grab_offset: Vec2,
}

struct BallApp {
    disc: Option<DiscRenderer>,

    /// Last known pointer position, physical pixels.
    pointer: Vec2,
    drag: Option<DragState>,

    /// Current disc displacement in clip-space units.
    offset: Vec2,
}

impl BallApp {
    fn new() -> Self {
        Self {
            disc: None,
            pointer: Vec2::zero(),
            drag: None,
            offset: Vec2::zero(),
        }
    }
}

impl App for BallApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.drag = match state {
                    ElementState::Pressed => Some(DragState {
                        grab_pointer: self.pointer,
                        grab_offset: self.offset,
                    }),
                    ElementState::Released => None,
                };
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let size = ctx.gpu.size();
        let viewport = Viewport::new(size.width as f32, size.height as f32);

        if let Some(drag) = &self.drag {
            let delta = self.pointer - drag.grab_pointer;
            // Window space is +Y down; clip space is +Y up.
            let clip_delta = Vec2::new(
                delta.x / viewport.width * 2.0,
                -delta.y / viewport.height * 2.0,
            );
            self.offset = drag.grab_offset + clip_delta;
        }

        if self.disc.is_none() {
            if !viewport.is_valid() {
                return AppControl::Continue;
            }

            match DiscRenderer::new(
                ctx.gpu.device(),
                ctx.gpu.surface_format(),
                viewport,
                DiscConfig::default(),
            ) {
                Ok(disc) => {
                    log::info!("disc renderer ready ({}x{})", size.width, size.height);
                    self.disc = Some(disc);
                }
                Err(err) => {
                    log::error!("cannot build disc renderer: {err}");
                    return AppControl::Exit;
                }
            }
        }

        let offset = self.offset;
        let disc = &self.disc;
        ctx.render(CLEAR, |rctx, target| {
            if let Some(disc) = disc {
                disc.draw(rctx, target, offset);
            }
        })
    }
}
