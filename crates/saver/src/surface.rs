//! Screensaver surfaces
//!
//! One winit window per `SurfaceRequest`, cleared through softbuffer. Video
//! playback is the renderer's job; a surface here only covers its area and
//! ends the process on user input.

use aerial_core::{DisplayPlan, MultiMonitorMode, SurfaceRequest};
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder, WindowLevel};

/// Cursor travel (pixels) that counts as user activity
const MOUSE_MOVE_THRESHOLD: f64 = 10.0;

struct Surface {
    window: Rc<Window>,
    buffer: softbuffer::Surface<Rc<Window>, Rc<Window>>,
}

impl Surface {
    fn new(
        target: &EventLoopWindowTarget<()>,
        request: &SurfaceRequest,
        windowed: bool,
    ) -> Result<Self> {
        let bounds = request.bounds;
        let mut builder = WindowBuilder::new()
            .with_title("Aerial")
            .with_position(PhysicalPosition::new(bounds.x, bounds.y))
            .with_inner_size(PhysicalSize::new(bounds.width.max(1), bounds.height.max(1)));

        if !windowed {
            builder = builder
                .with_decorations(false)
                .with_resizable(false)
                .with_window_level(WindowLevel::AlwaysOnTop);
        }

        let window = Rc::new(builder.build(target).context("Failed to create surface window")?);
        if !windowed {
            window.set_cursor_visible(false);
        }

        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("Failed to create softbuffer context: {}", e))?;
        let buffer = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("Failed to create softbuffer surface: {}", e))?;

        Ok(Self { window, buffer })
    }

    /// Paint the whole surface black
    fn clear(&mut self) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.buffer
            .resize(width, height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let mut frame = self
            .buffer
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to map surface buffer: {}", e))?;
        frame.fill(0);
        frame
            .present()
            .map_err(|e| anyhow!("Failed to present surface: {}", e))?;

        Ok(())
    }
}

/// Create every surface in `plan` and run the event loop until user input
pub fn run(event_loop: EventLoop<()>, plan: DisplayPlan) -> Result<()> {
    if plan.surfaces.is_empty() {
        tracing::warn!("No surfaces to show");
        return Ok(());
    }

    let different_videos = plan.mode == MultiMonitorMode::DifferentVideos;
    let windowed = plan.windowed;

    let mut surfaces = Vec::with_capacity(plan.surfaces.len());
    for request in &plan.surfaces {
        tracing::info!(
            "Surface at {:?} (cache: {}, content: {}, different videos: {})",
            request.bounds,
            request.cache_eligible,
            request.show_content,
            different_videos
        );
        surfaces.push(Surface::new(&event_loop, request, windowed)?);
    }

    // First cursor position seen per window
    let mut cursor_origin = HashMap::new();

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { window_id, event } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => target.exit(),

                WindowEvent::Resized(_) => {
                    if let Some(surface) = surfaces.iter().find(|s| s.window.id() == window_id) {
                        surface.window.request_redraw();
                    }
                }

                WindowEvent::RedrawRequested => {
                    if let Some(surface) = surfaces.iter_mut().find(|s| s.window.id() == window_id) {
                        if let Err(e) = surface.clear() {
                            tracing::error!("Failed to draw surface: {:#}", e);
                        }
                    }
                }

                WindowEvent::KeyboardInput { event, .. }
                    if !windowed && event.state == ElementState::Pressed =>
                {
                    tracing::info!("Key pressed, exiting");
                    target.exit();
                }

                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    ..
                } if !windowed => {
                    tracing::info!("Mouse button pressed, exiting");
                    target.exit();
                }

                WindowEvent::CursorMoved { position, .. } if !windowed => {
                    let origin = *cursor_origin.entry(window_id).or_insert(position);
                    let moved = (position.x - origin.x).abs() > MOUSE_MOVE_THRESHOLD
                        || (position.y - origin.y).abs() > MOUSE_MOVE_THRESHOLD;
                    if moved {
                        tracing::info!("Mouse moved, exiting");
                        target.exit();
                    }
                }

                _ => {}
            }
        })
        .context("Event loop failed")?;

    Ok(())
}
