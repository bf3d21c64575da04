//! Monitor enumeration through winit
//!
//! The event loop is created on first use and handed over to the surfaces
//! afterwards; winit allows only one per process.

use aerial_core::{Rect, ScreenDescriptor, ScreenEnumerator};
use anyhow::{Context, Result};
use once_cell::unsync::OnceCell;
use winit::event_loop::EventLoop;

pub struct WinitScreens {
    event_loop: OnceCell<EventLoop<()>>,
}

impl WinitScreens {
    pub fn new() -> Self {
        Self {
            event_loop: OnceCell::new(),
        }
    }

    fn event_loop(&self) -> Result<&EventLoop<()>> {
        self.event_loop
            .get_or_try_init(|| EventLoop::new().context("Failed to create event loop"))
    }

    /// Take the event loop for hosting surfaces
    pub fn into_event_loop(self) -> Result<EventLoop<()>> {
        match self.event_loop.into_inner() {
            Some(event_loop) => Ok(event_loop),
            None => EventLoop::new().context("Failed to create event loop"),
        }
    }
}

impl ScreenEnumerator for WinitScreens {
    fn screens(&self) -> Result<Vec<ScreenDescriptor>> {
        let event_loop = self.event_loop()?;
        let primary = event_loop.primary_monitor();

        let mut screens: Vec<ScreenDescriptor> = event_loop
            .available_monitors()
            .map(|monitor| {
                let position = monitor.position();
                let size = monitor.size();
                let is_primary = primary.as_ref() == Some(&monitor);
                ScreenDescriptor::new(
                    Rect::new(position.x, position.y, size.width, size.height),
                    is_primary,
                )
            })
            .collect();

        // Some platforms (Wayland) never report a primary monitor
        if !screens.iter().any(|s| s.is_primary) {
            if let Some(first) = screens.first_mut() {
                first.is_primary = true;
            }
        }

        for (index, screen) in screens.iter().enumerate() {
            tracing::debug!("Screen {}: {:?}", index, screen);
        }

        Ok(screens)
    }
}
