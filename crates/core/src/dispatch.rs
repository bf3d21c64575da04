//! Display mode dispatch
//!
//! Turns the effective multi-monitor mode and one screen snapshot into the
//! ordered list of surfaces to create.

use crate::config::MultiMonitorMode;
use crate::screen::{Rect, ScreenDescriptor};

/// One surface the host should create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRequest {
    /// Area covered by the surface
    pub bounds: Rect,
    /// Surface seeds the content cache
    pub cache_eligible: bool,
    /// Surface plays content (as opposed to a blank cover)
    pub show_content: bool,
}

/// Decide which surfaces to create
///
/// `target` is only used by `SpecificScreenOnly` and selects a screen by its
/// position in `screens`.
pub fn dispatch(
    mode: MultiMonitorMode,
    screens: &[ScreenDescriptor],
    target: usize,
) -> Vec<SurfaceRequest> {
    match mode {
        // Only the renderer tells these two apart
        MultiMonitorMode::SameOnEach | MultiMonitorMode::DifferentVideos => screens
            .iter()
            .map(|screen| SurfaceRequest {
                bounds: screen.bounds,
                cache_eligible: screen.is_primary,
                show_content: true,
            })
            .collect(),

        MultiMonitorMode::SpanAll => Rect::bounding(screens.iter().map(|s| &s.bounds))
            .map(|bounds| SurfaceRequest {
                bounds,
                cache_eligible: true,
                show_content: true,
            })
            .into_iter()
            .collect(),

        MultiMonitorMode::SpecificScreenOnly => screens
            .get(target)
            .map(|screen| SurfaceRequest {
                bounds: screen.bounds,
                cache_eligible: true,
                show_content: true,
            })
            .into_iter()
            .collect(),
    }
}
