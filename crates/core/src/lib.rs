//! Aerial Core Library
//!
//! Launch logic shared by the screensaver binary
//!
//! Architecture:
//! - args parses the OS screensaver command line into a `Command`
//! - launch binds the command to an action (configure, run, notify)
//! - dispatch decides which surfaces each multi-monitor mode needs
//! - config persists the display policy, cache owns the one-shot setup
//! - resolver serves bundled dependencies by name

pub mod args;
pub mod cache;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod launch;
pub mod resolver;
pub mod screen;

pub use crate::args::{parse_args, BinaryKind, Command};
pub use crate::config::{MultiMonitorMode, SaverConfig};
pub use crate::dispatch::{dispatch, SurfaceRequest};
pub use crate::error::LaunchError;
pub use crate::launch::{DisplayPlan, LaunchAction, Launcher};
pub use crate::screen::{Rect, ScreenDescriptor, ScreenEnumerator};
