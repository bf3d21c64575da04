//! Aerial - Screensaver Launcher
//!
//! This process handles the Windows screensaver command line:
//! - `/c` and bare `.scr` launches open the settings window
//! - `/a` and `/s <n>` show the screensaver surfaces
//! - bare `.exe` launches run in a normal resizable window
//!
//! Architecture:
//! - aerial_core decides what to do (parsing, multi-monitor dispatch)
//! - This binary owns the platform side: monitors, windows, message boxes

#![windows_subsystem = "windows"]

mod notify;
mod screens;
mod settings;
mod surface;

use aerial_core::cache::DiskCache;
use aerial_core::{config, BinaryKind, LaunchAction, Launcher};
use anyhow::{Context, Result};
use screens::WinitScreens;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Aerial starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let binary = BinaryKind::current();

    // Load the display policy
    let config = config::load_config();
    tracing::info!("Persisted multi-monitor mode: {:?}", config.multi_monitor_mode);

    let mut cache = DiskCache::from_platform().unwrap_or_else(|e| {
        tracing::warn!("No platform cache directory ({}), using temp", e);
        DiskCache::new(std::env::temp_dir().join("Aerial"))
    });

    let screens = WinitScreens::new();
    let action = Launcher::new(&screens, config).launch(&args[..], binary, &mut cache)?;

    match action {
        LaunchAction::Configure => {
            settings::run().context("Settings window failed")?;
        }
        LaunchAction::Notify(error) => {
            notify::show_error(&error.to_string());
        }
        LaunchAction::Run(plan) => {
            let event_loop = screens.into_event_loop()?;
            surface::run(event_loop, plan)?;
        }
    }

    tracing::info!("Aerial exiting");
    Ok(())
}
