//! Screensaver command line parsing
//!
//! Arguments for any Windows screensaver:
//!
//!   Aerial.scr           - Show the Settings window.
//!   Aerial.scr /c        - Show the Settings window.
//!   Aerial.scr /s        - Run on the screen given as parameter (/s:1 or /s 1).
//!
//! Custom arguments:
//!
//!   Aerial.scr /a        - Run on all displays with different videos.
//!   Aerial.exe           - Run in normal resizable window mode.

use crate::error::LaunchError;
use std::path::Path;

/// Which form of the binary was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKind {
    /// Plain `.exe`, runs windowed when started without arguments
    Executable,
    /// Registered `.scr`, opens the settings when started without arguments
    Extension,
}

impl BinaryKind {
    /// Classify a binary by its file name
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        if name.ends_with("exe") {
            BinaryKind::Executable
        } else {
            BinaryKind::Extension
        }
    }

    /// Classify the running process
    pub fn current() -> Self {
        std::env::current_exe()
            .map(|path| BinaryKind::from_path(&path))
            .unwrap_or(BinaryKind::Extension)
    }
}

/// Parsed launch command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the configuration window
    Configure,
    /// Run on every screen according to the display policy
    RunAll {
        /// `/a` forces different videos on each screen
        force_different_videos: bool,
        /// Decorated, resizable window instead of fullscreen
        windowed: bool,
    },
    /// Run only on the screen at this enumeration index
    RunSpecificScreen { screen_index: usize },
    /// Unknown command token, shown back to the user
    Reject { token: String },
}

/// Parse the process arguments (without the program name)
pub fn parse_args<S: AsRef<str>>(args: &[S], binary: BinaryKind) -> Result<Command, LaunchError> {
    let Some(first) = args.first() else {
        return Ok(match binary {
            BinaryKind::Executable => Command::RunAll {
                force_different_videos: false,
                windowed: true,
            },
            BinaryKind::Extension => Command::Configure,
        });
    };

    let first = first.as_ref().trim().to_lowercase();

    // Colon separated parameter, e.g. /s:1 or /c:1234567
    let (token, parameter) = if first.chars().count() > 2 {
        let token: String = first.chars().take(2).collect();
        let attached: String = first.chars().skip(3).collect();
        (token, Some(attached))
    } else {
        (first, args.get(1).map(|arg| arg.as_ref().to_string()))
    };

    let parameter = parameter
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    match token.as_str() {
        "/c" => Ok(Command::Configure),
        "/a" => Ok(Command::RunAll {
            force_different_videos: true,
            windowed: false,
        }),
        "/s" => {
            let parameter = parameter.ok_or(LaunchError::MissingParameter)?;
            let screen_index = parameter
                .parse::<usize>()
                .map_err(|_| LaunchError::InvalidParameter(parameter.clone()))?;
            Ok(Command::RunSpecificScreen { screen_index })
        }
        _ => Ok(Command::Reject { token }),
    }
}
