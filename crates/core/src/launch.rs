//! Launch orchestration
//!
//! Binds a parsed command to exactly one action. The orchestrator never
//! creates windows itself; it hands the host a `LaunchAction` describing
//! what to show.

use crate::args::{parse_args, BinaryKind, Command};
use crate::cache::ContentCache;
use crate::config::{MultiMonitorMode, SaverConfig};
use crate::dispatch::{dispatch, SurfaceRequest};
use crate::error::LaunchError;
use crate::screen::{ScreenDescriptor, ScreenEnumerator};
use anyhow::Result;
use tracing::{info, warn};

/// Surfaces to create for a run, plus the flags the renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPlan {
    /// Effective mode, tells the renderer same vs. different videos
    pub mode: MultiMonitorMode,
    /// Decorated, resizable window instead of fullscreen
    pub windowed: bool,
    pub surfaces: Vec<SurfaceRequest>,
}

/// What the host process should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// Show the configuration window and exit when it closes
    Configure,
    /// Create the surfaces and keep the process alive to host them
    Run(DisplayPlan),
    /// Show the message to the user and exit
    Notify(LaunchError),
}

/// Mode actually used for `command`, given the persisted one
///
/// `/a` forces different videos and `/s` always shows a single screen; the
/// persisted config is never modified.
pub fn effective_mode(persisted: MultiMonitorMode, command: &Command) -> MultiMonitorMode {
    match command {
        Command::RunAll {
            force_different_videos: true,
            ..
        } => MultiMonitorMode::DifferentVideos,
        Command::RunSpecificScreen { .. } => MultiMonitorMode::SpecificScreenOnly,
        _ => persisted,
    }
}

pub struct Launcher<E> {
    screens: E,
    config: SaverConfig,
}

impl<E: ScreenEnumerator> Launcher<E> {
    pub fn new(screens: E, config: SaverConfig) -> Self {
        Self { screens, config }
    }

    /// Full launch: cache setup, argument parsing, action selection
    pub fn launch<S: AsRef<str>>(
        &self,
        args: &[S],
        binary: BinaryKind,
        cache: &mut dyn ContentCache,
    ) -> Result<LaunchAction> {
        // Always runs first, whatever the command
        if let Err(e) = cache.setup() {
            warn!("Content cache setup failed: {:#}", e);
        }

        let command = match parse_args(args, binary) {
            Ok(command) => command,
            Err(e) => {
                warn!("Invalid command line: {}", e);
                return Ok(LaunchAction::Notify(e));
            }
        };

        info!("Command: {:?} ({:?})", command, binary);
        self.resolve(&command)
    }

    /// Select the action for an already parsed command
    pub fn resolve(&self, command: &Command) -> Result<LaunchAction> {
        match command {
            Command::Configure => Ok(LaunchAction::Configure),

            Command::Reject { token } => {
                warn!("Rejected command line token {:?}", token);
                Ok(LaunchAction::Notify(LaunchError::UnrecognizedCommand(
                    token.clone(),
                )))
            }

            Command::RunAll { windowed, .. } => {
                let screens = self.screens.screens()?;
                Ok(LaunchAction::Run(self.plan(command, *windowed, &screens, 0)))
            }

            Command::RunSpecificScreen { screen_index } => {
                // Same snapshot for the range check and the selection
                let screens = self.screens.screens()?;
                if *screen_index >= screens.len() {
                    let error = LaunchError::IndexOutOfRange {
                        index: *screen_index,
                        count: screens.len(),
                    };
                    warn!("{}", error);
                    return Ok(LaunchAction::Notify(error));
                }
                Ok(LaunchAction::Run(self.plan(command, false, &screens, *screen_index)))
            }
        }
    }

    fn plan(
        &self,
        command: &Command,
        windowed: bool,
        screens: &[ScreenDescriptor],
        target: usize,
    ) -> DisplayPlan {
        let mode = effective_mode(self.config.multi_monitor_mode, command);
        let surfaces = dispatch(mode, screens, target);

        info!(
            "Mode {:?} on {} screen(s): {} surface(s)",
            mode,
            screens.len(),
            surfaces.len()
        );

        DisplayPlan {
            mode,
            windowed,
            surfaces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Rect;
    use std::cell::Cell;

    struct FakeScreens {
        screens: Vec<ScreenDescriptor>,
        calls: Cell<usize>,
    }

    impl FakeScreens {
        fn new(screens: Vec<ScreenDescriptor>) -> Self {
            Self {
                screens,
                calls: Cell::new(0),
            }
        }

        fn dual() -> Self {
            Self::new(vec![
                ScreenDescriptor::new(Rect::new(0, 0, 1920, 1080), true),
                ScreenDescriptor::new(Rect::new(1920, 0, 1280, 1024), false),
            ])
        }
    }

    impl ScreenEnumerator for FakeScreens {
        fn screens(&self) -> Result<Vec<ScreenDescriptor>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.screens.clone())
        }
    }

    #[derive(Default)]
    struct RecordingCache {
        setups: usize,
        fail: bool,
    }

    impl ContentCache for RecordingCache {
        fn setup(&mut self) -> Result<()> {
            self.setups += 1;
            if self.fail {
                anyhow::bail!("disk full");
            }
            Ok(())
        }
    }

    fn config(mode: MultiMonitorMode) -> SaverConfig {
        SaverConfig {
            multi_monitor_mode: mode,
        }
    }

    fn run_plan(action: LaunchAction) -> DisplayPlan {
        match action {
            LaunchAction::Run(plan) => plan,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_cache_setup_runs_once_for_every_command() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());

        for args in [vec!["/c"], vec!["/x"], vec!["/s"], vec!["/a"], vec!["/s", "1"]] {
            let mut cache = RecordingCache::default();
            launcher
                .launch(&args[..], BinaryKind::Extension, &mut cache)
                .unwrap();
            assert_eq!(cache.setups, 1, "args {:?}", args);
        }
    }

    #[test]
    fn test_cache_failure_does_not_stop_the_run() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache {
            fail: true,
            ..Default::default()
        };

        let action = launcher.launch(&["/a"], BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(run_plan(action).surfaces.len(), 2);
    }

    #[test]
    fn test_configure() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache::default();

        let action = launcher.launch(&["/C:4242"], BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(action, LaunchAction::Configure);
        assert_eq!(screens.calls.get(), 0);
    }

    #[test]
    fn test_all_displays_forces_different_videos() {
        for persisted in MultiMonitorMode::ALL {
            let screens = FakeScreens::dual();
            let launcher = Launcher::new(&screens, config(persisted));
            let mut cache = RecordingCache::default();

            let plan = run_plan(launcher.launch(&["/a"], BinaryKind::Extension, &mut cache).unwrap());
            assert_eq!(plan.mode, MultiMonitorMode::DifferentVideos);
            assert_eq!(plan.surfaces.len(), 2);
            assert!(!plan.windowed);
        }
    }

    #[test]
    fn test_specific_screen_ignores_persisted_mode() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, config(MultiMonitorMode::SpanAll));
        let mut cache = RecordingCache::default();

        let plan = run_plan(launcher.launch(&["/s:1"], BinaryKind::Extension, &mut cache).unwrap());
        assert_eq!(plan.mode, MultiMonitorMode::SpecificScreenOnly);
        assert_eq!(plan.surfaces.len(), 1);
        assert_eq!(plan.surfaces[0].bounds, Rect::new(1920, 0, 1280, 1024));
        assert_eq!(screens.calls.get(), 1);
    }

    #[test]
    fn test_specific_screen_out_of_range() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache::default();

        let action = launcher.launch(&["/s", "2"], BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(
            action,
            LaunchAction::Notify(LaunchError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(screens.calls.get(), 1);
    }

    #[test]
    fn test_missing_parameter_is_notified() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache::default();

        let action = launcher.launch(&["/s"], BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(action, LaunchAction::Notify(LaunchError::MissingParameter));
        assert_eq!(screens.calls.get(), 0);
    }

    #[test]
    fn test_unknown_token_is_notified() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache::default();

        let action = launcher.launch(&["/x"], BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(
            action,
            LaunchAction::Notify(LaunchError::UnrecognizedCommand("/x".to_string()))
        );
    }

    #[test]
    fn test_plain_executable_runs_windowed_with_persisted_mode() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, config(MultiMonitorMode::SpanAll));
        let mut cache = RecordingCache::default();
        let none: [&str; 0] = [];

        let plan = run_plan(launcher.launch(&none, BinaryKind::Executable, &mut cache).unwrap());
        assert!(plan.windowed);
        assert_eq!(plan.mode, MultiMonitorMode::SpanAll);
        assert_eq!(plan.surfaces[0].bounds, Rect::new(0, 0, 3200, 1080));
    }

    #[test]
    fn test_screensaver_extension_without_arguments_configures() {
        let screens = FakeScreens::dual();
        let launcher = Launcher::new(&screens, SaverConfig::default());
        let mut cache = RecordingCache::default();
        let none: [&str; 0] = [];

        let action = launcher.launch(&none, BinaryKind::Extension, &mut cache).unwrap();
        assert_eq!(action, LaunchAction::Configure);
    }

    #[test]
    fn test_effective_mode() {
        let run = Command::RunAll {
            force_different_videos: false,
            windowed: true,
        };
        assert_eq!(effective_mode(MultiMonitorMode::SpanAll, &run), MultiMonitorMode::SpanAll);
        assert_eq!(
            effective_mode(
                MultiMonitorMode::SameOnEach,
                &Command::RunSpecificScreen { screen_index: 0 }
            ),
            MultiMonitorMode::SpecificScreenOnly
        );
    }
}
