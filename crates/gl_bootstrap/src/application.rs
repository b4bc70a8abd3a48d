//! Application runner
//!
//! Composes the three window stages into one run: bootstrap, bind, loop,
//! teardown. Every failure is logged where it is detected; the caller only
//! gets a [`RunReport`] describing what happened, never an error to act on.

use crate::core::config::SessionConfig;
use crate::error::BootstrapError;
use crate::foundation::logging::LogSink;
use crate::platform::{ContextWindow, WindowSystem};
use crate::window;
use std::io::Write;
use std::path::Path;

/// Session log line written when the window shuts down cleanly
pub const NORMAL_TERMINATION: &str = "Normal termination successful.";

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// First stage failure, if any
    pub failure: Option<BootstrapError>,
    /// Whether the frame loop was entered
    pub loop_entered: bool,
    /// Frames presented by the loop
    pub frames: u64,
}

impl RunReport {
    /// Whether every stage succeeded
    pub const fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Open the session log at `log_path`, then [`run`] against `system`
///
/// If the log cannot be created nothing else happens: the window system is
/// dropped untouched and `None` is returned.
pub fn launch<S, P>(system: S, config: &SessionConfig, log_path: P) -> Option<RunReport>
where
    S: WindowSystem,
    P: AsRef<Path>,
{
    let log_path = log_path.as_ref();
    let mut log = match LogSink::create(log_path) {
        Ok(log) => log,
        Err(e) => {
            log::error!("could not open {}: {e}", log_path.display());
            return None;
        }
    };

    Some(run(system, config, &mut log))
}

/// Run the whole window lifecycle against `system`
///
/// The session log is closed when this returns. A failed context bind closes
/// it early and, unless `config.abort_on_bind_failure` is set, still enters
/// the frame loop, which returns at once because the window is already gone.
pub fn run<S, W>(system: S, config: &SessionConfig, log: &mut LogSink<W>) -> RunReport
where
    S: WindowSystem,
    W: Write,
{
    let mut report = RunReport::default();

    let mut handle = match window::initialize(system, log) {
        Ok(handle) => handle,
        Err(e) => {
            log.close();
            report.failure = Some(e);
            return report;
        }
    };

    match window::bind(&mut handle, log) {
        Ok(()) => {
            let version = handle
                .window()
                .and_then(|window| window.gl_version())
                .unwrap_or_else(|| "unknown".to_string());
            log.info(format!("Success: Initialization successful with GL Version: {version}"));
        }
        Err(e) => {
            log.close();
            report.failure = Some(e);
            if config.abort_on_bind_failure {
                log::warn!("context bind failed, skipping frame loop");
                return report;
            }
            log::warn!("context bind failed, entering frame loop without a window");
        }
    }

    log::info!("Starting main loop.");
    report.loop_entered = true;
    report.frames = window::run(&mut handle).frames;

    handle.teardown();

    log.info(NORMAL_TERMINATION);
    log.close();

    report
}
