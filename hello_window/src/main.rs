//! Hello World window
//!
//! Opens an 800x600 OpenGL window and clears it every frame until closed.
//! Status and errors go to `log.txt`; the exit code is always success.
//! `HELLO_WINDOW_CONFIG` may name a file that tunes diagnostics, never the
//! window or the log location.

use gl_bootstrap::foundation::logging;
use gl_bootstrap::prelude::*;
use std::process::ExitCode;

/// Environment variable naming an optional `.toml` or `.ron` session config
const CONFIG_ENV_VAR: &str = "HELLO_WINDOW_CONFIG";

fn load_config() -> (SessionConfig, Option<ConfigError>) {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => match SessionConfig::load_from_file(&path) {
            Ok(config) => (config, None),
            Err(e) => (SessionConfig::default(), Some(e)),
        },
        None => (SessionConfig::default(), None),
    }
}

fn main() -> ExitCode {
    let (config, config_error) = load_config();

    logging::init(config.log_filter.as_deref());

    if let Some(e) = config_error {
        log::warn!("ignoring {CONFIG_ENV_VAR}, using defaults: {e}");
    }

    let Some(report) = gl_bootstrap::launch(GlfwSystem::new(), &config, LOG_PATH) else {
        return ExitCode::SUCCESS;
    };

    match &report.failure {
        None => log::info!("window closed after {} frames", report.frames),
        Some(e) => log::error!("window bootstrap failed: {e}"),
    }

    ExitCode::SUCCESS
}
