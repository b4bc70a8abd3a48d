//! # GL Bootstrap
//!
//! Opens one window with an OpenGL context and runs an empty render loop
//! that clears the screen every frame, writing status and errors to a plain
//! text session log.
//!
//! ## Stages
//!
//! - **Bootstrap**: initialize the windowing library and create the window
//! - **Bind**: make the window's context current and load GL entry points
//! - **Loop**: clear, swap and poll until the window is asked to close
//!
//! Each stage short-circuits the ones after it, logs its own failure and
//! returns a typed [`BootstrapError`]. The windowing library is owned by a
//! [`window::LibrarySession`] token, so it is terminated exactly once however
//! the run ends.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::prelude::*;
//!
//! let config = SessionConfig::default();
//! if let Some(report) = gl_bootstrap::launch(GlfwSystem::new(), &config, LOG_PATH) {
//!     println!("presented {} frames", report.frames);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod foundation;
pub mod platform;
pub mod window;

mod application;
mod error;

#[cfg(test)]
mod tests;

pub use application::{launch, run, RunReport, NORMAL_TERMINATION};
pub use error::{BootstrapError, PlatformError};

/// Common imports
pub mod prelude {
    pub use crate::{
        application::{launch, run, RunReport},
        core::config::{Config, ConfigError, SessionConfig},
        error::{BootstrapError, PlatformError},
        foundation::logging::{LogSink, MemoryLog},
        platform::{ContextWindow, GlfwSystem, WindowSystem},
        window::{WindowHandle, LOG_PATH, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
    };
}
