//! Error types for the window bootstrap sequence

use thiserror::Error;

/// Failure of one bootstrap stage
///
/// The `Display` text is exactly what follows `Error: ` in the session log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The windowing library could not be initialized
    #[error("could not initialize GLFW.")]
    WindowingInit,

    /// The library came up but refused to create the window
    #[error("could not create GLFW window.")]
    WindowCreation,

    /// The GL function loader failed for the window's context
    #[error("{0}")]
    ContextBind(String),
}

impl BootstrapError {
    /// Full line as written to the session log
    pub fn log_line(&self) -> String {
        format!("Error: {self}")
    }
}

/// Errors reported by a window system backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Library initialization was refused by the platform
    #[error("windowing library initialization failed: {0}")]
    Init(String),

    /// Function pointers could not be resolved for the current context
    #[error("{0}")]
    Loader(String),
}
