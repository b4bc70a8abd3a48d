//! Window system backends
//!
//! The bootstrap sequence only needs a handful of operations from the outside
//! world: initialize the windowing library, create a window, make its context
//! current, load GL entry points, clear, swap, poll, query the close flag and
//! terminate. These traits capture exactly that surface so the sequence can
//! run against GLFW or against a scripted backend with no display.
//!
//! Both backends are public. [`GlfwSystem`] is the one the binary uses;
//! [`ScriptedSystem`] is the headless one for CI and downstream tests.
//!
//! # Thread Safety
//! Neither trait requires `Send`. GLFW must be driven from the main thread,
//! and the whole sequence runs on one thread anyway.

mod glfw_backend;
pub mod scripted;

pub use glfw_backend::{GlfwSystem, GlfwWindow};
pub use scripted::{Call, CallRecord, Script, ScriptedSystem, ScriptedWindow};

use crate::error::PlatformError;

/// Process-wide windowing/input library
pub trait WindowSystem {
    /// Window type produced by this backend
    type Window: ContextWindow;

    /// Initialize the library state
    ///
    /// Must succeed before any other call, and must not be repeated while the
    /// library is active.
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Create one windowed-mode window with its own GL context
    ///
    /// `None` means the platform refused the window.
    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<Self::Window>;

    /// Process pending events without waiting
    ///
    /// This is where close requests from the user land.
    fn poll_events(&mut self);

    /// Release the library state
    ///
    /// Any windows still alive are destroyed with it.
    fn terminate(&mut self);
}

/// A window together with its graphics context
pub trait ContextWindow {
    /// Make this window's context current on the calling thread
    fn make_current(&mut self);

    /// Resolve GL function pointers for the current context
    ///
    /// Only valid after [`make_current`](Self::make_current).
    fn load_gl(&mut self) -> Result<(), PlatformError>;

    /// `GL_VERSION` of the current context, if it can be queried
    fn gl_version(&self) -> Option<String>;

    /// Clear the color buffer
    fn clear_color_buffer(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Whether the user (or the application) asked the window to close
    fn should_close(&self) -> bool;
}
