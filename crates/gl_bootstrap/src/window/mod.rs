//! Window bring-up, in dependency order
//!
//! [`initialize`] brings up the windowing library and creates the window,
//! [`bind`] makes its GL context current and loads function pointers, and
//! [`run`] drives the frame loop until the window is asked to close. Each
//! stage logs its own failure to the session log before returning it.

mod binder;
mod bootstrap;
mod frame_loop;
mod handle;

pub use binder::bind;
pub use bootstrap::initialize;
pub use frame_loop::{run, FrameStats, LoopState};
pub use handle::{LibrarySession, WindowHandle};

/// Window width in pixels
pub const WINDOW_WIDTH: u32 = 800;

/// Window height in pixels
pub const WINDOW_HEIGHT: u32 = 600;

/// Window title
pub const WINDOW_TITLE: &str = "Hello World!";

/// Session log file, relative to the working directory and truncated at start
pub const LOG_PATH: &str = "log.txt";
