//! Windowing subsystem bootstrap

use super::handle::{LibrarySession, WindowHandle};
use super::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::BootstrapError;
use crate::foundation::logging::LogSink;
use crate::platform::WindowSystem;
use std::io::Write;

/// Initialize the windowing library and create the application window
///
/// If the library fails to initialize no window is attempted. If the window
/// cannot be created the library is terminated before the failure is logged.
/// On success the returned handle keeps the library alive.
pub fn initialize<S, W>(system: S, log: &mut LogSink<W>) -> Result<WindowHandle<S>, BootstrapError>
where
    S: WindowSystem,
    W: Write,
{
    let mut session = match LibrarySession::open(system) {
        Ok(session) => session,
        Err(e) => {
            log::debug!("{e}");
            let err = BootstrapError::WindowingInit;
            log.error(err.log_line());
            return Err(err);
        }
    };

    let window = session
        .system_mut()
        .and_then(|system| system.create_window(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE));

    let Some(window) = window else {
        session.terminate();
        let err = BootstrapError::WindowCreation;
        log.error(err.log_line());
        return Err(err);
    };

    log::debug!("created {WINDOW_WIDTH}x{WINDOW_HEIGHT} window \"{WINDOW_TITLE}\"");
    Ok(WindowHandle::new(session, window))
}
