//! Window handle and windowing library session
//!
//! The windowing library is process-wide state: initialized once, terminated
//! once. [`LibrarySession`] is the token for that state, and terminating it
//! (explicitly or by dropping it) releases the library exactly once.
//! [`WindowHandle`] owns the one window together with the session that keeps
//! it alive, and stops handing the window out after teardown.

use crate::error::PlatformError;
use crate::platform::WindowSystem;

/// Scoped ownership of the initialized windowing library
pub struct LibrarySession<S: WindowSystem> {
    system: S,
    active: bool,
}

impl<S: WindowSystem> LibrarySession<S> {
    /// Initialize the library
    ///
    /// On failure the system is dropped without a terminate call, since there
    /// is nothing to release.
    pub fn open(mut system: S) -> Result<Self, PlatformError> {
        system.init()?;
        log::debug!("windowing library initialized");
        Ok(Self {
            system,
            active: true,
        })
    }

    /// Whether the library is still initialized
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Access the live system, `None` once terminated
    pub fn system_mut(&mut self) -> Option<&mut S> {
        self.active.then_some(&mut self.system)
    }

    /// Terminate the library; later calls do nothing
    pub fn terminate(&mut self) {
        if self.active {
            self.active = false;
            self.system.terminate();
            log::debug!("windowing library terminated");
        }
    }
}

impl<S: WindowSystem> Drop for LibrarySession<S> {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// The single application window and its graphics context
pub struct WindowHandle<S: WindowSystem> {
    // Field order matters: the window is dropped before the session
    window: Option<S::Window>,
    session: LibrarySession<S>,
}

impl<S: WindowSystem> WindowHandle<S> {
    pub(crate) fn new(session: LibrarySession<S>, window: S::Window) -> Self {
        Self {
            window: Some(window),
            session,
        }
    }

    /// The window, unless the handle was torn down
    pub const fn window(&self) -> Option<&S::Window> {
        self.window.as_ref()
    }

    /// Mutable window access, unless the handle was torn down
    pub fn window_mut(&mut self) -> Option<&mut S::Window> {
        self.window.as_mut()
    }

    /// Whether the window and library are still alive
    pub const fn is_live(&self) -> bool {
        self.window.is_some() && self.session.is_active()
    }

    /// Process pending platform events
    pub fn poll_events(&mut self) {
        if let Some(system) = self.session.system_mut() {
            system.poll_events();
        }
    }

    /// Destroy the window and terminate the library
    ///
    /// Idempotent: the library is terminated at most once per handle.
    pub fn teardown(&mut self) {
        self.window = None;
        self.session.terminate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Call, ContextWindow, Script, ScriptedSystem};

    fn open_handle(script: Script) -> (WindowHandle<ScriptedSystem>, crate::platform::CallRecord) {
        let system = ScriptedSystem::new(script);
        let record = system.record();
        let mut session = LibrarySession::open(system).unwrap();
        let window = session
            .system_mut()
            .unwrap()
            .create_window(800, 600, "handle test")
            .unwrap();
        (WindowHandle::new(session, window), record)
    }

    #[test]
    fn test_failed_open_does_not_terminate() {
        let system = ScriptedSystem::new(Script::failing_init());
        let record = system.record();

        assert!(LibrarySession::open(system).is_err());
        assert_eq!(record.calls(), vec![Call::Init]);
    }

    #[test]
    fn test_session_terminates_once_on_drop() {
        let system = ScriptedSystem::new(Script::default());
        let record = system.record();

        let mut session = LibrarySession::open(system).unwrap();
        session.terminate();
        assert!(!session.is_active());
        assert!(session.system_mut().is_none());
        drop(session);

        assert_eq!(record.count(&Call::Terminate), 1);
    }

    #[test]
    fn test_teardown_hides_window_and_is_idempotent() {
        let (mut handle, record) = open_handle(Script::default());
        assert!(handle.is_live());
        assert!(handle.window().is_some());

        handle.teardown();
        handle.teardown();

        assert!(!handle.is_live());
        assert!(handle.window_mut().is_none());
        drop(handle);
        assert_eq!(record.count(&Call::Terminate), 1);
    }

    #[test]
    fn test_dropping_live_handle_terminates_library() {
        let (handle, record) = open_handle(Script::default());
        drop(handle);
        assert_eq!(record.count(&Call::Terminate), 1);
    }

    #[test]
    fn test_polling_after_teardown_reaches_nothing() {
        let (mut handle, record) = open_handle(Script::default());

        handle.poll_events();
        handle.teardown();
        handle.poll_events();

        assert_eq!(record.count(&Call::PollEvents), 1);
    }

    #[test]
    fn test_window_sees_close_flag_from_poll() {
        let (mut handle, _record) = open_handle(Script::default().closing_on_poll(1));
        assert!(!handle.window().unwrap().should_close());

        handle.poll_events();
        assert!(handle.window().unwrap().should_close());
    }
}
