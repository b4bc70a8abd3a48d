//! Scripted window system
//!
//! A display-free backend whose behavior is fixed up front by a [`Script`].
//! Each external call is appended to a shared [`CallRecord`], so a caller can
//! check afterwards which operations ran and in what order.
//!
//! This is a supported public backend, not a test-only double: it runs the
//! full bootstrap sequence on machines without a display or GPU, such as CI
//! runners, and lets downstream crates test code built on [`crate::run`].
//!
//! ```
//! use gl_bootstrap::foundation::logging::{LogSink, MemoryLog};
//! use gl_bootstrap::platform::{Call, Script, ScriptedSystem};
//! use gl_bootstrap::prelude::SessionConfig;
//!
//! let system = ScriptedSystem::new(Script::default().closing_on_poll(2));
//! let record = system.record();
//! let memory = MemoryLog::new();
//! let mut log = LogSink::new(memory.clone());
//!
//! let report = gl_bootstrap::run(system, &SessionConfig::default(), &mut log);
//!
//! assert!(report.succeeded());
//! assert_eq!(record.count(&Call::SwapBuffers), 2);
//! assert_eq!(memory.lines().last().unwrap(), gl_bootstrap::NORMAL_TERMINATION);
//! ```

use super::{ContextWindow, WindowSystem};
use crate::error::PlatformError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// How the scripted platform behaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Library initialization fails
    pub fail_init: bool,
    /// Window creation returns nothing
    pub fail_window: bool,
    /// Loader failure message, if loading should fail
    pub loader_error: Option<String>,
    /// Version string reported once GL is loaded
    pub gl_version: String,
    /// 1-based poll on which the close flag gets raised; `None` never closes
    pub close_on_poll: Option<u32>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            fail_init: false,
            fail_window: false,
            loader_error: None,
            gl_version: "3.3.0 Scripted".to_string(),
            close_on_poll: Some(1),
        }
    }
}

impl Script {
    /// Library initialization fails
    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    /// Window creation fails
    pub fn failing_window() -> Self {
        Self {
            fail_window: true,
            ..Self::default()
        }
    }

    /// Loading GL fails with `message`
    pub fn failing_loader(message: impl Into<String>) -> Self {
        Self {
            loader_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Raise the close flag on the given poll
    pub fn closing_on_poll(mut self, poll: u32) -> Self {
        self.close_on_poll = Some(poll);
        self
    }
}

/// One operation seen by the scripted platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Library initialization attempted
    Init,
    /// Window creation attempted
    CreateWindow {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
    },
    /// Context made current
    MakeCurrent,
    /// GL loading attempted
    LoadGl,
    /// Color buffer cleared
    Clear,
    /// Buffers swapped
    SwapBuffers,
    /// Events polled
    PollEvents,
    /// Library terminated
    Terminate,
}

/// Shared, ordered log of [`Call`]s
#[derive(Debug, Clone, Default)]
pub struct CallRecord {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl CallRecord {
    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    /// Every call so far, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// How many times `call` was seen
    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    /// Whether any window creation was attempted
    pub fn created_window(&self) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| matches!(c, Call::CreateWindow { .. }))
    }

    /// Position of the first occurrence of `call`
    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.borrow().iter().position(|c| c == call)
    }
}

/// Scripted windowing library
#[derive(Debug)]
pub struct ScriptedSystem {
    script: Script,
    record: CallRecord,
    close_requested: Rc<Cell<bool>>,
    polls: u32,
}

impl ScriptedSystem {
    /// Create a system following `script`
    pub fn new(script: Script) -> Self {
        Self {
            script,
            record: CallRecord::default(),
            close_requested: Rc::new(Cell::new(false)),
            polls: 0,
        }
    }

    /// Handle on the call log, valid after the system is moved away
    pub fn record(&self) -> CallRecord {
        self.record.clone()
    }
}

impl WindowSystem for ScriptedSystem {
    type Window = ScriptedWindow;

    fn init(&mut self) -> Result<(), PlatformError> {
        self.record.push(Call::Init);
        if self.script.fail_init {
            Err(PlatformError::Init("scripted init failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<ScriptedWindow> {
        self.record.push(Call::CreateWindow {
            width,
            height,
            title: title.to_string(),
        });

        if self.script.fail_window {
            return None;
        }

        Some(ScriptedWindow {
            record: self.record.clone(),
            close_requested: Rc::clone(&self.close_requested),
            loader_error: self.script.loader_error.clone(),
            gl_version: self.script.gl_version.clone(),
            current: false,
            loaded: false,
        })
    }

    fn poll_events(&mut self) {
        self.record.push(Call::PollEvents);
        self.polls += 1;
        if self.script.close_on_poll == Some(self.polls) {
            self.close_requested.set(true);
        }
    }

    fn terminate(&mut self) {
        self.record.push(Call::Terminate);
    }
}

/// Scripted window and context
#[derive(Debug)]
pub struct ScriptedWindow {
    record: CallRecord,
    close_requested: Rc<Cell<bool>>,
    loader_error: Option<String>,
    gl_version: String,
    current: bool,
    loaded: bool,
}

impl ContextWindow for ScriptedWindow {
    fn make_current(&mut self) {
        self.record.push(Call::MakeCurrent);
        self.current = true;
    }

    fn load_gl(&mut self) -> Result<(), PlatformError> {
        self.record.push(Call::LoadGl);

        if !self.current {
            return Err(PlatformError::Loader("no current context".to_string()));
        }
        if let Some(message) = &self.loader_error {
            return Err(PlatformError::Loader(message.clone()));
        }

        self.loaded = true;
        Ok(())
    }

    fn gl_version(&self) -> Option<String> {
        self.loaded.then(|| self.gl_version.clone())
    }

    fn clear_color_buffer(&mut self) {
        self.record.push(Call::Clear);
    }

    fn swap_buffers(&mut self) {
        self.record.push(Call::SwapBuffers);
    }

    fn should_close(&self) -> bool {
        self.close_requested.get()
    }
}
