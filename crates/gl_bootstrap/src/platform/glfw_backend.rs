//! Window management using GLFW
//!
//! Provides the real window system: GLFW for windows and events, the `gl`
//! crate as the OpenGL function loader.
#![allow(unsafe_code)]

use super::{ContextWindow, WindowSystem};
use crate::error::PlatformError;
use glfw::Context;
use std::ffi::CStr;

/// Loader message when no usable context could be queried, as GLEW words it
const MISSING_GL_VERSION: &str = "Missing GL version";

fn report_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

/// GLFW library session
///
/// glfw-rs terminates the library when the last `Glfw` handle is dropped, and
/// every window holds one. Terminating here drops ours; the owning window
/// handle drops its window first so the library really goes away.
#[derive(Default)]
pub struct GlfwSystem {
    glfw: Option<glfw::Glfw>,
}

impl GlfwSystem {
    /// Create a system whose library is not yet initialized
    pub const fn new() -> Self {
        Self { glfw: None }
    }

    /// Whether `init` has succeeded and `terminate` has not run since
    pub const fn is_initialized(&self) -> bool {
        self.glfw.is_some()
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn init(&mut self) -> Result<(), PlatformError> {
        let glfw = glfw::init(report_glfw_error)
            .map_err(|e| PlatformError::Init(format!("{e:?}")))?;
        self.glfw = Some(glfw);
        Ok(())
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<GlfwWindow> {
        let glfw = self.glfw.as_mut()?;

        let (window, events) =
            glfw.create_window(width, height, title, glfw::WindowMode::Windowed)?;

        Some(GlfwWindow {
            window,
            _events: events,
        })
    }

    fn poll_events(&mut self) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }
    }

    fn terminate(&mut self) {
        if self.glfw.take().is_some() {
            log::debug!("GLFW session released");
        }
    }
}

/// GLFW window with an OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    // No event polling is enabled; kept so the channel lives as long as the window
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl ContextWindow for GlfwWindow {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn load_gl(&mut self) -> Result<(), PlatformError> {
        let window = &mut self.window;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        for (name, loaded) in [
            ("glGetString", gl::GetString::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ] {
            if !loaded {
                return Err(PlatformError::Loader(format!("{name} could not be loaded")));
            }
        }

        if self.gl_version().is_none() {
            return Err(PlatformError::Loader(MISSING_GL_VERSION.to_string()));
        }

        Ok(())
    }

    fn gl_version(&self) -> Option<String> {
        if !gl::GetString::is_loaded() {
            return None;
        }

        // SAFETY: the entry point is loaded and the string is owned by the driver
        unsafe {
            let version = gl::GetString(gl::VERSION);
            if version.is_null() {
                None
            } else {
                Some(CStr::from_ptr(version.cast()).to_string_lossy().into_owned())
            }
        }
    }

    fn clear_color_buffer(&mut self) {
        // SAFETY: only reachable after `load_gl` succeeded for this context
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }
}
