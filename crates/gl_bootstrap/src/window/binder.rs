//! Graphics context binder

use super::handle::WindowHandle;
use crate::error::BootstrapError;
use crate::foundation::logging::LogSink;
use crate::platform::{ContextWindow, WindowSystem};
use std::io::Write;

/// Make the window's context current and load GL entry points for it
///
/// On loader failure the handle is torn down (the context is unusable) and
/// the loader's message is logged.
pub fn bind<S, W>(handle: &mut WindowHandle<S>, log: &mut LogSink<W>) -> Result<(), BootstrapError>
where
    S: WindowSystem,
    W: Write,
{
    let loaded = match handle.window_mut() {
        Some(window) => {
            window.make_current();
            window.load_gl().map_err(|e| e.to_string())
        }
        None => Err("no window to bind".to_string()),
    };

    if let Err(message) = loaded {
        handle.teardown();
        let err = BootstrapError::ContextBind(message);
        log.error(err.log_line());
        return Err(err);
    }

    log::debug!("GL context current and loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::logging::MemoryLog;
    use crate::platform::{Call, Script, ScriptedSystem};
    use crate::window::initialize;

    fn bootstrapped(script: Script) -> (WindowHandle<ScriptedSystem>, crate::platform::CallRecord) {
        let system = ScriptedSystem::new(script);
        let record = system.record();
        let handle = initialize(system, &mut LogSink::new(MemoryLog::new())).unwrap();
        (handle, record)
    }

    #[test]
    fn test_context_made_current_before_loading() {
        let (mut handle, record) = bootstrapped(Script::default());
        let mut log = LogSink::new(MemoryLog::new());

        bind(&mut handle, &mut log).unwrap();

        let current = record.position(&Call::MakeCurrent).unwrap();
        let load = record.position(&Call::LoadGl).unwrap();
        assert!(current < load);
        assert!(handle.is_live());
    }

    #[test]
    fn test_loader_failure_tears_down_and_logs_message() {
        let (mut handle, record) = bootstrapped(Script::failing_loader("Missing GL version"));
        let memory = MemoryLog::new();
        let mut log = LogSink::new(memory.clone());

        let result = bind(&mut handle, &mut log);

        assert_eq!(
            result,
            Err(BootstrapError::ContextBind("Missing GL version".to_string()))
        );
        assert!(!handle.is_live());
        assert_eq!(record.count(&Call::Terminate), 1);
        assert_eq!(memory.lines(), vec!["Error: Missing GL version"]);
    }

    #[test]
    fn test_binding_torn_down_handle_fails_without_second_terminate() {
        let (mut handle, record) = bootstrapped(Script::default());
        handle.teardown();
        let mut log = LogSink::new(MemoryLog::new());

        assert!(bind(&mut handle, &mut log).is_err());
        assert_eq!(record.count(&Call::Terminate), 1);
        assert_eq!(record.count(&Call::MakeCurrent), 0);
    }
}
