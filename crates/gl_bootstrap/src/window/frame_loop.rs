//! Frame loop driver

use super::handle::WindowHandle;
use crate::platform::{ContextWindow, WindowSystem};

/// Loop state, re-evaluated at the top of every iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Keep presenting frames
    Running,
    /// The close flag is set, or there is no window left to draw into
    CloseRequested,
}

impl LoopState {
    /// Read the state off the handle
    pub fn observe<S: WindowSystem>(handle: &WindowHandle<S>) -> Self {
        match handle.window() {
            Some(window) if !window.should_close() => Self::Running,
            _ => Self::CloseRequested,
        }
    }
}

/// Counters for one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames cleared and presented
    pub frames: u64,
}

/// Clear, present and poll until the window is asked to close
///
/// A close request raised while polling is seen at the top of the next
/// iteration, so no frame is presented after it. A torn-down handle ends the
/// loop before the first frame.
pub fn run<S: WindowSystem>(handle: &mut WindowHandle<S>) -> FrameStats {
    let mut stats = FrameStats::default();

    while LoopState::observe(&*handle) == LoopState::Running {
        if let Some(window) = handle.window_mut() {
            window.clear_color_buffer();
            window.swap_buffers();
            stats.frames += 1;
        }

        handle.poll_events();
    }

    log::debug!("frame loop finished after {} frames", stats.frames);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::logging::{LogSink, MemoryLog};
    use crate::platform::{Call, Script, ScriptedSystem};
    use crate::window::{bind, initialize};

    fn bound(script: Script) -> (WindowHandle<ScriptedSystem>, crate::platform::CallRecord) {
        let system = ScriptedSystem::new(script);
        let record = system.record();
        let mut log = LogSink::new(MemoryLog::new());
        let mut handle = initialize(system, &mut log).unwrap();
        bind(&mut handle, &mut log).unwrap();
        (handle, record)
    }

    #[test]
    fn test_close_on_first_poll_presents_one_frame() {
        let (mut handle, record) = bound(Script::default().closing_on_poll(1));

        let stats = run(&mut handle);

        assert_eq!(stats.frames, 1);
        assert_eq!(record.count(&Call::Clear), 1);
        assert_eq!(record.count(&Call::SwapBuffers), 1);
        assert_eq!(record.count(&Call::PollEvents), 1);
    }

    #[test]
    fn test_iteration_order_is_clear_swap_poll() {
        let (mut handle, record) = bound(Script::default().closing_on_poll(3));

        let stats = run(&mut handle);
        assert_eq!(stats.frames, 3);

        let frame_calls: Vec<Call> = record
            .calls()
            .into_iter()
            .skip_while(|c| *c != Call::Clear)
            .collect();
        let one_frame = [Call::Clear, Call::SwapBuffers, Call::PollEvents];
        let expected: Vec<Call> = (0..3).flat_map(|_| one_frame.clone()).collect();
        assert_eq!(frame_calls, expected);
    }

    #[test]
    fn test_no_swap_after_close_request() {
        let (mut handle, record) = bound(Script::default().closing_on_poll(5));

        run(&mut handle);

        let calls = record.calls();
        let last_poll = calls.iter().rposition(|c| *c == Call::PollEvents).unwrap();
        let last_swap = calls.iter().rposition(|c| *c == Call::SwapBuffers).unwrap();
        assert!(last_swap < last_poll);
        assert_eq!(last_poll, calls.len() - 1);
    }

    #[test]
    fn test_torn_down_handle_runs_no_frames() {
        let (mut handle, record) = bound(Script::default());
        handle.teardown();

        assert_eq!(LoopState::observe(&handle), LoopState::CloseRequested);
        assert_eq!(run(&mut handle), FrameStats::default());
        assert_eq!(record.count(&Call::SwapBuffers), 0);
    }

    #[test]
    fn test_loop_does_not_terminate_library() {
        let (mut handle, record) = bound(Script::default());
        run(&mut handle);
        assert_eq!(record.count(&Call::Terminate), 0);
        assert!(handle.is_live());
    }
}
