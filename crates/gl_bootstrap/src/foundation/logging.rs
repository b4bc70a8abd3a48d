//! Logging utilities: the diagnostic logger and the plain-text session log

use std::cell::RefCell;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Initialize the diagnostic logger
///
/// `filter` follows the `env_logger` filter syntax. Without one, `RUST_LOG`
/// is honoured and the level otherwise defaults to `info`. Repeated calls are
/// ignored.
pub fn init(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Info);
    }

    if builder.try_init().is_ok() {
        log::debug!("diagnostic logging initialized");
    }
}

/// Append-only session log
///
/// One newline-terminated line per entry, flushed immediately. Once closed,
/// or after the first failed write, further lines are discarded. Every line
/// is mirrored to the diagnostic logger as well.
pub struct LogSink<W: Write> {
    writer: Option<W>,
}

impl LogSink<BufWriter<File>> {
    /// Create (truncating) the log file at `path`
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LogSink<W> {
    /// Wrap an already-open destination
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Record a status line
    pub fn info(&mut self, line: impl Display) {
        log::info!("{line}");
        self.write_line(&line);
    }

    /// Record a failure line
    pub fn error(&mut self, line: impl Display) {
        log::error!("{line}");
        self.write_line(&line);
    }

    /// Whether lines still reach the destination
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Flush and release the destination
    ///
    /// Closing twice is a no-op.
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                log::warn!("final flush of session log failed: {e}");
            }
        }
    }

    fn write_line(&mut self, line: &dyn Display) {
        let failed = match self.writer.as_mut() {
            Some(writer) => writeln!(writer, "{line}")
                .and_then(|()| writer.flush())
                .is_err(),
            None => false,
        };

        if failed {
            log::warn!("session log write failed, disabling further log lines");
            self.writer = None;
        }
    }
}

/// In-memory log destination
///
/// Clones share one buffer, so a copy handed to a [`LogSink`] can be read
/// back afterwards. Used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl MemoryLog {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Written lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for MemoryLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let memory = MemoryLog::new();
        let mut sink = LogSink::new(memory.clone());

        sink.error("Error: could not initialize GLFW.");
        sink.info("Normal termination successful.");

        assert_eq!(
            memory.contents(),
            "Error: could not initialize GLFW.\nNormal termination successful.\n"
        );
    }

    #[test]
    fn test_lines_after_close_are_discarded() {
        let memory = MemoryLog::new();
        let mut sink = LogSink::new(memory.clone());

        sink.info("first");
        sink.close();
        sink.info("second");
        sink.close();

        assert!(!sink.is_open());
        assert_eq!(memory.lines(), vec!["first"]);
    }

    #[test]
    fn test_failed_write_disables_sink() {
        let mut sink = LogSink::new(BrokenPipe);
        assert!(sink.is_open());

        sink.info("lost");
        assert!(!sink.is_open());
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let path = std::env::temp_dir()
            .join(format!("gl_bootstrap_log_{}.txt", std::process::id()));
        std::fs::write(&path, "stale line\n").unwrap();

        let mut sink = LogSink::create(&path).unwrap();
        sink.info("fresh line");
        sink.close();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, "fresh line\n");
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let path = std::env::temp_dir()
            .join("gl_bootstrap_no_such_dir")
            .join("nested")
            .join("log.txt");
        assert!(LogSink::create(path).is_err());
    }

    #[test]
    fn test_init_is_idempotent() {
        init(Some("debug"));
        init(None);
    }
}
