use crate::error::ConfigError;
use crate::format::RecordFormatter;
use crate::record::LogRecord;
use crate::severity::Severity;
use crate::tty::{should_use_colors, stream_supports_color};
use std::io::{self, Write};
use std::sync::Mutex;

/// Environment variable selecting the minimum emitted severity.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Default threshold when the environment provides none.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// The logging substrate: a handle constructed once at service startup and
/// passed by reference to every component that emits logs.
///
/// Records below the threshold are dropped. Everything else is formatted and
/// written as one newline-terminated line; the sink is behind a mutex so
/// concurrent callers never interleave within a line. Emission is
/// fire-and-forget: sink write failures are discarded rather than surfaced
/// to the code path that logged.
pub struct Logger {
    name: String,
    threshold: Severity,
    formatter: RecordFormatter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("sink", &"<sink>")
            .finish()
    }
}

impl Logger {
    pub fn new(
        name: impl Into<String>,
        threshold: Severity,
        use_colors: bool,
        sink: Box<dyn Write + Send>,
    ) -> Self {
        Logger {
            name: name.into(),
            threshold,
            formatter: RecordFormatter::new(use_colors),
            sink: Mutex::new(sink),
        }
    }

    /// Build a logger with the threshold taken from `LOG_LEVEL`, defaulting
    /// to INFO when unset. An unrecognized value is an initialization
    /// failure; it is neither caught nor retried here.
    pub fn from_env(
        name: impl Into<String>,
        use_colors: bool,
        sink: Box<dyn Write + Send>,
    ) -> Result<Self, ConfigError> {
        let threshold = match std::env::var(LOG_LEVEL_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_LEVEL,
        };
        Ok(Logger::new(name, threshold, use_colors, sink))
    }

    /// Environment-configured logger writing to stdout, with colors decided
    /// by terminal detection.
    pub fn stdout(name: impl Into<String>) -> Result<Self, ConfigError> {
        Logger::from_env(name, should_use_colors(), Box::new(io::stdout()))
    }

    /// Environment-configured logger writing to stderr.
    pub fn stderr(name: impl Into<String>) -> Result<Self, ConfigError> {
        let use_colors = stream_supports_color(&io::stderr());
        Logger::from_env(name, use_colors, Box::new(io::stderr()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Emit one record: threshold check, format, one line to the sink.
    pub fn log(&self, mut record: LogRecord) {
        if !self.enabled(record.severity) {
            return;
        }
        let line = self.formatter.format(&mut record);
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", line);
            let _ = sink.flush();
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogRecord::new(Severity::Debug, message));
    }

    pub fn info(&self, message: &str) {
        self.log(LogRecord::new(Severity::Info, message));
    }

    pub fn warning(&self, message: &str) {
        self.log(LogRecord::new(Severity::Warning, message));
    }

    pub fn error(&self, message: &str) {
        self.log(LogRecord::new(Severity::Error, message));
    }

    pub fn critical(&self, message: &str) {
        self.log(LogRecord::new(Severity::Critical, message));
    }
}
