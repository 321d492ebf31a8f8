use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Log severity, ascending.
///
/// Every variant carries its own composite line color, so a severity that
/// nobody handles cannot exist at runtime. The only fallible operation is
/// parsing a threshold string at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Upper-case level name as it appears on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Composite ANSI code rendering a whole line in this severity's style.
    ///
    /// Debug and Info share the dim style: successful webhook deliveries log
    /// the same message every time, so they stay visually quiet.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Debug | Severity::Info => "\x1b[2m",
            Severity::Warning => "\x1b[33m",
            Severity::Error => "\x1b[31m",
            Severity::Critical => "\x1b[35m\x1b[1m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(ConfigError::UnknownLevel(s.to_string())),
        }
    }
}
