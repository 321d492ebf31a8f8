// src/lib.rs
pub mod access;
pub mod classify;
pub mod colors;
pub mod error;
pub mod format;
pub mod logger;
pub mod record;
pub mod registry;
pub mod severity;
pub mod tty;

pub use access::{AccessLogger, RequestSummary, ResponseSummary};
pub use classify::{StatusClass, STATUS_OK};
pub use colors::{colorcode, inject, Color, Style, RESET_ALL};
pub use error::ConfigError;
pub use format::RecordFormatter;
pub use logger::{Logger, DEFAULT_LEVEL, LOG_LEVEL_VAR};
pub use record::LogRecord;
pub use registry::{format_args, FieldStyle, FIELD_STYLES};
pub use severity::Severity;
