use crate::classify::StatusClass;
use crate::severity::Severity;
use serde_json::{Map, Value};

/// One log record on its way to the sink.
///
/// The message template interpolates `{key}` placeholders from the argument
/// mapping. Exception and backtrace payloads are optional; `exc_text` caches
/// the rendered exception so rendering happens at most once per record.
#[derive(Debug)]
pub struct LogRecord {
    pub severity: Severity,
    pub template: String,
    pub args: Option<Map<String, Value>>,
    pub status: Option<StatusClass>,
    pub exception: Option<anyhow::Error>,
    pub exc_text: Option<String>,
    pub stack: Option<String>,
}

impl LogRecord {
    pub fn new(severity: Severity, template: impl Into<String>) -> Self {
        LogRecord {
            severity,
            template: template.into(),
            args: None,
            status: None,
            exception: None,
            exc_text: None,
            stack: None,
        }
    }

    /// Attach a structured argument mapping.
    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = Some(args);
        self
    }

    /// Attach the response classification that colors the "status" field.
    pub fn with_status(mut self, status: StatusClass) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach an exception payload; its source chain is rendered lazily.
    pub fn with_exception(mut self, exception: anyhow::Error) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Attach pre-rendered backtrace text.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
