use crate::classify::StatusClass;
use crate::logger::Logger;
use crate::record::LogRecord;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Completed-request fields consumed by the access logger. The HTTP layer
/// fills this in; the core owns no part of connection handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSummary {
    pub method: String,
    /// Path including the query string.
    pub path: String,
    pub scheme: String,
    pub version_major: u8,
    pub version_minor: u8,
}

/// Completed-response fields consumed by the access logger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub status: u16,
    pub reason: String,
}

/// Emits exactly one record per completed request/response pair.
///
/// Successful deliveries log at DEBUG because the message is the same for
/// every one of them; anything else is a server-side problem and logs at
/// ERROR.
pub struct AccessLogger {
    logger: Arc<Logger>,
}

impl AccessLogger {
    /// Message template for one completed exchange.
    pub const LOG_FORMAT: &'static str =
        r#"{logger} "{method} {path} {version}" => {status} {time}"#;

    pub fn new(logger: Arc<Logger>) -> Self {
        AccessLogger { logger }
    }

    /// Log one finished exchange. `elapsed` is the processing time in
    /// seconds.
    pub fn log(&self, request: &RequestSummary, response: &ResponseSummary, elapsed: f64) {
        let class = StatusClass::classify(response.status);
        let severity = match class {
            StatusClass::Success => Severity::Debug,
            StatusClass::Other => Severity::Error,
        };

        let mut args = Map::new();
        args.insert(
            "logger".to_string(),
            Value::String(self.logger.name().to_string()),
        );
        args.insert("method".to_string(), Value::String(request.method.clone()));
        args.insert("path".to_string(), Value::String(request.path.clone()));
        args.insert(
            "version".to_string(),
            Value::String(format!(
                "{}/{}.{}",
                request.scheme.to_uppercase(),
                request.version_major,
                request.version_minor
            )),
        );
        args.insert(
            "status".to_string(),
            Value::String(format!("{}:{}", response.status, response.reason)),
        );
        args.insert(
            "time".to_string(),
            Value::String(format!("{}ms", (elapsed * 1000.0).round() as i64)),
        );

        self.logger.log(
            LogRecord::new(severity, Self::LOG_FORMAT)
                .with_args(args)
                .with_status(class),
        );
    }
}
