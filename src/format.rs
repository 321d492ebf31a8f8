use crate::colors::RESET_ALL;
use crate::record::LogRecord;
use crate::registry::{format_args, value_to_text};
use crate::severity::Severity;
use serde_json::{Map, Value};

/// Renders one record to its final wire line: `[LEVEL] message`, wrapped in
/// the severity's composite color when colors are on.
pub struct RecordFormatter {
    use_colors: bool,
}

impl RecordFormatter {
    pub fn new(use_colors: bool) -> Self {
        RecordFormatter { use_colors }
    }

    /// Format a record. Takes the record mutably so the rendered exception
    /// text can be cached on it; a record is rendered at most once per
    /// exception no matter how often this is called.
    pub fn format(&self, record: &mut LogRecord) -> String {
        let mut msg = self.message(record);

        if record.exc_text.is_none() {
            if let Some(exception) = &record.exception {
                record.exc_text = Some(render_exception(exception));
            }
        }
        if let Some(exc_text) = &record.exc_text {
            if !msg.ends_with('\n') {
                msg.push('\n');
            }
            msg.push_str(exc_text);
            if self.use_colors {
                // Line-splitting collectors (the Heroku log router among
                // them) reset color state between lines, so every physical
                // line re-opens the severity color.
                let continuation = format!("\n{}", record.severity.color());
                msg = msg.replace('\n', &continuation);
            }
        }
        if let Some(stack) = &record.stack {
            if !msg.ends_with('\n') {
                msg.push('\n');
            }
            msg.push_str(stack);
        }

        self.render_line(record.severity, &msg)
    }

    /// Interpolated base message, with arguments colorized first when colors
    /// are on.
    fn message(&self, record: &LogRecord) -> String {
        let Some(args) = &record.args else {
            return record.template.clone();
        };
        if self.use_colors {
            let formatted = format_args(args, record.severity, record.status);
            interpolate(&record.template, &formatted)
        } else {
            interpolate(&record.template, args)
        }
    }

    fn render_line(&self, severity: Severity, message: &str) -> String {
        if self.use_colors {
            format!(
                "{}[{}] {}{}",
                severity.color(),
                severity.name(),
                message,
                RESET_ALL
            )
        } else {
            format!("[{}] {}", severity.name(), message)
        }
    }
}

/// Substitute `{key}` placeholders with argument text. Placeholders with no
/// matching argument render as-is; arguments with no placeholder are ignored.
fn interpolate(template: &str, args: &Map<String, Value>) -> String {
    let mut message = template.to_string();
    for (key, value) in args {
        let placeholder = format!("{{{}}}", key);
        if message.contains(&placeholder) {
            message = message.replace(&placeholder, &value_to_text(value));
        }
    }
    message
}

/// Render an exception to text: the error itself, then one line per source in
/// its chain.
fn render_exception(exception: &anyhow::Error) -> String {
    let mut text = exception.to_string();
    for cause in exception.chain().skip(1) {
        text.push_str("\nCaused by: ");
        text.push_str(&cause.to_string());
    }
    text
}
