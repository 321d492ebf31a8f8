use crate::classify::StatusClass;
use crate::colors::{inject, Color, Style};
use crate::severity::Severity;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// Display style for one semantic argument field.
///
/// `color: None` marks a field whose color is decided per record; the only
/// such field is "status", which takes green or red from the record's
/// classification.
#[derive(Debug, Clone, Copy)]
pub struct FieldStyle {
    pub color: Option<Color>,
    pub style: Style,
}

impl FieldStyle {
    const fn plain(color: Color) -> Self {
        FieldStyle {
            color: Some(color),
            style: Style::Normal,
        }
    }

    const fn styled(color: Color, style: Style) -> Self {
        FieldStyle {
            color: Some(color),
            style,
        }
    }
}

/// Static field-name to style table. The key set is fixed at startup;
/// formatting decorates values whose key appears here and passes everything
/// else through untouched.
pub static FIELD_STYLES: Lazy<IndexMap<&'static str, FieldStyle>> = Lazy::new(|| {
    IndexMap::from([
        ("event", FieldStyle::plain(Color::Green)),
        ("ratelimit", FieldStyle::styled(Color::White, Style::Bold)),
        ("time_remaining", FieldStyle::styled(Color::White, Style::Bold)),
        ("url", FieldStyle::styled(Color::Blue, Style::Underline)),
        ("file", FieldStyle::plain(Color::Yellow)),
        ("request", FieldStyle::plain(Color::Yellow)),
        ("time", FieldStyle::plain(Color::Yellow)),
        // Color decided per record from the status classification.
        (
            "status",
            FieldStyle {
                color: None,
                style: Style::Bold,
            },
        ),
        ("method", FieldStyle::styled(Color::Magenta, Style::Bold)),
        ("path", FieldStyle::plain(Color::Blue)),
        ("data", FieldStyle::plain(Color::Yellow)),
        ("version", FieldStyle::plain(Color::Yellow)),
    ])
});

/// Coerce any JSON value to its display text. Strings render bare, everything
/// else through its JSON representation.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "null".to_string()),
    }
}

/// Colorize a structured argument mapping according to the style table.
///
/// Returns a new mapping with the same keys in the same order; the input is
/// never mutated. Values whose key is registered are replaced with the
/// injected text, ending in the `severity` color so the rest of the line
/// keeps its style. A "status" value with no classification supplied passes
/// through unchanged.
pub fn format_args(
    args: &Map<String, Value>,
    severity: Severity,
    status: Option<StatusClass>,
) -> Map<String, Value> {
    let mut formatted = Map::new();
    for (key, value) in args {
        let styled = FIELD_STYLES.get(key.as_str()).and_then(|entry| {
            let color = match entry.color {
                Some(color) => Some(color),
                None => status.map(StatusClass::color),
            };
            color.map(|color| {
                Value::String(inject(
                    &value_to_text(value),
                    color,
                    entry.style,
                    severity.color(),
                ))
            })
        });
        formatted.insert(key.clone(), styled.unwrap_or_else(|| value.clone()));
    }
    formatted
}
