use is_terminal::IsTerminal;
use std::io;

/// Whether the given stream should receive ANSI colors. Honors the NO_COLOR
/// convention.
pub fn stream_supports_color(stream: &impl IsTerminal) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    stream.is_terminal()
}

/// Color detection for stdout.
pub fn should_use_colors() -> bool {
    stream_supports_color(&io::stdout())
}
