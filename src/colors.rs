/// ANSI Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Escape sequence selecting the given SGR code.
pub fn colorcode(code: u8) -> String {
    format!("{}{}m", CSI, code)
}

/// Clears every color and style attribute.
pub const RESET_ALL: &str = "\x1b[0m";

/// The 8 base foreground colors plus the foreground reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl Color {
    pub fn code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Reset => "\x1b[39m",
        }
    }
}

/// Text styles applicable on top of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    Bold,
    Dim,
    Underline,
    #[default]
    Normal,
}

impl Style {
    pub fn code(self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Underline => "\x1b[4m",
            Style::Normal => "\x1b[22m",
        }
    }
}

/// Wrap a submessage in its own color and style, then restore the enclosing
/// line color given in `reset` (a severity's composite code).
///
/// The wrap starts from a clean slate so the submessage is unaffected by
/// whatever attributes are active around it. Nesting is permitted; previously
/// applied codes inside `msg` are kept as-is.
pub fn inject(msg: &str, color: Color, style: Style, reset: &str) -> String {
    format!(
        "{}{}{}{}{}{}",
        RESET_ALL,
        color.code(),
        style.code(),
        msg,
        RESET_ALL,
        reset
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorcode_formula() {
        assert_eq!(colorcode(0), "\x1b[0m");
        assert_eq!(colorcode(31), "\x1b[31m");
        assert_eq!(colorcode(39), "\x1b[39m");
    }

    #[test]
    fn test_constants_match_colorcode() {
        assert_eq!(Color::Red.code(), colorcode(31));
        assert_eq!(Color::White.code(), colorcode(37));
        assert_eq!(Color::Reset.code(), colorcode(39));
        assert_eq!(Style::Bold.code(), colorcode(1));
        assert_eq!(Style::Normal.code(), colorcode(22));
        assert_eq!(RESET_ALL, colorcode(0));
    }

    #[test]
    fn test_inject_opens_and_closes_with_reset() {
        let out = inject("hello", Color::Green, Style::Bold, "\x1b[2m");
        assert!(out.starts_with(RESET_ALL));
        assert!(out.ends_with("\x1b[0m\x1b[2m"));
        assert_eq!(out, "\x1b[0m\x1b[32m\x1b[1mhello\x1b[0m\x1b[2m");
    }

    #[test]
    fn test_inject_empty_message() {
        let out = inject("", Color::Yellow, Style::Normal, RESET_ALL);
        assert_eq!(out, "\x1b[0m\x1b[33m\x1b[22m\x1b[0m\x1b[0m");
    }

    #[test]
    fn test_inject_nesting_restores_outer_color() {
        let inner = inject("inner", Color::Blue, Style::Underline, "\x1b[2m");
        let outer = inject(&inner, Color::Green, Style::Normal, RESET_ALL);
        // The inner reset hands back the dim code it was given, it does not
        // wipe the outer wrap's trailing restore.
        assert!(outer.contains("\x1b[0m\x1b[2m"));
        assert!(outer.ends_with("\x1b[0m\x1b[0m"));
    }
}
