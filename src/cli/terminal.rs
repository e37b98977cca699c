//! Terminal capability detection and output styling

use owo_colors::{colors::css, OwoColorize};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < 60)
}

/// Extension trait for styling catalog output
pub trait Style {
    /// A course number (green)
    fn course_number(&self) -> String;
    /// A prerequisite reference (blue)
    fn prerequisite(&self) -> String;
    /// A warning or not-found message (amber)
    fn warning(&self) -> String;
    /// Headings and placeholders
    fn dim(&self) -> String;
}

impl Style for str {
    fn course_number(&self) -> String {
        paint(self, |s| s.fg::<css::Green>().bold().to_string())
    }

    fn prerequisite(&self) -> String {
        paint(self, |s| s.fg::<css::LightBlue>().to_string())
    }

    fn warning(&self) -> String {
        paint(self, |s| s.fg::<css::Orange>().to_string())
    }

    fn dim(&self) -> String {
        paint(self, |s| s.dimmed().to_string())
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
