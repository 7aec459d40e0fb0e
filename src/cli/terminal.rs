//! Terminal capability detection and output styling.

use kubelearn::Level;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

fn paint<C: owo_colors::Color>(s: &str) -> String {
    if supports_color() {
        s.fg::<C>().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a difficulty level as a colored badge.
///
/// Beginner is green, intermediate amber, advanced red. Falls back to the
/// plain level name when the terminal does not support color.
pub fn level_badge(level: Level) -> String {
    match level {
        Level::Beginner => paint::<css::Green>("beginner"),
        Level::Intermediate => paint::<css::Orange>("intermediate"),
        Level::Advanced => paint::<css::Red>("advanced"),
    }
}

/// Extension trait for styling output
pub trait Colorize {
    /// Bold section heading
    fn heading(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Color as emphasis (green)
    fn emphasis(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn heading(&self) -> String {
        if supports_color() {
            self.bold().to_string()
        } else {
            self.to_string()
        }
    }

    fn info(&self) -> String {
        paint::<css::LightBlue>(self)
    }

    fn emphasis(&self) -> String {
        paint::<css::Green>(self)
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn heading(&self) -> String {
        self.as_str().heading()
    }

    fn info(&self) -> String {
        self.as_str().info()
    }

    fn emphasis(&self) -> String {
        self.as_str().emphasis()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

#[cfg(test)]
mod tests {
    use kubelearn::Level;

    use super::level_badge;

    #[test]
    fn badge_carries_the_level_name() {
        assert!(level_badge(Level::Beginner).contains("beginner"));
        assert!(level_badge(Level::Intermediate).contains("intermediate"));
        assert!(level_badge(Level::Advanced).contains("advanced"));
    }
}
