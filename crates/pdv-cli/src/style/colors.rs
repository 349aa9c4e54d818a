//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Granted permissions, success messages (green bold).
    fn success(&self) -> String;
    /// Denials, errors (red bold).
    fn error(&self) -> String;
    /// Scope and role names (cyan).
    fn info(&self) -> String;
    /// Secondary text (dimmed).
    fn muted(&self) -> String;
    /// Section headers (bold).
    fn header(&self) -> String;
}

fn styled<T: std::fmt::Display>(value: &T, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        styled(self, Style::new().green().bold())
    }

    fn error(&self) -> String {
        styled(self, Style::new().red().bold())
    }

    fn info(&self) -> String {
        styled(self, Style::new().cyan())
    }

    fn muted(&self) -> String {
        styled(self, Style::new().dimmed())
    }

    fn header(&self) -> String {
        styled(self, Style::new().bold())
    }
}
