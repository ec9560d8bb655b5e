use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Prompt,
    Heading,
    Plain,
    Warning,
    Error,
}

/// Applies terminal colours to messages without altering their text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn paint(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        if !self.color {
            return text;
        }
        match kind {
            MessageKind::Prompt => text.bright_cyan().to_string(),
            MessageKind::Heading => text.bold().to_string(),
            MessageKind::Warning => text.bright_yellow().to_string(),
            MessageKind::Error => text.bright_red().to_string(),
            MessageKind::Plain => text,
        }
    }
}

/// Aligns the `colored` global switch with the resolved preference.
pub fn apply_color_preference(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
