//! ANSI color utilities for the terminal summary.
//!
//! Color scheme optimized for both light and dark terminals:
//! - High contrast for section headings
//! - Muted colors for secondary information (ranks, excerpts)
//! - Semantic colors per testament (old=yellow, new=cyan)

use owo_colors::{OwoColorize, Style};

use crate::types::Testament;

/// Style for a testament label and its books.
pub fn testament_style(testament: Testament) -> Style {
    match testament {
        Testament::Old => Style::new().yellow(),
        Testament::New => Style::new().cyan(),
    }
}

/// Human label for a testament.
pub fn testament_label(testament: Testament) -> &'static str {
    match testament {
        Testament::Old => "Antiguo Testamento",
        Testament::New => "Nuevo Testamento",
    }
}

/// Colorizes text, or passes it through unchanged when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Apply `style` when color is enabled.
    pub fn paint(&self, s: &str, style: Style) -> String {
        if self.enabled {
            s.style(style).to_string()
        } else {
            s.to_string()
        }
    }

    /// Section heading (bold bright blue)
    pub fn heading(&self, s: &str) -> String {
        self.paint(s, Style::new().bright_blue().bold())
    }

    /// Scripture reference (green)
    pub fn reference(&self, s: &str) -> String {
        self.paint(s, Style::new().green())
    }

    /// Vocabulary term (magenta)
    pub fn term(&self, s: &str) -> String {
        self.paint(s, Style::new().magenta())
    }

    /// Counts and scores (bold)
    pub fn number(&self, s: &str) -> String {
        self.paint(s, Style::new().bold())
    }

    pub fn testament(&self, testament: Testament, s: &str) -> String {
        self.paint(s, testament_style(testament))
    }

    /// Dim text for secondary information
    pub fn dim(&self, s: &str) -> String {
        self.paint(s, Style::new().dimmed())
    }
}
