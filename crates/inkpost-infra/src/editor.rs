//! In-memory editing surface.

use inkpost_core::ports::EditingSurface;

/// Holds the editor's HTML as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    html: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl EditingSurface for TextBuffer {
    fn value(&self) -> String {
        self.html.clone()
    }

    fn load(&mut self, html: &str) {
        self.html = html.to_string();
    }
}
