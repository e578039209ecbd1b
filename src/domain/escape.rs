// src/domain/escape.rs

use maud::{Escaper, Render};
use std::fmt::Write;

/// Text that has already been HTML-escaped and can go straight into markup.
///
/// The only way to build one from user data is [`SafeText::escape`], so view models
/// holding `SafeText` cannot carry raw listing text to the templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeText(String);

impl SafeText {
    pub fn escape(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        // Writing into a String cannot fail.
        let _ = Escaper::new(&mut out).write_str(raw);
        SafeText(out)
    }

    /// Absent text escapes to the empty string.
    pub fn escape_opt(raw: Option<&str>) -> Self {
        raw.map(Self::escape).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Render for SafeText {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}
