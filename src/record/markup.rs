//! Markup stripping collaborator

use std::sync::OnceLock;

use regex::Regex;

/// Removes markup from a text value.
///
/// Implementations must be total and side-effect free. They remove tags and
/// leave surrounding text and whitespace untouched.
pub trait MarkupStripper {
    /// Returns `text` with markup removed
    fn strip(&self, text: &str) -> String;
}

impl<F> MarkupStripper for F
where
    F: Fn(&str) -> String,
{
    fn strip(&self, text: &str) -> String {
        self(text)
    }
}

/// Strips `<...>` tags (HTML/XML elements, comments, doctypes).
#[derive(Debug, Default, Clone, Copy)]
pub struct TagStripper;

impl TagStripper {
    fn pattern() -> Option<&'static Regex> {
        static TAG: OnceLock<Option<Regex>> = OnceLock::new();
        TAG.get_or_init(|| Regex::new(r"<[A-Za-z/!?][^<>]*>").ok())
            .as_ref()
    }
}

impl MarkupStripper for TagStripper {
    fn strip(&self, text: &str) -> String {
        match Self::pattern() {
            Some(tag) => tag.replace_all(text, "").into_owned(),
            None => text.to_string(),
        }
    }
}

/// Pass-through stripper for input already free of markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMarkup;

impl MarkupStripper for NoMarkup {
    fn strip(&self, text: &str) -> String {
        text.to_string()
    }
}
