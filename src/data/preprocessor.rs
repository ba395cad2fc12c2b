// ============================================================
// Layer 4 — Search Text Preprocessor
// ============================================================
// Turns free text into search terms. Questions are written for
// people ("What is NumPy's `ndarray`?") so before matching we:
//
//   1. Lowercase everything
//   2. Treat punctuation as a word break ("ndarray?" → "ndarray")
//   3. Split on whitespace
//
// Every word is kept, single letters included: "C" is a real
// query against the C-extension topic.
//
// This only feeds the search index. Stored records are never
// passed back through here.

use std::collections::BTreeSet;

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Lowercase, strip punctuation and collapse whitespace.
    pub fn clean(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Distinct search terms in `text`, sorted.
    pub fn terms(&self, text: &str) -> BTreeSet<String> {
        self.clean(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
