// ============================================================
// Layer 3 — Topic Domain Type
// ============================================================
// A topic file: an identifier (the file stem, e.g.
// "fast_fourier_transform") and its questions in authored
// order. Topics never reference each other.
//
// Identifiers are normalised so users can type them loosely:
//   "Linear-Algebra", "linear algebra", "linear_algebra"
// all resolve to "linear_algebra".

use crate::domain::question::QuestionRecord;

/// A named, ordered collection of question records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Normalised identifier, unique within a catalog
    pub id: String,

    /// Records in the order they were authored
    pub questions: Vec<QuestionRecord>,
}

impl Topic {
    /// Create a new Topic. The identifier is normalised here
    /// so every Topic in the system has a canonical id.
    pub fn new(id: impl AsRef<str>, questions: Vec<QuestionRecord>) -> Self {
        Self {
            id: normalize_topic_id(id.as_ref()),
            questions,
        }
    }

    /// Human-readable title: "fast_fourier_transform" → "Fast Fourier Transform"
    pub fn title(&self) -> String {
        self.id
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None        => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Canonical form of a topic identifier.
pub fn normalize_topic_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c         => c.to_ascii_lowercase(),
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize_topic_id("Linear-Algebra"),    "linear_algebra");
        assert_eq!(normalize_topic_id(" linear algebra "),  "linear_algebra");
        assert_eq!(normalize_topic_id("linear_algebra"),    "linear_algebra");
    }

    #[test]
    fn test_title() {
        let t = Topic::new("fast_fourier_transform", Vec::new());
        assert_eq!(t.title(), "Fast Fourier Transform");
    }

    #[test]
    fn test_new_normalizes_id() {
        let t = Topic::new("Masked-Arrays", Vec::new());
        assert_eq!(t.id, "masked_arrays");
        assert!(t.is_empty());
    }
}
