// ============================================================
// Layer 3 — QuestionRecord Domain Type
// ============================================================
// One entry of a topic file. Every record has exactly three
// fields, and the serialized names are the ones the corpus
// was authored with:
//
//   {
//     "Main question":       "What is Broadcasting ...?",
//     "Explanation":         "Broadcasting is ...",
//     "Follow-up questions": ["How does ...?", "..."]
//   }
//
// Text is stored exactly as authored. Nothing here trims or
// rewrites it, so a re-serialized topic matches the original
// field for field.
//
// Reference: Rust Book §5 (Structs)
//            serde attribute docs (rename)

use serde::{Deserialize, Serialize};

/// A single interview question with its explanation and follow-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    /// The question an interviewer would open with
    #[serde(rename = "Main question")]
    pub main_question: String,

    /// What a good answer covers
    #[serde(rename = "Explanation")]
    pub explanation: String,

    /// Deeper questions, in the order they should be asked
    #[serde(rename = "Follow-up questions")]
    pub follow_up_questions: Vec<String>,
}

impl QuestionRecord {
    /// Create a new QuestionRecord.
    /// Accepts anything string-like for the text fields.
    pub fn new<I, S>(
        main_question: impl Into<String>,
        explanation:   impl Into<String>,
        follow_ups:    I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            main_question:       main_question.into(),
            explanation:         explanation.into(),
            follow_up_questions: follow_ups.into_iter().map(Into::into).collect(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_authored_field_names() {
        let json = r#"{
            "Main question": "What is a ufunc?",
            "Explanation": "A universal function.",
            "Follow-up questions": ["Name one.", "Why are they fast?"]
        }"#;
        let rec: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.main_question, "What is a ufunc?");
        assert_eq!(rec.follow_up_questions.len(), 2);
        assert_eq!(rec.follow_up_questions[1], "Why are they fast?");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{
            "Main question": "q",
            "Explanation": "e",
            "Follow-up questions": ["f"],
            "Answer": "extra"
        }"#;
        assert!(serde_json::from_str::<QuestionRecord>(json).is_err());
    }
}
