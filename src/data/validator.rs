// ============================================================
// Layer 4 — Corpus Validator
// ============================================================
// Checks the shape rules every topic file must follow:
//
//   - main question is non-empty
//   - explanation is non-empty
//   - at least one follow-up question, none of them empty
//   - no main question repeated within the same topic
//
// "Empty" means empty after trimming whitespace. The text is
// only inspected, never rewritten.
//
// Violations are collected rather than returned on the first
// hit, so one `validate` run reports everything wrong.

use std::collections::HashMap;
use std::fmt;

use crate::domain::topic::Topic;

/// What is wrong with a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    EmptyMainQuestion,
    EmptyExplanation,
    NoFollowUps,
    /// Position of the blank follow-up in the list
    EmptyFollowUp(usize),
    /// Index of the earlier record with the same main question
    DuplicateMainQuestion(usize),
}

/// A rule broken by one record of one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub topic: String,
    pub index: usize,
    pub kind:  ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: ", self.topic, self.index)?;
        match &self.kind {
            ViolationKind::EmptyMainQuestion        => write!(f, "main question is empty"),
            ViolationKind::EmptyExplanation         => write!(f, "explanation is empty"),
            ViolationKind::NoFollowUps              => write!(f, "no follow-up questions"),
            ViolationKind::EmptyFollowUp(i)         => write!(f, "follow-up {i} is empty"),
            ViolationKind::DuplicateMainQuestion(i) => {
                write!(f, "main question duplicates record #{i}")
            }
        }
    }
}

/// Check one topic and return every violation found, in record order.
pub fn validate_topic(topic: &Topic) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    let mut push = |index: usize, kind: ViolationKind| {
        out.push(Violation { topic: topic.id.clone(), index, kind });
    };

    for (index, rec) in topic.questions.iter().enumerate() {
        if rec.main_question.trim().is_empty() {
            push(index, ViolationKind::EmptyMainQuestion);
        } else if let Some(&earlier) = first_seen.get(rec.main_question.as_str()) {
            push(index, ViolationKind::DuplicateMainQuestion(earlier));
        } else {
            first_seen.insert(rec.main_question.as_str(), index);
        }

        if rec.explanation.trim().is_empty() {
            push(index, ViolationKind::EmptyExplanation);
        }

        if rec.follow_up_questions.is_empty() {
            push(index, ViolationKind::NoFollowUps);
        }

        for (i, f) in rec.follow_up_questions.iter().enumerate() {
            if f.trim().is_empty() {
                push(index, ViolationKind::EmptyFollowUp(i));
            }
        }
    }

    out
}

/// Check every topic.
pub fn validate_all<'a>(topics: impl IntoIterator<Item = &'a Topic>) -> Vec<Violation> {
    topics.into_iter().flat_map(validate_topic).collect()
}
