// ============================================================
// Layer 3 — Question Catalog
// ============================================================
// Every loaded topic, keyed by normalised identifier.
//
// The catalog has one state: loaded. After from_topics()
// returns there is no way to add, remove or edit a record,
// so any number of threads can read it through a shared
// reference (or an Arc) without locking.
//
// Lookups:
//   get("broadcasting")       → &[QuestionRecord] in authored order
//   get("no_such_topic")      → CatalogError::NotFound
//   record("broadcasting", 3) → one record, or IndexOutOfRange

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::question::QuestionRecord;
use crate::domain::topic::{normalize_topic_id, Topic};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown topic '{0}'")]
    NotFound(String),
    #[error("topic '{0}' is defined more than once")]
    DuplicateTopic(String),
    #[error("topic '{topic}' has {len} questions, index {index} is out of range")]
    IndexOutOfRange {
        topic: String,
        index: usize,
        len:   usize,
    },
}

/// Read-only collection of topics.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    /// BTreeMap keeps topic listing order stable (alphabetical)
    topics: BTreeMap<String, Topic>,
}

impl QuestionCatalog {
    /// Build a catalog from loaded topics.
    /// Fails if two topics share the same identifier.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();

        for topic in topics {
            if map.contains_key(&topic.id) {
                return Err(CatalogError::DuplicateTopic(topic.id));
            }
            map.insert(topic.id.clone(), topic);
        }

        tracing::debug!("Catalog built with {} topics", map.len());
        Ok(Self { topics: map })
    }

    /// The records of a topic, unchanged and in authored order.
    pub fn get(&self, topic_id: &str) -> Result<&[QuestionRecord], CatalogError> {
        self.topic(topic_id).map(|t| t.questions.as_slice())
    }

    /// The topic itself (identifier, title and records).
    pub fn topic(&self, topic_id: &str) -> Result<&Topic, CatalogError> {
        let key = normalize_topic_id(topic_id);
        self.topics
            .get(&key)
            .ok_or(CatalogError::NotFound(key))
    }

    /// One record by zero-based index.
    pub fn record(&self, topic_id: &str, index: usize) -> Result<&QuestionRecord, CatalogError> {
        let topic = self.topic(topic_id)?;
        topic.questions.get(index).ok_or_else(|| CatalogError::IndexOutOfRange {
            topic: topic.id.clone(),
            index,
            len:   topic.len(),
        })
    }

    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn topic_ids(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Number of topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of records across every topic
    pub fn question_count(&self) -> usize {
        self.topics.values().map(Topic::len).sum()
    }
}
