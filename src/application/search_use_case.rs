// ============================================================
// Layer 2 — Search Use Case
// ============================================================
// Keyword search over the question bank.
//
// Scoring, per record:
//   - each distinct query term found in the main question → +2
//   - each distinct query term found in the explanation   → +1
//   - each distinct query term found in any follow-up     → +1
//
// Records scoring zero are dropped. Ties are broken by topic
// id, then by position in the topic, so results are stable.

use anyhow::{bail, Result};
use std::collections::BTreeSet;

use crate::data::preprocessor::Preprocessor;
use crate::domain::{catalog::QuestionCatalog, question::QuestionRecord};

const MAIN_QUESTION_WEIGHT: usize = 2;

/// A record matching a search query
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub topic:  &'a str,
    pub index:  usize,
    pub score:  usize,
    pub record: &'a QuestionRecord,
}

pub struct SearchUseCase<'a> {
    catalog: &'a QuestionCatalog,
    prep:    Preprocessor,
}

impl<'a> SearchUseCase<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog, prep: Preprocessor::new() }
    }

    /// Search all topics, or only `topic` when given.
    pub fn search(
        &self,
        query: &str,
        topic: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SearchHit<'a>>> {
        let terms = self.prep.terms(query);
        if terms.is_empty() {
            bail!("Search query '{query}' has no usable terms");
        }

        let topics: Vec<_> = match topic {
            Some(id) => vec![self.catalog.topic(id)?],
            None     => self.catalog.topics().collect(),
        };

        let mut hits: Vec<SearchHit<'a>> = topics
            .into_iter()
            .flat_map(|t| {
                t.questions.iter().enumerate().map(move |(index, record)| SearchHit {
                    topic: t.id.as_str(),
                    index,
                    score: 0,
                    record,
                })
            })
            .filter_map(|mut hit| {
                hit.score = self.score(&terms, hit.record);
                (hit.score > 0).then_some(hit)
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.topic.cmp(b.topic))
                .then_with(|| a.index.cmp(&b.index))
        });
        hits.truncate(limit);

        tracing::debug!("Query {:?} matched {} record(s)", terms, hits.len());
        Ok(hits)
    }

    fn score(&self, terms: &BTreeSet<String>, record: &QuestionRecord) -> usize {
        let main        = self.prep.terms(&record.main_question);
        let explanation = self.prep.terms(&record.explanation);
        let follow_ups: BTreeSet<String> = record
            .follow_up_questions
            .iter()
            .flat_map(|f| self.prep.terms(f))
            .collect();

        terms
            .iter()
            .map(|t| {
                MAIN_QUESTION_WEIGHT * usize::from(main.contains(t))
                    + usize::from(explanation.contains(t))
                    + usize::from(follow_ups.contains(t))
            })
            .sum()
    }
}
