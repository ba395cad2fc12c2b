// ============================================================
// Layer 2 — Catalog Use Case
// ============================================================
// Opens the question bank (embedded corpus, or a directory the
// user points at), and answers the plain browsing requests:
// list topics, show a topic, show a single record, validate.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{
    embedded::EmbeddedSource,
    loader::DirLoader,
    validator::{self, Violation},
};
use crate::domain::{
    catalog::QuestionCatalog,
    question::QuestionRecord,
    topic::Topic,
    traits::{QuestionSource, SkippedFile},
};

/// One line of the topic listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub id:        String,
    pub title:     String,
    pub questions: usize,
}

/// Outcome of `validate`: broken records, plus files that
/// could not be loaded at all.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub skipped:    Vec<SkippedFile>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.skipped.is_empty()
    }

    /// One line per problem, unreadable files first
    pub fn problems(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|s| format!("cannot load {s}"))
            .chain(self.violations.iter().map(ToString::to_string))
            .collect()
    }
}

pub struct CatalogUseCase {
    catalog: QuestionCatalog,
    /// Files the source had to skip while loading
    skipped: Vec<SkippedFile>,
}

impl CatalogUseCase {
    /// Load from `data_dir` if given, otherwise from the embedded corpus.
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        match data_dir {
            Some(dir) => Self::from_source(&DirLoader::new(dir)),
            None      => Self::from_source(&EmbeddedSource::new()),
        }
    }

    pub fn from_source(source: &dyn QuestionSource) -> Result<Self> {
        let report  = source.load_report()?;
        let catalog = QuestionCatalog::from_topics(report.topics)
            .with_context(|| format!("Cannot build catalog from {}", source.describe()))?;

        tracing::info!(
            "Opened {} ({} topics, {} questions)",
            source.describe(),
            catalog.len(),
            catalog.question_count()
        );
        Ok(Self { catalog, skipped: report.skipped })
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> QuestionCatalog {
        self.catalog
    }

    pub fn summaries(&self) -> Vec<TopicSummary> {
        self.catalog
            .topics()
            .map(|t| TopicSummary {
                id:        t.id.clone(),
                title:     t.title(),
                questions: t.len(),
            })
            .collect()
    }

    pub fn topic(&self, topic_id: &str) -> Result<&Topic> {
        Ok(self.catalog.topic(topic_id)?)
    }

    pub fn record(&self, topic_id: &str, index: usize) -> Result<&QuestionRecord> {
        Ok(self.catalog.record(topic_id, index)?)
    }

    /// Run every shape check over the loaded records, and count
    /// every file that failed to load as a problem too.
    pub fn validate(&self) -> ValidationReport {
        let report = ValidationReport {
            violations: validator::validate_all(self.catalog.topics()),
            skipped:    self.skipped.clone(),
        };

        if report.is_clean() {
            tracing::info!(
                "All {} questions in {} topics are well formed",
                self.catalog.question_count(),
                self.catalog.len()
            );
        } else {
            tracing::debug!(
                "{} violation(s), {} unreadable file(s)",
                report.violations.len(),
                report.skipped.len()
            );
        }
        report
    }
}
