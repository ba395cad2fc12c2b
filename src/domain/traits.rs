// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer never cares where questions come from.
// It asks a QuestionSource for topics and builds a catalog.
//
// Implementations:
//   - EmbeddedSource → the corpus compiled into the binary
//   - DirLoader      → a directory of .json / .yaml topic files
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use crate::domain::topic::Topic;

/// A topic file that could not be loaded, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path:  PathBuf,
    pub error: String,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Everything a source produced: the topics it could load and
/// the files it had to skip.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub topics:  Vec<Topic>,
    pub skipped: Vec<SkippedFile>,
}

// ─── QuestionSource ───────────────────────────────────────────────────────────
/// Any component that can load topic files.
pub trait QuestionSource {
    /// Load every topic available from this source.
    fn load_all(&self) -> Result<Vec<Topic>>;

    /// Load topics and report files that were skipped.
    /// Sources that never skip anything can keep the default.
    fn load_report(&self) -> Result<LoadReport> {
        Ok(LoadReport {
            topics:  self.load_all()?,
            skipped: Vec::new(),
        })
    }

    /// Short label used in log lines ("embedded", a directory path, ...)
    fn describe(&self) -> String;
}
