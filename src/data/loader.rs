// ============================================================
// Layer 4 — Topic Directory Loader
// ============================================================
// Loads topic files from a directory on disk, so a user can
// point the tool at their own question bank instead of the
// embedded one.
//
// Layout expected:
//   questions/
//     broadcasting.json        ← topic id "broadcasting"
//     linear_algebra.yaml      ← topic id "linear_algebra"
//     notes.txt                ← ignored (not a topic file)
//
// One bad file never sinks the whole directory: it is logged,
// recorded in the LoadReport, and the remaining topics still
// load.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::format::TopicFormat;
use crate::domain::topic::Topic;
use crate::domain::traits::{LoadReport, QuestionSource, SkippedFile};

/// Loads every .json / .yaml / .yml file in a directory as a topic.
pub struct DirLoader {
    /// Path to the directory containing topic files
    dir: PathBuf,
}

impl DirLoader {
    /// Create a new DirLoader pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl QuestionSource for DirLoader {
    fn load_all(&self) -> Result<Vec<Topic>> {
        Ok(self.load_report()?.topics)
    }

    fn load_report(&self) -> Result<LoadReport> {
        // A missing directory yields an empty bank rather than an error
        if !self.dir.exists() {
            tracing::warn!(
                "Question directory '{}' does not exist, no topics loaded",
                self.dir.display()
            );
            return Ok(LoadReport::default());
        }

        let mut report = LoadReport::default();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();

            let Some(format) = TopicFormat::from_path(&path) else {
                continue;
            };

            match load_topic_file(&path, format) {
                Ok(topic) => {
                    tracing::debug!("Loaded: {} ({} questions)", topic.id, topic.len());
                    report.topics.push(topic);
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                    report.skipped.push(SkippedFile {
                        path,
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        // read_dir order is platform dependent
        report.topics.sort_by(|a, b| a.id.cmp(&b.id));
        report.skipped.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            "Loaded {} topics from '{}' ({} skipped)",
            report.topics.len(),
            self.dir.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Read and parse a single topic file. The file stem is the topic id.
fn load_topic_file(path: &Path, format: TopicFormat) -> Result<Topic> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let questions = format
        .parse(&text)
        .with_context(|| format!("Cannot parse '{}'", path.display()))?;

    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("No usable file name in '{}'", path.display()))?;

    Ok(Topic::new(id, questions))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const ONE_RECORD_JSON: &str = r#"[
        {
            "Main question": "What is an ndarray?",
            "Explanation": "An N-dimensional array.",
            "Follow-up questions": ["What is its dtype?"]
        }
    ]"#;

    const ONE_RECORD_YAML: &str = "\
- Main question: What is a dtype?
  Explanation: The element type of an array.
  Follow-up questions:
    - Name two dtypes.
";

    #[test]
    fn test_missing_dir_is_empty() {
        let loader = DirLoader::new("/definitely/not/a/real/dir");
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_loads_json_and_yaml_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ndarray.json"), ONE_RECORD_JSON).unwrap();
        fs::write(dir.path().join("Data-Types.yml"), ONE_RECORD_YAML).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a topic").unwrap();

        let topics = DirLoader::new(dir.path()).load_all().unwrap();
        let ids: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["data_types", "ndarray"]);
        assert_eq!(topics[0].questions[0].follow_up_questions, vec!["Name two dtypes."]);
    }

    #[test]
    fn test_skips_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), ONE_RECORD_JSON).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let topics = DirLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].id, "good");
    }

    #[test]
    fn test_report_lists_skipped_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), ONE_RECORD_JSON).unwrap();
        // Record without its follow-up list never parses
        fs::write(
            dir.path().join("broken.json"),
            r#"[{"Main question": "q", "Explanation": "e"}]"#,
        )
        .unwrap();

        let report = DirLoader::new(dir.path()).load_report().unwrap();
        assert_eq!(report.topics.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, dir.path().join("broken.json"));
        assert!(report.skipped[0].error.contains("Follow-up questions"));
    }
}
