// ============================================================
// Layer 6 — Topic Exporter
// ============================================================
// Writes topics to disk as JSON or YAML and reads them back.
//
// File naming convention:
//   out/
//     broadcasting.json
//     linear_algebra.json
//     ...
//
// An exported directory is itself a valid --data-dir: loading
// it back gives records identical field for field, in order.

use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;

use crate::data::format::{FormatError, TopicFormat};
use crate::domain::topic::Topic;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write '{path}': {source}")]
    Write {
        path:   PathBuf,
        source: io::Error,
    },
    #[error("cannot read '{path}': {source}")]
    Read {
        path:   PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Saves topics into one directory, one file per topic.
pub struct TopicExporter {
    /// Directory the files are written to
    dir:    PathBuf,
    format: TopicFormat,
}

impl TopicExporter {
    /// Create a new TopicExporter.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>, format: TopicFormat) -> Result<Self, ExportError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ExportError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir, format })
    }

    /// Path the given topic is (or would be) written to
    pub fn path_for(&self, topic_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", topic_id, self.format.extension()))
    }

    /// Write one topic, replacing any earlier export of it.
    pub fn write(&self, topic: &Topic) -> Result<PathBuf, ExportError> {
        let path = self.path_for(&topic.id);
        let text = self.format.render(&topic.questions)?;

        fs::write(&path, text).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} questions to '{}'", topic.len(), path.display());
        Ok(path)
    }

    /// Read a previously exported topic back.
    pub fn read(&self, topic_id: &str) -> Result<Topic, ExportError> {
        let path = self.path_for(topic_id);
        read_topic(&path, topic_id, self.format)
    }
}

fn read_topic(path: &Path, topic_id: &str, format: TopicFormat) -> Result<Topic, ExportError> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Topic::new(topic_id, format.parse(&text)?))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded::EmbeddedSource;
    use crate::domain::traits::QuestionSource;

    fn broadcasting() -> Topic {
        EmbeddedSource::new()
            .load_all()
            .unwrap()
            .into_iter()
            .find(|t| t.id == "broadcasting")
            .unwrap()
    }

    #[test]
    fn test_json_round_trip() {
        let dir      = tempfile::tempdir().unwrap();
        let exporter = TopicExporter::new(dir.path(), TopicFormat::Json).unwrap();
        let topic    = broadcasting();

        let path = exporter.write(&topic).unwrap();
        assert_eq!(path, dir.path().join("broadcasting.json"));
        assert_eq!(exporter.read("broadcasting").unwrap(), topic);
    }

    #[test]
    fn test_yaml_round_trip_nested_dir() {
        let dir      = tempfile::tempdir().unwrap();
        let exporter = TopicExporter::new(dir.path().join("a/b"), TopicFormat::Yaml).unwrap();
        let topic    = broadcasting();

        exporter.write(&topic).unwrap();
        assert_eq!(exporter.read("broadcasting").unwrap(), topic);
    }

    #[test]
    fn test_read_missing_file() {
        let dir      = tempfile::tempdir().unwrap();
        let exporter = TopicExporter::new(dir.path(), TopicFormat::Json).unwrap();
        assert!(matches!(exporter.read("nope"), Err(ExportError::Read { .. })));
    }
}
