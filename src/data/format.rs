// ============================================================
// Layer 4 — Topic File Formats
// ============================================================
// A topic file is a list of question records. The corpus is
// stored as JSON; YAML is accepted and produced as well. The
// choice of format carries no meaning: both encode exactly
// the three named fields of every record, in order.

use std::path::Path;

use thiserror::Error;

use crate::domain::question::QuestionRecord;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialisation formats understood for topic files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicFormat {
    Json,
    Yaml,
}

impl TopicFormat {
    /// Pick the format from a file extension.
    /// Returns None for anything that isn't a topic file.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json")         => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _                    => None,
        }
    }

    /// Extension written by the exporter
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Parse the text of a topic file into records.
    pub fn parse(self, text: &str) -> Result<Vec<QuestionRecord>, FormatError> {
        Ok(match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
        })
    }

    /// Render records as the text of a topic file.
    pub fn render(self, records: &[QuestionRecord]) -> Result<String, FormatError> {
        Ok(match self {
            Self::Json => {
                let mut s = serde_json::to_string_pretty(records)?;
                s.push('\n');
                s
            }
            Self::Yaml => serde_yaml::to_string(records)?,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(TopicFormat::from_path(Path::new("a/fft.json")), Some(TopicFormat::Json));
        assert_eq!(TopicFormat::from_path(Path::new("fft.yml")),    Some(TopicFormat::Yaml));
        assert_eq!(TopicFormat::from_path(Path::new("fft.py")),     None);
        assert_eq!(TopicFormat::from_path(Path::new("README")),     None);
    }

    #[test]
    fn test_yaml_uses_authored_keys() {
        let recs = vec![QuestionRecord::new("q", "e", ["f"])];
        let yaml = TopicFormat::Yaml.render(&recs).unwrap();
        assert!(yaml.contains("Main question: q"));
        assert!(yaml.contains("Follow-up questions:"));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            TopicFormat::Json.parse("[{\"Main question\": 1}]"),
            Err(FormatError::Json(_))
        ));
    }
}
