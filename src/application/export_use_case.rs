// ============================================================
// Layer 2 — Export Use Case
// ============================================================
// Re-serialises topics as JSON or YAML, either to a string
// (for printing one topic) or to files in a directory.
//
// The special target "all" exports every topic.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::format::TopicFormat;
use crate::domain::{catalog::QuestionCatalog, topic::Topic};
use crate::infra::exporter::TopicExporter;

/// Target name that selects every topic
pub const ALL_TOPICS: &str = "all";

pub struct ExportUseCase<'a> {
    catalog: &'a QuestionCatalog,
    format:  TopicFormat,
}

impl<'a> ExportUseCase<'a> {
    pub fn new(catalog: &'a QuestionCatalog, format: TopicFormat) -> Self {
        Self { catalog, format }
    }

    /// Render a single topic as text.
    pub fn render(&self, topic_id: &str) -> Result<String> {
        let topic = self.catalog.topic(topic_id)?;
        self.format
            .render(&topic.questions)
            .with_context(|| format!("Cannot render topic '{}'", topic.id))
    }

    /// Write `target` (a topic id, or "all") into `dir`.
    /// Returns the paths written, in topic order.
    pub fn write(&self, target: &str, dir: PathBuf) -> Result<Vec<PathBuf>> {
        let topics = self.select(target)?;
        let exporter = TopicExporter::new(dir, self.format)?;

        let paths = topics
            .into_iter()
            .map(|t| exporter.write(t))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Exported {} topic(s)", paths.len());
        Ok(paths)
    }

    fn select(&self, target: &str) -> Result<Vec<&'a Topic>> {
        if target.eq_ignore_ascii_case(ALL_TOPICS) {
            Ok(self.catalog.topics().collect())
        } else {
            Ok(vec![self.catalog.topic(target)?])
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog_use_case::CatalogUseCase;
    use crate::domain::question::QuestionRecord;

    fn catalog() -> QuestionCatalog {
        CatalogUseCase::open(None).unwrap().into_catalog()
    }

    #[test]
    fn test_render_round_trips() {
        let cat  = catalog();
        let json = ExportUseCase::new(&cat, TopicFormat::Json).render("linear_algebra").unwrap();
        let back: Vec<QuestionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), cat.get("linear_algebra").unwrap());
    }

    #[test]
    fn test_export_all_then_reload_is_identical() {
        let cat = catalog();
        let dir = tempfile::tempdir().unwrap();

        let paths = ExportUseCase::new(&cat, TopicFormat::Yaml)
            .write("all", dir.path().to_path_buf())
            .unwrap();
        assert_eq!(paths.len(), 23);

        let reloaded = CatalogUseCase::open(Some(dir.path().to_path_buf()))
            .unwrap()
            .into_catalog();
        for topic in cat.topics() {
            assert_eq!(reloaded.topic(&topic.id).unwrap(), topic);
        }
    }

    #[test]
    fn test_unknown_target() {
        let cat = catalog();
        let dir = tempfile::tempdir().unwrap();
        assert!(ExportUseCase::new(&cat, TopicFormat::Json)
            .write("nope", dir.path().to_path_buf())
            .is_err());
    }
}
