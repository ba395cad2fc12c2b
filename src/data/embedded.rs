// ============================================================
// Layer 4 — Embedded Corpus
// ============================================================
// The 23 NumPy topic files are compiled into the binary with
// include_str!, so the tool works with no files on disk.
//
// Unlike DirLoader, a malformed file here is a hard error:
// the corpus ships with the crate and must always parse.

use anyhow::{Context, Result};

use crate::data::format::TopicFormat;
use crate::domain::topic::Topic;
use crate::domain::traits::QuestionSource;

macro_rules! topic_file {
    ($id:literal) => {
        ($id, include_str!(concat!("../../data/questions/", $id, ".json")))
    };
}

/// (topic id, JSON text) for every built-in topic
const TOPIC_FILES: &[(&str, &str)] = &[
    topic_file!("advanced_indexing"),
    topic_file!("array_attributes"),
    topic_file!("array_indexing_and_slicing"),
    topic_file!("array_manipulation"),
    topic_file!("broadcasting"),
    topic_file!("creating_arrays"),
    topic_file!("element_wise_operations"),
    topic_file!("fast_fourier_transform"),
    topic_file!("integration_with_pandas"),
    topic_file!("integration_with_scipy"),
    topic_file!("introduction_to_numpy"),
    topic_file!("linear_algebra"),
    topic_file!("masked_arrays"),
    topic_file!("mathematical_constants"),
    topic_file!("mathematical_functions"),
    topic_file!("numpy_and_c_extensions"),
    topic_file!("numpy_installation"),
    topic_file!("parallel_computing"),
    topic_file!("performance_optimization"),
    topic_file!("random_number_generation"),
    topic_file!("saving_and_loading_arrays"),
    topic_file!("statistical_functions"),
    topic_file!("testing_and_debugging"),
];

/// The corpus bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionSource for EmbeddedSource {
    fn load_all(&self) -> Result<Vec<Topic>> {
        TOPIC_FILES
            .iter()
            .map(|(id, text)| {
                let questions = TopicFormat::Json
                    .parse(text)
                    .with_context(|| format!("Embedded topic '{id}' is malformed"))?;
                tracing::debug!("Loaded embedded topic '{}' ({} questions)", id, questions.len());
                Ok(Topic::new(id, questions))
            })
            .collect()
    }

    fn describe(&self) -> String {
        "embedded corpus".to_string()
    }
}
