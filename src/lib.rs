//! A read-only bank of NumPy interview questions.
//!
//! Topics (broadcasting, linear algebra, FFT, ...) are ordered lists of
//! [`QuestionRecord`]s. The built-in corpus is compiled into the crate:
//!
//! ```
//! use numpy_qa_bank::{EmbeddedSource, QuestionCatalog, QuestionSource};
//!
//! let topics  = EmbeddedSource::new().load_all().unwrap();
//! let catalog = QuestionCatalog::from_topics(topics).unwrap();
//! assert_eq!(catalog.get("broadcasting").unwrap().len(), 10);
//! assert!(catalog.get("no_such_topic").is_err());
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::embedded::EmbeddedSource;
pub use data::loader::DirLoader;
pub use domain::catalog::{CatalogError, QuestionCatalog};
pub use domain::question::QuestionRecord;
pub use domain::topic::Topic;
pub use domain::traits::QuestionSource;
