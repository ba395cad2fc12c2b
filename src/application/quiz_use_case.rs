// ============================================================
// Layer 2 — Quiz Use Case
// ============================================================
// Draws random questions for a practice drill, from one topic
// or from the whole bank.
//
// Draws are without replacement: the same record never shows
// up twice in one quiz. Asking for more questions than the
// pool holds returns the whole pool, shuffled.
//
// Passing a seed makes the draw reproducible, which is handy
// for sharing a quiz ("run with --seed 42").
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::{catalog::QuestionCatalog, question::QuestionRecord};

/// One drawn question, with where it came from
#[derive(Debug, Clone)]
pub struct QuizItem<'a> {
    pub topic:  &'a str,
    pub index:  usize,
    pub record: &'a QuestionRecord,
}

pub struct QuizUseCase<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> QuizUseCase<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Draw up to `count` distinct questions.
    pub fn draw(
        &self,
        topic: Option<&str>,
        count: usize,
        seed:  Option<u64>,
    ) -> Result<Vec<QuizItem<'a>>> {
        if count == 0 {
            bail!("A quiz needs at least one question");
        }

        let topics: Vec<_> = match topic {
            Some(id) => vec![self.catalog.topic(id)?],
            None     => self.catalog.topics().collect(),
        };

        let mut pool: Vec<QuizItem<'a>> = topics
            .into_iter()
            .flat_map(|t| {
                t.questions.iter().enumerate().map(move |(index, record)| QuizItem {
                    topic: t.id.as_str(),
                    index,
                    record,
                })
            })
            .collect();

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None    => StdRng::from_entropy(),
        };
        pool.shuffle(&mut rng);

        if count > pool.len() {
            tracing::debug!(
                "Requested {} questions but only {} available",
                count,
                pool.len()
            );
        }
        pool.truncate(count);

        Ok(pool)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog_use_case::CatalogUseCase;
    use std::collections::HashSet;

    fn catalog() -> QuestionCatalog {
        CatalogUseCase::open(None).unwrap().into_catalog()
    }

    #[test]
    fn test_same_seed_same_quiz() {
        let cat = catalog();
        let uc  = QuizUseCase::new(&cat);
        let a: Vec<_> = uc.draw(None, 5, Some(42)).unwrap().iter().map(|q| (q.topic, q.index)).collect();
        let b: Vec<_> = uc.draw(None, 5, Some(42)).unwrap().iter().map(|q| (q.topic, q.index)).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_no_repeats_and_pool_cap() {
        let cat   = catalog();
        let items = QuizUseCase::new(&cat).draw(Some("broadcasting"), 50, Some(7)).unwrap();
        assert_eq!(items.len(), 10);

        let distinct: HashSet<usize> = items.iter().map(|q| q.index).collect();
        assert_eq!(distinct.len(), 10);
        assert!(items.iter().all(|q| q.topic == "broadcasting"));
    }

    #[test]
    fn test_zero_count_rejected() {
        let cat = catalog();
        assert!(QuizUseCase::new(&cat).draw(None, 0, None).is_err());
    }

    #[test]
    fn test_unknown_topic() {
        let cat = catalog();
        assert!(QuizUseCase::new(&cat).draw(Some("nope"), 3, None).is_err());
    }
}
