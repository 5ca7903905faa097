use super::SessionError;
use crate::models::QuestionRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Session pool drawn from at random without replacement
pub struct Sampler<R> {
    /// Remaining records with their position in the initial pool
    pool: Vec<(usize, QuestionRecord)>,
    rng: R,
}

impl Sampler<StdRng> {
    /// Sampler seeded from the operating system
    pub fn from_os_rng(questions: Vec<QuestionRecord>) -> Self {
        Self::new(questions, StdRng::from_os_rng())
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(questions: Vec<QuestionRecord>, rng: R) -> Self {
        Self {
            pool: questions.into_iter().enumerate().collect(),
            rng,
        }
    }

    /// Records left in the pool
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Remove a uniformly chosen record from the pool and stamp its index.
    ///
    /// The index is the record's position in the pool before any draw, so no
    /// two records of a session share one.
    pub fn sample(&mut self) -> Result<QuestionRecord, SessionError> {
        if self.pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }

        let slot = self.rng.random_range(0..self.pool.len());
        let (index, record) = self.pool.remove(slot);
        tracing::debug!(index, slot, remaining = self.pool.len(), "drew question");
        Ok(record.with_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord::new(format!("{}. Question", i + 1), "", vec!["A".to_string()], ""))
            .collect()
    }

    #[test]
    fn test_draws_without_replacement() {
        let mut sampler = Sampler::new(pool(10), StdRng::seed_from_u64(7));
        let mut texts = HashSet::new();
        let mut indices = HashSet::new();

        for k in 1..=10 {
            let record = sampler.sample().unwrap();
            assert_eq!(sampler.len(), 10 - k);
            assert!(texts.insert(record.question_text.clone()), "record drawn twice");
            assert!(indices.insert(record.index.unwrap()), "index reused");
        }
        assert!(sampler.is_empty());
    }

    #[test]
    fn test_index_matches_initial_position() {
        let mut sampler = Sampler::new(pool(5), StdRng::seed_from_u64(42));
        while let Ok(record) = sampler.sample() {
            let index = record.index.unwrap();
            assert_eq!(record.question_text, format!("{}. Question", index + 1));
        }
    }

    #[test]
    fn test_empty_pool_errors() {
        let mut sampler = Sampler::new(Vec::new(), StdRng::seed_from_u64(1));
        assert!(matches!(sampler.sample(), Err(SessionError::EmptyPool)));
    }

    #[test]
    fn test_exhausted_pool_errors() {
        let mut sampler = Sampler::new(pool(1), StdRng::seed_from_u64(1));
        assert!(sampler.sample().is_ok());
        assert!(matches!(sampler.sample(), Err(SessionError::EmptyPool)));
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let mut sampler = Sampler::new(pool(6), StdRng::seed_from_u64(seed));
            std::iter::from_fn(|| sampler.sample().ok())
                .map(|record| record.index)
                .collect::<Vec<_>>()
        };
        assert_eq!(order(3), order(3));
    }
}
