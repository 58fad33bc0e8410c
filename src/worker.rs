//! Worker generation.

use std::fmt;

use rand::Rng;

use crate::attributes::{AttributeDistribution, Attributes};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::names::NameLists;
use crate::title::infer_title;

/// Unique identifier for a candidate (its index in the pool)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worker#{}", self.0)
    }
}

/// A generated worker. Derived fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Worker {
    id: WorkerId,
    name: String,
    title: String,
    attributes: Attributes,
    score: u32,
    min_salary: u64,
}

impl Worker {
    /// Build a worker from known attributes, inferring its title.
    pub fn new<R: Rng>(id: WorkerId, name: String, attributes: Attributes, rng: &mut R) -> Self {
        let score = attributes.total();
        let title = infer_title(&attributes, rng).to_string();
        Worker {
            id,
            name,
            title,
            attributes,
            score,
            min_salary: min_salary(score),
        }
    }

    /// Generate a random worker.
    ///
    /// Draw order: the five attributes, then the name, then the title.
    pub fn generate<R: Rng>(
        id: WorkerId,
        dist: &AttributeDistribution,
        names: &NameLists,
        rng: &mut R,
    ) -> Self {
        let attributes = Attributes::random(dist, rng);
        let name = names.full_name(rng);
        Self::new(id, name, attributes, rng)
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Sum of the five attributes.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn min_salary(&self) -> u64 {
        self.min_salary
    }
}

/// Minimum salary for a score: `(score - 2) * ((score % 10) * 1000 + 10000)`.
///
/// Scores are at least 5 for generated workers; lower scores saturate to 0.
pub fn min_salary(score: u32) -> u64 {
    let score = u64::from(score);
    score.saturating_sub(2) * ((score % 10) * 1000 + 10_000)
}

/// Generate the candidate pool of `config.iters` workers.
pub fn generate_candidates<R: Rng>(
    config: &GeneratorConfig,
    names: &NameLists,
    rng: &mut R,
) -> Result<Vec<Worker>, GenerateError> {
    let dist = AttributeDistribution::new(config.mu, config.sigma)?;
    Ok((0..config.iters as u64)
        .map(|i| Worker::generate(WorkerId(i), &dist, names, rng))
        .collect())
}
