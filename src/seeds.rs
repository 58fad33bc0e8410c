//! Seed management for worker generation
//!
//! Each stage draws from its own RNG stream derived from a master seed, so a
//! change to how one stage consumes randomness leaves the others untouched.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeds for the generation stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Candidate pool generation (attributes, names, titles)
    pub candidates: u64,
    /// Per-tier shuffling
    pub sampling: u64,
}

impl GeneratorSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            candidates: derive_seed(master, "candidates"),
            sampling: derive_seed(master, "sampling"),
        }
    }

    pub fn candidates_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.candidates)
    }

    pub fn sampling_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.sampling)
    }
}

/// Derive a sub-seed from a master seed and a stage name.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for GeneratorSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GeneratorSeeds {{ master: {}, candidates: {}, sampling: {} }}",
            self.master, self.candidates, self.sampling,
        )
    }
}
