//! End-to-end generation: load inputs, generate candidates, sample, render.

use std::io::Write;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::names::NameLists;
use crate::render::write_population;
use crate::sampler::{sample_population, Population};
use crate::seeds::GeneratorSeeds;
use crate::worker::generate_candidates;

/// Everything a run needs, validated up front.
#[derive(Clone, Debug)]
pub struct Inputs {
    pub config: GeneratorConfig,
    pub names: NameLists,
}

impl Inputs {
    /// Load the config (or defaults) and the name lists.
    pub fn load(names_dir: &Path, config_path: Option<&Path>) -> Result<Self, GenerateError> {
        let config = match config_path {
            Some(path) => GeneratorConfig::load(path)?,
            None => {
                let config = GeneratorConfig::default();
                config.validate()?;
                config
            }
        };
        let names = NameLists::load_dir(names_dir)?;
        Ok(Self { config, names })
    }
}

/// Generate the candidate pool and sample the output population.
pub fn generate_population(
    config: &GeneratorConfig,
    names: &NameLists,
    seeds: &GeneratorSeeds,
) -> Result<Population, GenerateError> {
    let candidates = generate_candidates(config, names, &mut seeds.candidates_rng())?;
    Ok(sample_population(
        &candidates,
        &config.skill_levels,
        config.amount,
        config.overlap,
        &mut seeds.sampling_rng(),
    ))
}

/// Generate a population and write it to `out`.
pub fn run<W: Write>(
    inputs: &Inputs,
    seeds: &GeneratorSeeds,
    out: W,
) -> Result<Population, GenerateError> {
    let population = generate_population(&inputs.config, &inputs.names, seeds)?;
    write_population(out, &population.workers).map_err(|e| GenerateError::Output(e.to_string()))?;
    Ok(population)
}
