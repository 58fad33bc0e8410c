//! Worker population generator library
//!
//! Re-exports modules for use by the binary and integration tests.

pub mod attributes;
pub mod config;
pub mod error;
pub mod names;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod seeds;
pub mod title;
pub mod worker;

pub use config::{GeneratorConfig, SkillLevel, TierOverlap};
pub use error::GenerateError;
pub use seeds::GeneratorSeeds;
pub use worker::{Worker, WorkerId};
