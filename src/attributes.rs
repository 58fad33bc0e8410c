//! Worker attributes.
//!
//! Five integer attributes, each drawn from a normal distribution and
//! floored at 1.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::GenerateError;

/// Largest value a single attribute can take; five of them still fit a `u32` score.
pub const MAX_ATTRIBUTE: u32 = u32::MAX / 5;

/// The attributes every worker has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Happiness,
    Productivity,
    Charisma,
    Creativity,
    Cleverness,
}

impl Attribute {
    /// All attributes in declaration order. This order is the tie-break
    /// when ranking attributes by value.
    pub const ALL: [Attribute; 5] = [
        Attribute::Happiness,
        Attribute::Productivity,
        Attribute::Charisma,
        Attribute::Creativity,
        Attribute::Cleverness,
    ];
}

/// A worker's attribute values (each at least 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attributes {
    pub happiness: u32,
    pub productivity: u32,
    pub charisma: u32,
    pub creativity: u32,
    pub cleverness: u32,
}

impl Attributes {
    /// Build attributes directly, clamping each value to `1..=MAX_ATTRIBUTE`.
    pub fn new(happiness: u32, productivity: u32, charisma: u32, creativity: u32, cleverness: u32) -> Self {
        Attributes {
            happiness: happiness.clamp(1, MAX_ATTRIBUTE),
            productivity: productivity.clamp(1, MAX_ATTRIBUTE),
            charisma: charisma.clamp(1, MAX_ATTRIBUTE),
            creativity: creativity.clamp(1, MAX_ATTRIBUTE),
            cleverness: cleverness.clamp(1, MAX_ATTRIBUTE),
        }
    }

    /// Draw each attribute from `dist` in declaration order.
    pub fn random<R: Rng>(dist: &AttributeDistribution, rng: &mut R) -> Self {
        Attributes {
            happiness: dist.sample(rng),
            productivity: dist.sample(rng),
            charisma: dist.sample(rng),
            creativity: dist.sample(rng),
            cleverness: dist.sample(rng),
        }
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Happiness => self.happiness,
            Attribute::Productivity => self.productivity,
            Attribute::Charisma => self.charisma,
            Attribute::Creativity => self.creativity,
            Attribute::Cleverness => self.cleverness,
        }
    }

    /// Values in declaration order.
    pub fn values(&self) -> [u32; 5] {
        Attribute::ALL.map(|a| self.get(a))
    }

    /// Sum of all attribute values.
    pub fn total(&self) -> u32 {
        self.values().iter().sum()
    }

    /// Attributes sorted by value, highest first. Ties keep declaration order.
    pub fn ranked(&self) -> [Attribute; 5] {
        let mut ranked = Attribute::ALL;
        // sort_by is stable
        ranked.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        ranked
    }

    /// The two highest-ranked attributes.
    pub fn top_two(&self) -> [Attribute; 2] {
        let ranked = self.ranked();
        [ranked[0], ranked[1]]
    }
}

/// Normal distribution of raw attribute values.
#[derive(Clone, Copy, Debug)]
pub struct AttributeDistribution {
    normal: Normal<f64>,
}

impl AttributeDistribution {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, GenerateError> {
        let normal = Normal::new(mu, sigma).map_err(|e| {
            GenerateError::InvalidConfig(format!("attribute distribution N({}, {}): {}", mu, sigma, e))
        })?;
        Ok(Self { normal })
    }

    /// One attribute value: a normal draw truncated toward zero, clamped to
    /// `1..=MAX_ATTRIBUTE`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        let raw = self.normal.sample(rng).trunc();
        if raw < 1.0 {
            1
        } else if raw >= MAX_ATTRIBUTE as f64 {
            MAX_ATTRIBUTE
        } else {
            raw as u32
        }
    }
}
