//! Job title inference.
//!
//! A worker's title comes from a pool chosen by its two highest attributes.

use rand::Rng;

use crate::attributes::{Attribute, Attributes};

/// Title pools, in matching priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TitlePool {
    /// Creativity and cleverness
    Technical,
    /// Cleverness and charisma
    BusinessDevelopment,
    /// Creativity and charisma
    CreativeMarketing,
    /// Creativity only
    Design,
    /// Cleverness only
    Engineering,
    /// Charisma only
    Sales,
    /// None of the above
    Generic,
}

impl TitlePool {
    pub fn all() -> &'static [TitlePool] {
        &[
            TitlePool::Technical,
            TitlePool::BusinessDevelopment,
            TitlePool::CreativeMarketing,
            TitlePool::Design,
            TitlePool::Engineering,
            TitlePool::Sales,
            TitlePool::Generic,
        ]
    }

    /// Select the pool for a set of attributes. Deterministic.
    pub fn classify(attrs: &Attributes) -> Self {
        let top = attrs.top_two();
        let creativity = top.contains(&Attribute::Creativity);
        let cleverness = top.contains(&Attribute::Cleverness);
        let charisma = top.contains(&Attribute::Charisma);

        if creativity && cleverness {
            TitlePool::Technical
        } else if cleverness && charisma {
            TitlePool::BusinessDevelopment
        } else if creativity && charisma {
            TitlePool::CreativeMarketing
        } else if creativity {
            TitlePool::Design
        } else if cleverness {
            TitlePool::Engineering
        } else if charisma {
            TitlePool::Sales
        } else {
            TitlePool::Generic
        }
    }

    /// Titles in this pool.
    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            TitlePool::Technical => &[
                "Frontend Developer",
                "Backend Developer",
                "Programmer",
                "Creative Technologist",
                "Interactive Developer",
                "UX Designer",
                "Software Engineer",
                "Hardware Engineer",
            ],
            TitlePool::BusinessDevelopment => &[
                "Business Developer",
                "Sales Associate",
                "Community Manager",
                "Product Manager",
            ],
            TitlePool::CreativeMarketing => &[
                "Creative Director",
                "Marketing Associate",
                "Public Relations Associate",
                "Visual Designer",
                "UI Designer",
                "Designer",
                "Product Manager",
            ],
            TitlePool::Design => &["Visual Designer", "Designer"],
            TitlePool::Engineering => &[
                "Hardware Engineer",
                "Software Engineer",
                "Developer",
                "Researcher",
            ],
            TitlePool::Sales => &["Sales Associate", "Public Relations Associate"],
            TitlePool::Generic => &["Programmer", "Designer", "MBA"],
        }
    }

    /// Draw a title uniformly from this pool.
    pub fn pick(&self, rng: &mut impl Rng) -> &'static str {
        let titles = self.titles();
        titles[rng.gen_range(0..titles.len())]
    }
}

/// Infer a title for a set of attributes.
pub fn infer_title(attrs: &Attributes, rng: &mut impl Rng) -> &'static str {
    TitlePool::classify(attrs).pick(rng)
}
