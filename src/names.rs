//! Name lists for worker generation.
//!
//! Three plain-text lists (male first names, female first names, last names),
//! one name per line, read from a single directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::GenerateError;
use crate::render::FIELD_DELIMITER;

pub const MALE_NAMES_FILE: &str = "male_names.txt";
pub const FEMALE_NAMES_FILE: &str = "female_names.txt";
pub const LAST_NAMES_FILE: &str = "last_names.txt";

/// Chance a worker's first name is drawn from the male list.
pub const MALE_NAME_CHANCE: f64 = 0.7;

/// An ordered, non-empty list of names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Build a list from in-memory names. Returns `None` if `names` is empty.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    /// Read a list from a file. Blank lines are skipped; a name containing the
    /// output delimiter is rejected.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GenerateError::MissingNameFile {
                path: path.to_path_buf(),
            },
            _ => GenerateError::NameFileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let mut names = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            if name.contains(FIELD_DELIMITER) {
                return Err(GenerateError::InvalidName {
                    path: path.to_path_buf(),
                    line: i + 1,
                    name: name.to_string(),
                });
            }
            names.push(name.to_string());
        }

        Self::from_names(names).ok_or_else(|| GenerateError::EmptyNameList {
            path: path.to_path_buf(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Pick a name uniformly at random.
    pub fn choose<'a>(&'a self, rng: &mut impl Rng) -> &'a str {
        &self.names[rng.gen_range(0..self.names.len())]
    }
}

/// The three name lists a run draws from.
#[derive(Clone, Debug)]
pub struct NameLists {
    pub male: NameList,
    pub female: NameList,
    pub last: NameList,
}

impl NameLists {
    pub fn new(male: NameList, female: NameList, last: NameList) -> Self {
        Self { male, female, last }
    }

    /// Load all three lists from `dir`.
    ///
    /// Every path is checked before any file is read, so a missing list is
    /// reported without partially loading the others.
    pub fn load_dir(dir: &Path) -> Result<Self, GenerateError> {
        let paths = Self::paths(dir);
        if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
            return Err(GenerateError::MissingNameFile {
                path: missing.clone(),
            });
        }

        let [male, female, last] = paths;
        Ok(Self {
            male: NameList::load(&male)?,
            female: NameList::load(&female)?,
            last: NameList::load(&last)?,
        })
    }

    /// Paths of the male, female and last name files in `dir`.
    pub fn paths(dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(MALE_NAMES_FILE),
            dir.join(FEMALE_NAMES_FILE),
            dir.join(LAST_NAMES_FILE),
        ]
    }

    /// Generate a full "First Last" name.
    pub fn full_name(&self, rng: &mut impl Rng) -> String {
        let first_names = if rng.gen_bool(MALE_NAME_CHANCE) {
            &self.male
        } else {
            &self.female
        };
        let first = first_names.choose(rng);
        let last = self.last.choose(rng);
        format!("{} {}", first, last)
    }
}
