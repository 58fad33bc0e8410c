//! Error types for worker generation.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading inputs or writing the population.
#[derive(Debug)]
pub enum GenerateError {
    /// A name list file does not exist.
    MissingNameFile { path: PathBuf },
    /// A name list file exists but could not be read.
    NameFileRead { path: PathBuf, message: String },
    /// A name contains the output field delimiter.
    InvalidName { path: PathBuf, line: usize, name: String },
    /// A name list contained no usable names.
    EmptyNameList { path: PathBuf },
    /// The config file could not be read.
    ConfigRead { path: PathBuf, message: String },
    /// The config file is not valid JSON for `GeneratorConfig`.
    ConfigParse { path: PathBuf, message: String },
    /// The configured constants are out of range.
    InvalidConfig(String),
    /// Writing the rendered population failed.
    Output(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MissingNameFile { path } => {
                write!(f, "Name list not found: {}", path.display())
            }
            GenerateError::NameFileRead { path, message } => {
                write!(f, "Failed to read name list {}: {}", path.display(), message)
            }
            GenerateError::InvalidName { path, line, name } => {
                write!(f, "Name '{}' at {}:{} contains '|'", name, path.display(), line)
            }
            GenerateError::EmptyNameList { path } => {
                write!(f, "Name list is empty: {}", path.display())
            }
            GenerateError::ConfigRead { path, message } => {
                write!(f, "Failed to read config {}: {}", path.display(), message)
            }
            GenerateError::ConfigParse { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
            GenerateError::InvalidConfig(e) => write!(f, "Invalid config: {}", e),
            GenerateError::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}
