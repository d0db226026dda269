//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and dataset
//! generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and seed
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no string catalogue entries.
    #[error("registry contains no catalogue entries")]
    EmptyCatalogue,

    /// A catalogue entry carries a label that the backend would reject.
    #[error("invalid catalogue entry at index {index}: {field} '{value}'")]
    InvalidCatalogueEntry {
        /// Index of the offending entry in the catalogue array.
        index: usize,
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during dataset generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid location label after maximum retries.
    #[error("failed to generate valid location after {max_attempts} attempts")]
    LocationGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The registry contains no catalogue entries to pick strings from.
    #[error("registry contains no catalogue entries for selection")]
    NoCatalogueEntries,
}
