//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds the string
//! catalogue and named seed definitions. The registry is loaded from JSON and
//! provides deterministic seed lookups.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::StringTypeSeed;
use crate::validation::is_valid_label;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing the string catalogue and named seeds.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "catalogue": [{"brand": "Babolat", "model": "RPM Blast", "type": "polyester"}],
///     "seeds": [{"name": "test", "seed": 42, "stringCount": 2, "sessionCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.catalogue().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    catalogue: Vec<CatalogueEntry>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The catalogue is empty or holds an invalid label
    /// - The seeds array is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file through a capability handle on
    /// the parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let io_error = |message: String| RegistryError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("registry path must be a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.catalogue.is_empty() {
            return Err(RegistryError::EmptyCatalogue);
        }

        let catalogue = raw
            .catalogue
            .into_iter()
            .enumerate()
            .map(|(index, entry)| CatalogueEntry::validated(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition {
                name: s.name,
                seed: s.seed,
                string_count: s.string_count,
                session_count: s.session_count,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            catalogue,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the string catalogue entries generation picks from.
    #[must_use]
    pub fn catalogue(&self) -> &[CatalogueEntry] {
        &self.catalogue
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A catalogue string product that generated setups are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    brand: String,
    model: String,
    gauge: Option<String>,
    string_type: StringTypeSeed,
}

impl CatalogueEntry {
    fn validated(index: usize, raw: RawCatalogueEntry) -> Result<Self, RegistryError> {
        let invalid = |field: &'static str, value: &str| RegistryError::InvalidCatalogueEntry {
            index,
            field,
            value: value.to_owned(),
        };
        if !is_valid_label(&raw.brand) {
            return Err(invalid("brand", &raw.brand));
        }
        if !is_valid_label(&raw.model) {
            return Err(invalid("model", &raw.model));
        }
        if let Some(gauge) = raw.gauge.as_deref().filter(|gauge| !is_valid_label(gauge)) {
            return Err(invalid("gauge", gauge));
        }

        Ok(Self {
            brand: raw.brand,
            model: raw.model,
            gauge: raw.gauge,
            string_type: raw.string_type,
        })
    }

    /// Returns the manufacturer.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the product line.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the optional gauge label.
    #[must_use]
    pub fn gauge(&self) -> Option<&str> {
        self.gauge.as_deref()
    }

    /// Returns the material category.
    #[must_use]
    pub const fn string_type(&self) -> StringTypeSeed {
        self.string_type
    }
}

/// A named seed definition for deterministic dataset generation.
///
/// Each seed has a unique name, an RNG seed value, and the number of string
/// setups and sessions to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    string_count: usize,
    session_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition, typically to override registry counts.
    ///
    /// # Example
    ///
    /// ```
    /// use example_data::SeedDefinition;
    ///
    /// let seed = SeedDefinition::new("baseline-rally", 7, 2, 4);
    /// assert_eq!(seed.string_count(), 2);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        seed: u64,
        string_count: usize,
        session_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            seed,
            string_count,
            session_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of string setups to generate.
    #[must_use]
    pub const fn string_count(&self) -> usize {
        self.string_count
    }

    /// Returns the number of sessions to generate.
    #[must_use]
    pub const fn session_count(&self) -> usize {
        self.session_count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    catalogue: Vec<RawCatalogueEntry>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a catalogue entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogueEntry {
    brand: String,
    model: String,
    #[serde(default)]
    gauge: Option<String>,
    #[serde(rename = "type")]
    string_type: StringTypeSeed,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    string_count: usize,
    session_count: usize,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "catalogue": [
            {"brand": "Luxilon", "model": "ALU Power", "gauge": "1.25mm", "type": "polyester"},
            {"brand": "Wilson", "model": "Natural Gut", "type": "natural_gut"}
        ],
        "seeds": [
            {"name": "baseline-rally", "seed": 2026, "stringCount": 4, "sessionCount": 12},
            {"name": "clay-swing", "seed": 1234, "stringCount": 2, "sessionCount": 5}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.catalogue().len(), 2);
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn catalogue_entries_expose_parsed_fields() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let gut = registry.catalogue().get(1).expect("second entry");

        assert_eq!(gut.brand(), "Wilson");
        assert_eq!(gut.gauge(), None);
        assert_eq!(gut.string_type(), StringTypeSeed::NaturalGut);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("baseline-rally").expect("seed found");

        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.string_count(), 4);
        assert_eq!(seed.session_count(), 12);
    }

    #[test]
    fn returns_error_for_unknown_seed() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let result = registry.find_seed("unknown");

        assert_eq!(
            result,
            Err(RegistryError::SeedNotFound {
                name: "unknown".to_owned()
            })
        );
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::unknown_string_type(
        r#"{"version": 1, "catalogue": [{"brand": "A", "model": "B", "type": "kevlar"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "catalogue": [], "seeds": []}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::empty_catalogue(
        r#"{"version": 1, "catalogue": [], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#,
        RegistryError::EmptyCatalogue
    )]
    #[case::blank_model(
        r#"{"version": 1, "catalogue": [{"brand": "Head", "model": "  ", "type": "hybrid"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#,
        RegistryError::InvalidCatalogueEntry { index: 0, field: "model", value: "  ".to_owned() }
    )]
    #[case::empty_seeds(
        r#"{"version": 1, "catalogue": [{"brand": "Head", "model": "Lynx", "type": "polyester"}], "seeds": []}"#,
        RegistryError::EmptySeeds
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        let result = SeedRegistry::from_json(json);
        assert_eq!(result, Err(expected));
    }
}
