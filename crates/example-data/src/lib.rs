//! Deterministic example string and session data for demonstration purposes.
//!
//! This crate generates believable, reproducible tennis string setups and
//! playing sessions from a JSON seed registry. It is deliberately independent
//! of backend domain types to avoid circular dependencies; the backend maps
//! the generated seeds onto its own entities at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries (string catalogue plus named seeds) from JSON
//! - Deterministic dataset generation using named seeds
//! - Label validation matching backend constraints
//! - Lifecycle stages expressed as day offsets, anchored by the consumer
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_dataset};
//!
//! let json = r#"{
//!     "version": 1,
//!     "catalogue": [
//!         {"brand": "Luxilon", "model": "ALU Power", "gauge": "1.25mm", "type": "polyester"}
//!     ],
//!     "seeds": [{"name": "test-seed", "seed": 42, "stringCount": 3, "sessionCount": 6}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let dataset = generate_example_dataset(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(dataset.strings.len(), 3);
//! assert_eq!(dataset.sessions.len(), 6);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_dataset;
pub use registry::{CatalogueEntry, SeedDefinition, SeedRegistry};
pub use seed::{
    CourtSurfaceSeed, ExampleDataset, ExampleSessionSeed, ExampleStringSeed, LifecycleStageSeed,
    SessionTypeSeed, StringTypeSeed,
};
pub use validation::{
    FEELING_RATING_MAX, FEELING_RATING_MIN, LABEL_MAX, is_valid_feeling_rating, is_valid_label,
};
