//! Integration tests for the seed registry.
//!
//! These tests validate registry parsing, seed lookups, catalogue validation,
//! and file I/O behaviour.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;

use example_data::{RegistryError, SeedDefinition, SeedRegistry, StringTypeSeed};
use rstest::rstest;

const VALID_JSON: &str = r#"{
    "version": 1,
    "catalogue": [
        {"brand": "Luxilon", "model": "ALU Power", "gauge": "1.25mm", "type": "polyester"},
        {"brand": "Head", "model": "Hawk Touch", "type": "polyester"},
        {"brand": "Wilson", "model": "Champions Choice", "gauge": "1.30mm", "type": "hybrid"}
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
    assert_eq!(registry.catalogue().len(), 3);
    assert_eq!(registry.seeds().len(), 2);
}

#[test]
fn catalogue_preserves_order_and_types() {
    let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
    let brands: Vec<_> = registry.catalogue().iter().map(|e| e.brand()).collect();

    assert_eq!(brands, ["Luxilon", "Head", "Wilson"]);
    assert_eq!(
        registry.catalogue().last().map(|e| e.string_type()),
        Some(StringTypeSeed::Hybrid)
    );
}

#[test]
fn seed_definition_getters_work() {
    let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
    let seed = registry.find_seed("clay-swing").expect("seed found");

    assert_eq!(seed.name(), "clay-swing");
    assert_eq!(seed.seed(), 1234);
    assert_eq!(seed.string_count(), 2);
    assert_eq!(seed.session_count(), 5);
}

#[test]
fn seed_definition_new_matches_parsed_definition() {
    let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
    let parsed = registry.find_seed("baseline-rally").expect("seed found");

    assert_eq!(parsed, &SeedDefinition::new("baseline-rally", 2026, 4, 12));
}

/// Tests that use pattern matching for parse errors (message content varies).
#[rstest]
#[case::malformed_json("not valid json")]
#[case::missing_version(
    r#"{"catalogue": [{"brand": "A", "model": "B", "type": "hybrid"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#
)]
#[case::missing_session_count(
    r#"{"version": 1, "catalogue": [{"brand": "A", "model": "B", "type": "hybrid"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1}]}"#
)]
fn rejects_json_with_parse_error(#[case] json: &str) {
    let result = SeedRegistry::from_json(json);
    assert!(matches!(result, Err(RegistryError::ParseError { .. })));
}

/// Tests that check exact error variants.
#[rstest]
#[case::unsupported_version(
    r#"{"version": 2, "catalogue": [{"brand": "A", "model": "B", "type": "hybrid"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#,
    RegistryError::UnsupportedVersion { expected: 1, actual: 2 }
)]
#[case::blank_brand(
    r#"{"version": 1, "catalogue": [{"brand": "", "model": "B", "type": "hybrid"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#,
    RegistryError::InvalidCatalogueEntry { index: 0, field: "brand", value: String::new() }
)]
#[case::control_character_in_gauge(
    r#"{"version": 1, "catalogue": [{"brand": "A", "model": "B", "type": "hybrid"}, {"brand": "C", "model": "D", "gauge": "1.25\tmm", "type": "polyester"}], "seeds": [{"name": "a", "seed": 1, "stringCount": 1, "sessionCount": 1}]}"#,
    RegistryError::InvalidCatalogueEntry { index: 1, field: "gauge", value: "1.25\tmm".to_owned() }
)]
#[case::empty_seeds(
    r#"{"version": 1, "catalogue": [{"brand": "A", "model": "B", "type": "hybrid"}], "seeds": []}"#,
    RegistryError::EmptySeeds
)]
fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
    let result = SeedRegistry::from_json(json);
    assert_eq!(result, Err(expected));
}

#[test]
fn loads_registry_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("seeds.json");
    fs::write(&path, VALID_JSON).expect("write registry file");

    let registry = SeedRegistry::from_file(&path).expect("load registry");

    assert_eq!(registry, SeedRegistry::from_json(VALID_JSON).expect("valid"));
}

#[test]
fn reports_missing_file_as_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.json");

    let result = SeedRegistry::from_file(&path);

    match result {
        Err(RegistryError::IoError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected IoError, got: {other:?}"),
    }
}
