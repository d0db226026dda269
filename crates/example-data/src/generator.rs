//! Deterministic string and session generation from seed definitions.
//!
//! This module provides the core generation function that produces
//! reproducible string setups and playing sessions from a seed registry. The
//! same seed value always produces identical output.

use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{CatalogueEntry, SeedDefinition, SeedRegistry};
use crate::seed::{
    CourtSurfaceSeed, ExampleDataset, ExampleSessionSeed, ExampleStringSeed, LifecycleStageSeed,
    SessionTypeSeed,
};
use crate::validation::{LABEL_MAX, is_valid_label, sanitize_label};

/// Maximum number of attempts to generate a valid location label.
const MAX_LOCATION_ATTEMPTS: usize = 100;

/// Tension bounds in pounds.
const TENSION_MIN: u32 = 48;
const TENSION_MAX: u32 = 62;

/// Typical session lengths in minutes.
const DURATIONS: [u32; 5] = [45, 60, 75, 90, 120];

const SESSION_TYPES: [SessionTypeSeed; 5] = [
    SessionTypeSeed::Practice,
    SessionTypeSeed::Match,
    SessionTypeSeed::Lesson,
    SessionTypeSeed::Tournament,
    SessionTypeSeed::HittingSession,
];

const SURFACES: [CourtSurfaceSeed; 5] = [
    CourtSurfaceSeed::HardCourt,
    CourtSurfaceSeed::Clay,
    CourtSurfaceSeed::Grass,
    CourtSurfaceSeed::Carpet,
    CourtSurfaceSeed::Indoor,
];

/// One session in five is logged without a string.
const UNLINKED_NUMERATOR: u32 = 1;
const UNLINKED_DENOMINATOR: u32 = 5;

/// Rated sessions are drawn from the upper half of the scale.
const RATING_MIN: u8 = 5;
const RATING_MAX: u8 = 10;

/// Days of history used when no string has been played.
const UNLINKED_HISTORY_DAYS: u32 = 30;

/// Generates an example dataset from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. The generated data has:
///
/// - One owner shared by every record
/// - String setups drawn from the registry catalogue; the first is strung
///   and the second removed so every lifecycle stage is represented
/// - Sessions dated inside the window their string was on the racquet
/// - Ratings only on sessions linked to a string
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The registry has no catalogue entries
/// - Location generation fails after maximum retries
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_dataset};
///
/// let json = r#"{
///     "version": 1,
///     "catalogue": [{"brand": "Babolat", "model": "RPM Blast", "type": "polyester"}],
///     "seeds": [{"name": "test", "seed": 42, "stringCount": 2, "sessionCount": 4}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let dataset = generate_example_dataset(&registry, seed_def).expect("generated");
///
/// assert_eq!(dataset.sessions.len(), 4);
/// // Same seed produces identical data
/// let again = generate_example_dataset(&registry, seed_def).expect("generated");
/// assert_eq!(dataset, again);
/// ```
pub fn generate_example_dataset(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleDataset, GenerationError> {
    if registry.catalogue().is_empty() {
        return Err(GenerationError::NoCatalogueEntries);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let owner_id = Uuid::from_u128(rng.random());

    let mut strings = Vec::with_capacity(seed_def.string_count());
    for index in 0..seed_def.string_count() {
        let entry = pick(&mut rng, registry.catalogue()).ok_or(GenerationError::NoCatalogueEntries)?;
        strings.push(generate_string(&mut rng, &entry, index));
    }

    let played: Vec<(Uuid, (u32, u32))> = strings
        .iter()
        .filter_map(|s| s.stage.played_window().map(|window| (s.id, window)))
        .collect();

    let mut sessions = Vec::with_capacity(seed_def.session_count());
    for _ in 0..seed_def.session_count() {
        sessions.push(generate_session(&mut rng, &played)?);
    }

    Ok(ExampleDataset {
        owner_id,
        strings,
        sessions,
    })
}

fn generate_string(
    rng: &mut ChaCha8Rng,
    entry: &CatalogueEntry,
    index: usize,
) -> ExampleStringSeed {
    let id = Uuid::from_u128(rng.random());
    let stage = generate_stage(rng, index);

    let (main_tension, cross_tension) = if matches!(stage, LifecycleStageSeed::Inventory) {
        (None, None)
    } else {
        let main = rng.random_range(TENSION_MIN..=TENSION_MAX);
        let cross = main.saturating_sub(rng.random_range(0..=2)).max(TENSION_MIN);
        (Some(main), Some(cross))
    };

    let notes = rng
        .random_bool(0.5)
        .then(|| Sentence(EN, 3..8).fake_with_rng::<String, _>(rng));

    ExampleStringSeed {
        id,
        brand: entry.brand().to_owned(),
        model: entry.model().to_owned(),
        gauge: entry.gauge().map(str::to_owned),
        string_type: entry.string_type(),
        main_tension,
        cross_tension,
        stage,
        notes,
    }
}

/// Selects a lifecycle stage; the first two indices are fixed so small
/// datasets still cover strung and removed strings.
fn generate_stage(rng: &mut ChaCha8Rng, index: usize) -> LifecycleStageSeed {
    let choice = match index {
        0 => 1,
        1 => 2,
        _ => rng.random_range(0..3),
    };
    match choice {
        0 => LifecycleStageSeed::Inventory,
        1 => LifecycleStageSeed::Strung {
            strung_days_ago: rng.random_range(5..=60),
        },
        _ => {
            let strung_days_ago = rng.random_range(30..=120);
            LifecycleStageSeed::Removed {
                strung_days_ago,
                removed_days_ago: rng.random_range(1..strung_days_ago),
            }
        }
    }
}

fn generate_session(
    rng: &mut ChaCha8Rng,
    played: &[(Uuid, (u32, u32))],
) -> Result<ExampleSessionSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());

    let linked = if rng.random_ratio(UNLINKED_NUMERATOR, UNLINKED_DENOMINATOR) {
        None
    } else {
        pick(rng, played)
    };

    let (string_id, days_ago) = match linked {
        Some((string_id, (most_recent, oldest))) => {
            (Some(string_id), rng.random_range(most_recent..=oldest))
        }
        None => (None, rng.random_range(0..=UNLINKED_HISTORY_DAYS)),
    };

    let session_type = pick(rng, &SESSION_TYPES).unwrap_or(SessionTypeSeed::Practice);
    let duration_minutes = pick(rng, &DURATIONS).unwrap_or(60);
    let surface = pick(rng, &SURFACES);
    let location = if rng.random_ratio(3, 4) {
        Some(generate_location(rng)?)
    } else {
        None
    };

    let feeling_rating = (string_id.is_some() && rng.random_ratio(4, 5))
        .then(|| rng.random_range(RATING_MIN..=RATING_MAX));
    let string_notes = feeling_rating
        .is_some()
        .then(|| Sentence(EN, 3..8).fake_with_rng::<String, _>(rng));
    let notes = rng
        .random_ratio(1, 3)
        .then(|| Sentence(EN, 4..10).fake_with_rng::<String, _>(rng));

    Ok(ExampleSessionSeed {
        id,
        string_id,
        days_ago,
        session_type,
        duration_minutes,
        location,
        surface,
        feeling_rating,
        string_notes,
        notes,
    })
}

/// Generates a valid club name using the provided RNG.
///
/// Retries up to `MAX_LOCATION_ATTEMPTS` times if the generated label fails
/// validation.
fn generate_location(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_LOCATION_ATTEMPTS {
        let city: String = CityName(EN).fake_with_rng(rng);
        let candidate = sanitize_label(&format!("{city} Tennis Club"));
        let truncated: String = candidate.chars().take(LABEL_MAX).collect();

        if is_valid_label(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::LocationGenerationFailed {
        max_attempts: MAX_LOCATION_ATTEMPTS,
    })
}

fn pick<T: Clone>(rng: &mut ChaCha8Rng, options: &[T]) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    options.get(rng.random_range(0..options.len())).cloned()
}
