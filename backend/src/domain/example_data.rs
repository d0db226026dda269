//! Example data seeding orchestration.
//!
//! Converts deterministic example-data registry outputs into string setups and
//! sessions for one demo owner, anchoring day offsets at the injected clock,
//! then saves them through the repository ports.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use example_data::{
    CourtSurfaceSeed, ExampleSessionSeed, ExampleStringSeed, GenerationError, LifecycleStageSeed,
    RegistryError, SeedRegistry, SessionTypeSeed, StringTypeSeed, generate_example_dataset,
};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{
    TennisSessionRepository, TennisSessionRepositoryError, TennisStringRepository,
    TennisStringRepositoryError,
};
use crate::domain::{
    CourtSurface, OwnerId, SessionType, StringStatus, StringType, TennisSession,
    TennisSessionDraft, TennisSessionValidationError, TennisString, TennisStringDraft,
    TennisStringValidationError,
};

/// Whether a seed run wrote data or found it already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// Seed data was written.
    Applied,
    /// The seed's records already exist; nothing was written.
    AlreadySeeded,
}

/// Result of attempting to apply example data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// Name of the applied seed.
    pub seed_key: String,
    /// Demo owner every generated record belongs to.
    pub owner_id: OwnerId,
    /// Number of string setups generated.
    pub string_count: usize,
    /// Number of sessions generated.
    pub session_count: usize,
    /// Persistence outcome for the seed run.
    pub result: SeedingResult,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Dataset generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated string failed backend validation.
    #[error("generated string failed validation: {0}")]
    StringInvalid(#[from] TennisStringValidationError),
    /// A generated session failed backend validation.
    #[error("generated session failed validation: {0}")]
    SessionInvalid(#[from] TennisSessionValidationError),
    /// String persistence failed while seeding.
    #[error("example string persistence error: {0}")]
    StringPersistence(#[from] TennisStringRepositoryError),
    /// Session persistence failed while seeding.
    #[error("example session persistence error: {0}")]
    SessionPersistence(#[from] TennisSessionRepositoryError),
}

/// Service that orchestrates example data seeding.
///
/// Seeding is explicit: callers invoke it once at process or fixture start.
/// Re-running the same seed is a no-op because generated ids are
/// deterministic.
#[derive(Clone)]
pub struct ExampleDataSeeder<R, S> {
    strings: Arc<R>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<R, S> ExampleDataSeeder<R, S> {
    /// Create a new seeder over the string and session repositories.
    pub fn new(strings: Arc<R>, sessions: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            strings,
            sessions,
            clock,
        }
    }
}

impl<R, S> ExampleDataSeeder<R, S>
where
    R: TennisStringRepository,
    S: TennisSessionRepository,
{
    /// Apply example data for a named seed within the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if registry lookup, generation,
    /// validation, or persistence fails.
    pub async fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        seed_name: &str,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let seed_def = registry.find_seed(seed_name)?;
        let dataset = generate_example_dataset(registry, seed_def)?;
        let owner_id = OwnerId::from_uuid(dataset.owner_id);
        let now = self.clock.utc();

        let strings = dataset
            .strings
            .into_iter()
            .map(|seed| convert_string_seed(seed, owner_id, now))
            .collect::<Result<Vec<_>, _>>()?;
        let sessions = dataset
            .sessions
            .into_iter()
            .map(|seed| convert_session_seed(seed, owner_id, now))
            .collect::<Result<Vec<_>, _>>()?;

        let mut outcome = ExampleDataSeedOutcome {
            seed_key: seed_def.name().to_owned(),
            owner_id,
            string_count: strings.len(),
            session_count: sessions.len(),
            result: SeedingResult::AlreadySeeded,
        };
        if self.already_seeded(&strings, &sessions, &owner_id).await? {
            debug!(seed_key = %outcome.seed_key, "example data already present");
            return Ok(outcome);
        }

        for string in &strings {
            self.strings.save(string).await?;
        }
        for session in &sessions {
            self.sessions.save(session).await?;
        }
        outcome.result = SeedingResult::Applied;
        Ok(outcome)
    }

    async fn already_seeded(
        &self,
        strings: &[TennisString],
        sessions: &[TennisSession],
        owner_id: &OwnerId,
    ) -> Result<bool, ExampleDataSeedingError> {
        if let Some(first) = strings.first() {
            return Ok(self
                .strings
                .find_by_id(&first.id(), owner_id)
                .await?
                .is_some());
        }
        if let Some(first) = sessions.first() {
            return Ok(self
                .sessions
                .find_by_id(&first.id(), owner_id)
                .await?
                .is_some());
        }
        Ok(false)
    }
}

fn days_before(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(days))
}

fn convert_string_seed(
    seed: ExampleStringSeed,
    owner_id: OwnerId,
    now: DateTime<Utc>,
) -> Result<TennisString, TennisStringValidationError> {
    let (status, date_strung, date_removed) = match seed.stage {
        LifecycleStageSeed::Inventory => (StringStatus::Inventory, None, None),
        LifecycleStageSeed::Strung { strung_days_ago } => (
            StringStatus::Strung,
            Some(days_before(now, strung_days_ago)),
            None,
        ),
        LifecycleStageSeed::Removed {
            strung_days_ago,
            removed_days_ago,
        } => (
            StringStatus::Removed,
            Some(days_before(now, strung_days_ago)),
            Some(days_before(now, removed_days_ago)),
        ),
    };
    let created_at = date_strung.unwrap_or(now);

    TennisString::new(TennisStringDraft {
        id: seed.id,
        owner_id,
        brand: seed.brand,
        model: seed.model,
        gauge: seed.gauge,
        string_type: map_string_type(seed.string_type),
        main_tension: seed.main_tension,
        cross_tension: seed.cross_tension,
        status,
        date_strung,
        date_removed,
        notes: seed.notes,
        created_at,
        updated_at: date_removed.unwrap_or(created_at),
    })
}

fn convert_session_seed(
    seed: ExampleSessionSeed,
    owner_id: OwnerId,
    now: DateTime<Utc>,
) -> Result<TennisSession, TennisSessionValidationError> {
    let session_date = days_before(now, seed.days_ago);
    TennisSession::new(TennisSessionDraft {
        id: seed.id,
        owner_id,
        session_date,
        session_type: map_session_type(seed.session_type),
        duration_minutes: seed.duration_minutes,
        location: seed.location,
        surface: seed.surface.map(map_surface),
        string_id: seed.string_id,
        string_feeling_rating: seed.feeling_rating,
        string_notes: seed.string_notes,
        notes: seed.notes,
        created_at: session_date,
        updated_at: session_date,
    })
}

fn map_string_type(seed: StringTypeSeed) -> StringType {
    match seed {
        StringTypeSeed::Polyester => StringType::Polyester,
        StringTypeSeed::Multifilament => StringType::Multifilament,
        StringTypeSeed::SyntheticGut => StringType::SyntheticGut,
        StringTypeSeed::NaturalGut => StringType::NaturalGut,
        StringTypeSeed::Hybrid => StringType::Hybrid,
    }
}

fn map_session_type(seed: SessionTypeSeed) -> SessionType {
    match seed {
        SessionTypeSeed::Practice => SessionType::Practice,
        SessionTypeSeed::Match => SessionType::Match,
        SessionTypeSeed::Lesson => SessionType::Lesson,
        SessionTypeSeed::Tournament => SessionType::Tournament,
        SessionTypeSeed::HittingSession => SessionType::HittingSession,
    }
}

fn map_surface(seed: CourtSurfaceSeed) -> CourtSurface {
    match seed {
        CourtSurfaceSeed::HardCourt => CourtSurface::HardCourt,
        CourtSurfaceSeed::Clay => CourtSurface::Clay,
        CourtSurfaceSeed::Grass => CourtSurface::Grass,
        CourtSurfaceSeed::Carpet => CourtSurface::Carpet,
        CourtSurfaceSeed::Indoor => CourtSurface::Indoor,
    }
}
