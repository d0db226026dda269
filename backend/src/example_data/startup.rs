//! Startup seeding orchestration.

use std::path::PathBuf;
use std::sync::Arc;

use example_data::{RegistryError, SeedRegistry};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{TennisSessionRepository, TennisStringRepository};
use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError, SeedingResult};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be loaded or parsed.
    #[error("failed to load registry at {path}: {source}")]
    Registry {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying registry error.
        #[source]
        source: RegistryError,
    },
    /// Seed generation or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Apply example data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use stringlog::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use stringlog::outbound::persistence::{
///     InMemoryTennisSessionRepository, InMemoryTennisStringRepository,
/// };
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: Some("baseline-rally".to_owned()),
///     registry_path: None,
/// };
/// let outcome = seed_example_data_on_startup(
///     &settings,
///     Arc::new(InMemoryTennisStringRepository::new()),
///     Arc::new(InMemoryTennisSessionRepository::new()),
///     Arc::new(DefaultClock),
/// )
/// .await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<R, S>(
    settings: &ExampleDataSettings,
    strings: Arc<R>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError>
where
    R: TennisStringRepository,
    S: TennisSessionRepository,
{
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry_path = settings.registry_path();
    let registry = SeedRegistry::from_file(&registry_path).map_err(|source| {
        StartupSeedingError::Registry {
            path: registry_path.clone(),
            source,
        }
    })?;

    let seeder = ExampleDataSeeder::new(strings, sessions, clock);
    let outcome = seeder.seed_from_registry(&registry, seed_name).await?;

    match outcome.result {
        SeedingResult::Applied => {
            info!(
                seed_key = %outcome.seed_key,
                owner_id = %outcome.owner_id,
                string_count = outcome.string_count,
                session_count = outcome.session_count,
                "example data seeding applied"
            );
        }
        SeedingResult::AlreadySeeded => {
            info!(
                seed_key = %outcome.seed_key,
                owner_id = %outcome.owner_id,
                "example data seed already applied; skipping"
            );
        }
    }

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::OwnerId;
    use crate::domain::ports::StringListFilter;
    use crate::outbound::persistence::{
        InMemoryTennisSessionRepository, InMemoryTennisStringRepository,
    };
    use crate::test_support::MutableClock;

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        let now = Utc
            .with_ymd_and_hms(2026, 6, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        Arc::new(MutableClock::new(now))
    }

    fn enabled(seed_name: &str, registry_path: Option<PathBuf>) -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: true,
            seed_name: Some(seed_name.to_owned()),
            registry_path,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_settings_skip_seeding(clock: Arc<dyn Clock>) {
        let settings = ExampleDataSettings {
            enabled: false,
            seed_name: None,
            registry_path: Some(PathBuf::from("/nonexistent/seeds.json")),
        };

        let outcome = seed_example_data_on_startup(
            &settings,
            Arc::new(InMemoryTennisStringRepository::new()),
            Arc::new(InMemoryTennisSessionRepository::new()),
            clock,
        )
        .await
        .expect("disabled seeding succeeds");

        assert!(outcome.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn blank_seed_name_is_rejected(clock: Arc<dyn Clock>) {
        let err = seed_example_data_on_startup(
            &enabled("   ", None),
            Arc::new(InMemoryTennisStringRepository::new()),
            Arc::new(InMemoryTennisSessionRepository::new()),
            clock,
        )
        .await
        .expect_err("blank seed name");

        assert!(matches!(err, StartupSeedingError::EmptySeedName));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_registry_reports_path(clock: Arc<dyn Clock>) {
        let path = PathBuf::from("/nonexistent/seeds.json");

        let err = seed_example_data_on_startup(
            &enabled("baseline-rally", Some(path.clone())),
            Arc::new(InMemoryTennisStringRepository::new()),
            Arc::new(InMemoryTennisSessionRepository::new()),
            clock,
        )
        .await
        .expect_err("missing registry");

        assert!(matches!(err, StartupSeedingError::Registry { path: reported, .. } if reported == path));
    }

    #[rstest]
    #[tokio::test]
    async fn bundled_seed_applies_once(clock: Arc<dyn Clock>) {
        let strings = Arc::new(InMemoryTennisStringRepository::new());
        let sessions = Arc::new(InMemoryTennisSessionRepository::new());
        let settings = enabled("baseline-rally", None);

        let first = seed_example_data_on_startup(
            &settings,
            Arc::clone(&strings),
            Arc::clone(&sessions),
            Arc::clone(&clock),
        )
        .await
        .expect("first run")
        .expect("enabled");
        let second = seed_example_data_on_startup(
            &settings,
            Arc::clone(&strings),
            Arc::clone(&sessions),
            clock,
        )
        .await
        .expect("second run")
        .expect("enabled");

        assert_eq!(first.result, SeedingResult::Applied);
        assert_eq!(second.result, SeedingResult::AlreadySeeded);
        let owner: OwnerId = first.owner_id;
        let stored = strings
            .list_for_owner(&owner, &StringListFilter::default())
            .await
            .expect("list");
        assert_eq!(stored.len(), first.string_count);
        let stored_sessions = sessions.list_for_owner(&owner).await.expect("list");
        assert_eq!(stored_sessions.len(), first.session_count);
    }
}
