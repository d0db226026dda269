//! `stringlog` entry-point: applies migrations, optionally seeds demo data and
//! prints per-string usage for an owner as JSON lines.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use stringlog::domain::ports::{
    ListTennisStringsRequest, StringListFilter, StringUsageRequest, TennisSessionRepository,
    TennisStringQuery, TennisStringRepository,
};
use stringlog::domain::{OwnerId, StringStatus, TennisStringQueryService};
use stringlog::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use stringlog::outbound::persistence::{
    DbPool, DieselTennisSessionRepository, DieselTennisStringRepository,
    InMemoryTennisSessionRepository, InMemoryTennisStringRepository, PoolConfig, run_migrations,
};
use stringlog::settings::{AppSettings, LogFormat};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `stringlog` command arguments. Each flag overrides its `STRINGLOG_*`
/// environment counterpart.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stringlog",
    about = "Report usage statistics for an owner's tennis strings",
    version
)]
struct CliArgs {
    /// PostgreSQL connection URL. In-memory storage is used when absent.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Owner to report on. Defaults to the seeded demo owner.
    #[arg(long = "owner-id", value_name = "uuid")]
    owner_id: Option<String>,
    /// Restrict the report to one lifecycle status.
    #[arg(long = "status", value_name = "inventory|strung|removed")]
    status: Option<StringStatus>,
    /// Log output format.
    #[arg(long = "log-format", value_name = "json|pretty")]
    log_format: Option<String>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = merge_settings(load_settings()?, &args);
    let log_format = settings.log_format().map_err(io::Error::other)?;
    init_tracing(log_format);

    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url)
            .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(settings, args.status))
}

fn load_settings() -> io::Result<AppSettings> {
    AppSettings::load_from_iter([OsString::from("stringlog")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))
}

fn merge_settings(settings: AppSettings, args: &CliArgs) -> AppSettings {
    AppSettings {
        database_url: args.database_url.clone().or(settings.database_url),
        owner_id: args.owner_id.clone().or(settings.owner_id),
        log_format: args.log_format.clone().or(settings.log_format),
    }
}

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(error) = result {
        warn!(%error, "tracing init failed");
    }
}

async fn async_main(settings: AppSettings, status: Option<StringStatus>) -> io::Result<()> {
    let owner_id = settings.owner_id().map_err(io::Error::other)?;
    let example_data = ExampleDataSettings::load_from_iter([OsString::from("stringlog")])
        .map_err(|error| io::Error::other(format!("load example data settings: {error}")))?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let filter = StringListFilter {
        status,
        is_active: None,
    };

    match settings.database_url() {
        Some(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
            let strings = Arc::new(DieselTennisStringRepository::new(pool.clone()));
            let sessions = Arc::new(DieselTennisSessionRepository::new(pool));
            report(strings, sessions, clock, owner_id, filter, &example_data).await
        }
        None => {
            info!("no database configured; using in-memory storage");
            let strings = Arc::new(InMemoryTennisStringRepository::new());
            let sessions = Arc::new(InMemoryTennisSessionRepository::new());
            report(strings, sessions, clock, owner_id, filter, &example_data).await
        }
    }
}

async fn report<R, S>(
    strings: Arc<R>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
    owner_id: Option<OwnerId>,
    filter: StringListFilter,
    example_data: &ExampleDataSettings,
) -> io::Result<()>
where
    R: TennisStringRepository,
    S: TennisSessionRepository,
{
    let outcome = seed_example_data_on_startup(
        example_data,
        Arc::clone(&strings),
        Arc::clone(&sessions),
        Arc::clone(&clock),
    )
    .await
    .map_err(|error| io::Error::other(format!("seed example data: {error}")))?;

    let Some(owner_id) = owner_id.or(outcome.map(|seeded| seeded.owner_id)) else {
        warn!("no owner configured and no demo seed applied; nothing to report");
        return Ok(());
    };

    let query = TennisStringQueryService::new(strings, sessions, clock);
    let listed = query
        .list_strings(ListTennisStringsRequest { owner_id, filter })
        .await
        .map_err(|error| io::Error::other(format!("list strings: {error}")))?;

    let mut stdout = io::stdout().lock();
    for string in listed.strings {
        let line = query
            .string_usage(StringUsageRequest {
                owner_id,
                string_id: string.id,
            })
            .await
            .map_err(|error| io::Error::other(format!("string usage: {error}")))?;
        serde_json::to_writer(&mut stdout, &line)?;
        writeln!(stdout)?;
    }
    stdout.flush()
}
