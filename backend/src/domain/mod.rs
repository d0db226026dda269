//! Domain primitives, services and ports.
//!
//! Purpose: model string setups, their lifecycle and the sessions played on
//! them, and derive usage statistics. Everything here is transport-agnostic;
//! adapters live under `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - transport-agnostic failure payload.
//! - TennisString / TennisSession - validated entities.
//! - LifecycleAction - caller-triggered string transitions.
//! - compute_usage - pure usage aggregation.
//! - Tennis*Service - driving-port implementations.

pub mod error;
pub mod example_data;
mod owner;
pub mod ports;
mod sessions;
mod strings;
mod tennis_session_service;
mod tennis_string_service;
mod text;
mod usage;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{
    ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError, SeedingResult,
};
pub use self::owner::{OwnerId, OwnerIdValidationError};
pub use self::sessions::{
    CourtSurface, FEELING_RATING_MAX, FEELING_RATING_MIN, ParseSessionKindError, SessionType,
    TennisSession, TennisSessionDraft, TennisSessionPatch, TennisSessionValidationError,
};
pub use self::strings::{
    LifecycleAction, LifecycleError, ParseStringStatusError, ParseStringTypeError, StringStatus,
    StringType, TennisString, TennisStringDraft, TennisStringPatch, TennisStringValidationError,
};
pub use self::tennis_session_service::{TennisSessionCommandService, TennisSessionQueryService};
pub use self::tennis_string_service::{TennisStringCommandService, TennisStringQueryService};
pub use self::usage::{StringUsageStats, compute_usage};

/// Convenient result alias for driving-port operations.
///
/// # Examples
/// ```
/// use stringlog::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("tennis string missing"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
