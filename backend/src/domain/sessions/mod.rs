//! Played tennis sessions.
//!
//! Sessions are the raw usage events behind string statistics. A session may
//! name a string through `string_id`; that reference is validated by the
//! service layer before persisting and is never enforced by storage.

use std::fmt;

mod kind;
#[cfg(test)]
mod tests;
mod tennis_session;
mod validation;

pub use kind::{CourtSurface, ParseSessionKindError, SessionType};
pub use tennis_session::{TennisSession, TennisSessionDraft, TennisSessionPatch};

/// Lowest accepted string feeling rating.
pub const FEELING_RATING_MIN: u8 = 1;
/// Highest accepted string feeling rating.
pub const FEELING_RATING_MAX: u8 = 10;

/// Validation errors raised by tennis session constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TennisSessionValidationError {
    NonPositiveDuration,
    RatingOutOfRange { rating: u8 },
}

impl TennisSessionValidationError {
    /// Name of the violated field as exposed on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveDuration => "durationMinutes",
            Self::RatingOutOfRange { .. } => "stringFeelingRating",
        }
    }
}

impl fmt::Display for TennisSessionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDuration => {
                write!(f, "session duration must be a positive number of minutes")
            }
            Self::RatingOutOfRange { rating } => write!(
                f,
                "string feeling rating {rating} must be between \
                 {FEELING_RATING_MIN} and {FEELING_RATING_MAX}"
            ),
        }
    }
}

impl std::error::Error for TennisSessionValidationError {}
