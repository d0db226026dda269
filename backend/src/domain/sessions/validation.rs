//! Tennis session validation and normalisation.

use crate::domain::text::normalise_optional;

use super::{
    FEELING_RATING_MAX, FEELING_RATING_MIN, TennisSession, TennisSessionDraft,
    TennisSessionValidationError,
};

impl TryFrom<TennisSessionDraft> for TennisSession {
    type Error = TennisSessionValidationError;

    fn try_from(value: TennisSessionDraft) -> Result<Self, Self::Error> {
        if value.duration_minutes == 0 {
            return Err(TennisSessionValidationError::NonPositiveDuration);
        }
        if let Some(rating) = value
            .string_feeling_rating
            .filter(|rating| !(FEELING_RATING_MIN..=FEELING_RATING_MAX).contains(rating))
        {
            return Err(TennisSessionValidationError::RatingOutOfRange { rating });
        }

        Ok(Self {
            id: value.id,
            owner_id: value.owner_id,
            session_date: value.session_date,
            session_type: value.session_type,
            duration_minutes: value.duration_minutes,
            location: normalise_optional(value.location),
            surface: value.surface,
            string_id: value.string_id,
            string_feeling_rating: value.string_feeling_rating,
            string_notes: normalise_optional(value.string_notes),
            notes: normalise_optional(value.notes),
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}
