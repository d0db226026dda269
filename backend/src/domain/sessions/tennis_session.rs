//! Tennis session entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::OwnerId;

use super::{CourtSurface, SessionType, TennisSessionValidationError};

/// Input payload for [`TennisSession::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TennisSessionDraft {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub session_date: DateTime<Utc>,
    pub session_type: SessionType,
    pub duration_minutes: u32,
    pub location: Option<String>,
    pub surface: Option<CourtSurface>,
    pub string_id: Option<Uuid>,
    pub string_feeling_rating: Option<u8>,
    pub string_notes: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a session; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisSessionPatch {
    pub session_date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub session_type: Option<SessionType>,
    pub duration_minutes: Option<u32>,
    pub location: Option<String>,
    pub surface: Option<CourtSurface>,
    pub string_id: Option<Uuid>,
    pub string_feeling_rating: Option<u8>,
    pub string_notes: Option<String>,
    pub notes: Option<String>,
}

/// A validated record of one played session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TennisSession {
    pub(super) id: Uuid,
    pub(super) owner_id: OwnerId,
    pub(super) session_date: DateTime<Utc>,
    pub(super) session_type: SessionType,
    pub(super) duration_minutes: u32,
    pub(super) location: Option<String>,
    pub(super) surface: Option<CourtSurface>,
    pub(super) string_id: Option<Uuid>,
    pub(super) string_feeling_rating: Option<u8>,
    pub(super) string_notes: Option<String>,
    pub(super) notes: Option<String>,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl TennisSession {
    /// Creates a validated session.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use stringlog::domain::{OwnerId, SessionType, TennisSession, TennisSessionDraft};
    /// use uuid::Uuid;
    ///
    /// let now = Utc::now();
    /// let session = TennisSession::new(TennisSessionDraft {
    ///     id: Uuid::new_v4(),
    ///     owner_id: OwnerId::random(),
    ///     session_date: now,
    ///     session_type: SessionType::Practice,
    ///     duration_minutes: 90,
    ///     location: None,
    ///     surface: None,
    ///     string_id: None,
    ///     string_feeling_rating: Some(8),
    ///     string_notes: None,
    ///     notes: None,
    ///     created_at: now,
    ///     updated_at: now,
    /// })?;
    /// assert_eq!(session.duration_minutes(), 90);
    /// # Ok::<(), stringlog::domain::TennisSessionValidationError>(())
    /// ```
    pub fn new(draft: TennisSessionDraft) -> Result<Self, TennisSessionValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn session_date(&self) -> DateTime<Utc> {
        self.session_date
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn surface(&self) -> Option<CourtSurface> {
        self.surface
    }

    /// Returns the referenced string, which may no longer exist.
    pub fn string_id(&self) -> Option<Uuid> {
        self.string_id
    }

    pub fn string_feeling_rating(&self) -> Option<u8> {
        self.string_feeling_rating
    }

    pub fn string_notes(&self) -> Option<&str> {
        self.string_notes.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Copies the entity back into an editable draft.
    pub fn to_draft(&self) -> TennisSessionDraft {
        TennisSessionDraft {
            id: self.id,
            owner_id: self.owner_id,
            session_date: self.session_date,
            session_type: self.session_type,
            duration_minutes: self.duration_minutes,
            location: self.location.clone(),
            surface: self.surface,
            string_id: self.string_id,
            string_feeling_rating: self.string_feeling_rating,
            string_notes: self.string_notes.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies a partial update, revalidating the result.
    pub fn patched(
        &self,
        patch: TennisSessionPatch,
        now: DateTime<Utc>,
    ) -> Result<Self, TennisSessionValidationError> {
        let mut draft = self.to_draft();
        if let Some(session_date) = patch.session_date {
            draft.session_date = session_date;
        }
        if let Some(session_type) = patch.session_type {
            draft.session_type = session_type;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            draft.duration_minutes = duration_minutes;
        }
        if patch.location.is_some() {
            draft.location = patch.location;
        }
        if patch.surface.is_some() {
            draft.surface = patch.surface;
        }
        if patch.string_id.is_some() {
            draft.string_id = patch.string_id;
        }
        if patch.string_feeling_rating.is_some() {
            draft.string_feeling_rating = patch.string_feeling_rating;
        }
        if patch.string_notes.is_some() {
            draft.string_notes = patch.string_notes;
        }
        if patch.notes.is_some() {
            draft.notes = patch.notes;
        }
        draft.updated_at = now;
        Self::new(draft)
    }
}
