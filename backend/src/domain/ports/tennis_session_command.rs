//! Driving port for tennis session mutations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    CourtSurface, Error, OwnerId, SessionType, TennisSession, TennisSessionDraft,
    TennisSessionPatch, TennisSessionValidationError,
};

/// Serializable tennis session payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisSessionPayload {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub session_date: DateTime<Utc>,
    #[serde(rename = "type")]
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

impl From<TennisSession> for TennisSessionPayload {
    fn from(value: TennisSession) -> Self {
        Self {
            id: value.id(),
            owner_id: value.owner_id(),
            session_date: value.session_date(),
            session_type: value.session_type(),
            duration_minutes: value.duration_minutes(),
            location: value.location().map(str::to_owned),
            surface: value.surface(),
            string_id: value.string_id(),
            string_feeling_rating: value.string_feeling_rating(),
            string_notes: value.string_notes().map(str::to_owned),
            notes: value.notes().map(str::to_owned),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

impl TryFrom<TennisSessionPayload> for TennisSession {
    type Error = TennisSessionValidationError;

    fn try_from(value: TennisSessionPayload) -> Result<Self, Self::Error> {
        TennisSession::new(TennisSessionDraft {
            id: value.id,
            owner_id: value.owner_id,
            session_date: value.session_date,
            session_type: value.session_type,
            duration_minutes: value.duration_minutes,
            location: value.location,
            surface: value.surface,
            string_id: value.string_id,
            string_feeling_rating: value.string_feeling_rating,
            string_notes: value.string_notes,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

/// Caller-supplied fields for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTennisSessionPayload {
    pub session_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub duration_minutes: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub surface: Option<CourtSurface>,
    #[serde(default)]
    pub string_id: Option<Uuid>,
    #[serde(default)]
    pub string_feeling_rating: Option<u8>,
    #[serde(default)]
    pub string_notes: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTennisSessionPayload {
    /// Builds a draft with server-assigned id and timestamps.
    pub fn into_draft(self, id: Uuid, owner_id: OwnerId, now: DateTime<Utc>) -> TennisSessionDraft {
        TennisSessionDraft {
            id,
            owner_id,
            session_date: self.session_date,
            session_type: self.session_type,
            duration_minutes: self.duration_minutes,
            location: self.location,
            surface: self.surface,
            string_id: self.string_id,
            string_feeling_rating: self.string_feeling_rating,
            string_notes: self.string_notes,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to record a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTennisSessionRequest {
    pub owner_id: OwnerId,
    pub session: NewTennisSessionPayload,
}

/// Response from recording a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTennisSessionResponse {
    pub session: TennisSessionPayload,
}

/// Request to patch a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTennisSessionRequest {
    pub owner_id: OwnerId,
    pub session_id: Uuid,
    pub patch: TennisSessionPatch,
}

/// Response from patching a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTennisSessionResponse {
    pub session: TennisSessionPayload,
}

/// Request to hard-delete a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTennisSessionRequest {
    pub owner_id: OwnerId,
    pub session_id: Uuid,
}

/// Driving port for tennis session write operations.
///
/// A named `stringId` must resolve to a string of the same owner; otherwise
/// the request is rejected as `invalid_request` naming `stringId`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisSessionCommand: Send + Sync {
    /// Records a session with a fresh identifier.
    async fn create_session(
        &self,
        request: CreateTennisSessionRequest,
    ) -> Result<CreateTennisSessionResponse, Error>;

    /// Applies a partial update to a session.
    async fn update_session(
        &self,
        request: UpdateTennisSessionRequest,
    ) -> Result<UpdateTennisSessionResponse, Error>;

    /// Deletes a session.
    async fn delete_session(&self, request: DeleteTennisSessionRequest) -> Result<(), Error>;
}

/// Fixture command that validates payloads but never persists or links.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisSessionCommand;

#[async_trait]
impl TennisSessionCommand for FixtureTennisSessionCommand {
    async fn create_session(
        &self,
        request: CreateTennisSessionRequest,
    ) -> Result<CreateTennisSessionResponse, Error> {
        let draft = request
            .session
            .into_draft(Uuid::new_v4(), request.owner_id, Utc::now());
        let session = TennisSession::new(draft)
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;
        Ok(CreateTennisSessionResponse {
            session: session.into(),
        })
    }

    async fn update_session(
        &self,
        request: UpdateTennisSessionRequest,
    ) -> Result<UpdateTennisSessionResponse, Error> {
        Err(Error::not_found(format!(
            "tennis session {} not found",
            request.session_id
        )))
    }

    async fn delete_session(&self, request: DeleteTennisSessionRequest) -> Result<(), Error> {
        Err(Error::not_found(format!(
            "tennis session {} not found",
            request.session_id
        )))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    #[fixture]
    fn new_session() -> NewTennisSessionPayload {
        serde_json::from_value(json!({
            "sessionDate": "2026-03-04T17:00:00Z",
            "type": "lesson",
            "durationMinutes": 60,
            "stringFeelingRating": 7,
        }))
        .expect("valid payload")
    }

    #[rstest]
    fn new_payload_defaults_optional_fields(new_session: NewTennisSessionPayload) {
        assert_eq!(new_session.session_type, SessionType::Lesson);
        assert_eq!(new_session.string_id, None);
        assert_eq!(new_session.surface, None);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_assigns_unique_ids(new_session: NewTennisSessionPayload) {
        let owner_id = OwnerId::random();
        let first = FixtureTennisSessionCommand
            .create_session(CreateTennisSessionRequest {
                owner_id,
                session: new_session.clone(),
            })
            .await
            .expect("fixture create succeeds");
        let second = FixtureTennisSessionCommand
            .create_session(CreateTennisSessionRequest {
                owner_id,
                session: new_session,
            })
            .await
            .expect("fixture create succeeds");

        assert_ne!(first.session.id, second.session.id);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_rejects_zero_duration(mut new_session: NewTennisSessionPayload) {
        new_session.duration_minutes = 0;

        let err = FixtureTennisSessionCommand
            .create_session(CreateTennisSessionRequest {
                owner_id: OwnerId::random(),
                session: new_session,
            })
            .await
            .expect_err("zero duration");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.field(), Some("durationMinutes"));
    }
}
