//! Driving port for tennis string mutations.
//!
//! Covers creation, descriptive updates, lifecycle transitions and deletion.
//! Every request carries the owner it is scoped to.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Error, LifecycleAction, OwnerId, StringStatus, StringType, TennisString, TennisStringDraft,
    TennisStringPatch, TennisStringValidationError,
};

/// Serializable tennis string payload for driving ports.
///
/// `isActive` is derived from `status` and ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisStringPayload {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub brand: String,
    pub model: String,
    pub gauge: Option<String>,
    #[serde(rename = "type")]
    pub string_type: StringType,
    pub main_tension: Option<u32>,
    pub cross_tension: Option<u32>,
    pub status: StringStatus,
    #[serde(default)]
    pub is_active: bool,
    pub date_strung: Option<DateTime<Utc>>,
    pub date_removed: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TennisString> for TennisStringPayload {
    fn from(value: TennisString) -> Self {
        Self {
            id: value.id(),
            owner_id: value.owner_id(),
            brand: value.brand().to_owned(),
            model: value.model().to_owned(),
            gauge: value.gauge().map(str::to_owned),
            string_type: value.string_type(),
            main_tension: value.main_tension(),
            cross_tension: value.cross_tension(),
            status: value.status(),
            is_active: value.is_active(),
            date_strung: value.date_strung(),
            date_removed: value.date_removed(),
            notes: value.notes().map(str::to_owned),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

impl TryFrom<TennisStringPayload> for TennisString {
    type Error = TennisStringValidationError;

    fn try_from(value: TennisStringPayload) -> Result<Self, Self::Error> {
        TennisString::new(TennisStringDraft {
            id: value.id,
            owner_id: value.owner_id,
            brand: value.brand,
            model: value.model,
            gauge: value.gauge,
            string_type: value.string_type,
            main_tension: value.main_tension,
            cross_tension: value.cross_tension,
            status: value.status,
            date_strung: value.date_strung,
            date_removed: value.date_removed,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

/// Caller-supplied fields for a new string setup.
///
/// Identifier, timestamps and lifecycle fields are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTennisStringPayload {
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub gauge: Option<String>,
    #[serde(rename = "type")]
    pub string_type: StringType,
    #[serde(default)]
    pub main_tension: Option<u32>,
    #[serde(default)]
    pub cross_tension: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTennisStringPayload {
    /// Builds a draft in `Inventory` with server-assigned id and timestamps.
    pub fn into_draft(self, id: Uuid, owner_id: OwnerId, now: DateTime<Utc>) -> TennisStringDraft {
        TennisStringDraft {
            id,
            owner_id,
            brand: self.brand,
            model: self.model,
            gauge: self.gauge,
            string_type: self.string_type,
            main_tension: self.main_tension,
            cross_tension: self.cross_tension,
            status: StringStatus::Inventory,
            date_strung: None,
            date_removed: None,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to create a string setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTennisStringRequest {
    pub owner_id: OwnerId,
    pub string: NewTennisStringPayload,
}

/// Response from creating a string setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTennisStringResponse {
    pub string: TennisStringPayload,
}

/// Request to patch the descriptive fields of a string setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTennisStringRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
    pub patch: TennisStringPatch,
}

/// Response from patching a string setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTennisStringResponse {
    pub string: TennisStringPayload,
}

/// Request to move a string setup through its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTennisStringRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
    #[serde(flatten)]
    pub action: LifecycleAction,
}

/// Response carrying the string after a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTennisStringResponse {
    pub string: TennisStringPayload,
}

/// Request to hard-delete a string setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTennisStringRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
}

/// Driving port for tennis string write operations.
///
/// Unknown ids and ids owned by someone else both surface as `not_found`.
/// Validation failures surface as `invalid_request` naming the field.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisStringCommand: Send + Sync {
    /// Creates a string in `Inventory`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use stringlog::domain::{OwnerId, StringType};
    /// # use stringlog::domain::ports::{
    /// #     CreateTennisStringRequest, FixtureTennisStringCommand, NewTennisStringPayload,
    /// #     TennisStringCommand,
    /// # };
    /// # async fn example() -> Result<(), stringlog::domain::Error> {
    /// let command = FixtureTennisStringCommand;
    /// let response = command
    ///     .create_string(CreateTennisStringRequest {
    ///         owner_id: OwnerId::random(),
    ///         string: NewTennisStringPayload {
    ///             brand: "Luxilon".to_owned(),
    ///             model: "ALU Power".to_owned(),
    ///             gauge: None,
    ///             string_type: StringType::Polyester,
    ///             main_tension: Some(52),
    ///             cross_tension: Some(50),
    ///             notes: None,
    ///         },
    ///     })
    ///     .await?;
    /// assert!(response.string.is_active);
    /// # Ok(())
    /// # }
    /// ```
    async fn create_string(
        &self,
        request: CreateTennisStringRequest,
    ) -> Result<CreateTennisStringResponse, Error>;

    /// Applies a descriptive patch. Lifecycle fields are untouched.
    async fn update_string(
        &self,
        request: UpdateTennisStringRequest,
    ) -> Result<UpdateTennisStringResponse, Error>;

    /// Applies a lifecycle action. Not idempotent: repeating an action may
    /// fail once the string has left the source state.
    async fn transition_string(
        &self,
        request: TransitionTennisStringRequest,
    ) -> Result<TransitionTennisStringResponse, Error>;

    /// Deletes a string. Sessions referencing it are left untouched.
    async fn delete_string(&self, request: DeleteTennisStringRequest) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisStringCommand;

#[async_trait]
impl TennisStringCommand for FixtureTennisStringCommand {
    async fn create_string(
        &self,
        request: CreateTennisStringRequest,
    ) -> Result<CreateTennisStringResponse, Error> {
        let draft = request
            .string
            .into_draft(Uuid::new_v4(), request.owner_id, Utc::now());
        let string = TennisString::new(draft)
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;
        Ok(CreateTennisStringResponse {
            string: string.into(),
        })
    }

    async fn update_string(
        &self,
        request: UpdateTennisStringRequest,
    ) -> Result<UpdateTennisStringResponse, Error> {
        Err(Error::not_found(format!(
            "tennis string {} not found",
            request.string_id
        )))
    }

    async fn transition_string(
        &self,
        request: TransitionTennisStringRequest,
    ) -> Result<TransitionTennisStringResponse, Error> {
        Err(Error::not_found(format!(
            "tennis string {} not found",
            request.string_id
        )))
    }

    async fn delete_string(&self, request: DeleteTennisStringRequest) -> Result<(), Error> {
        Err(Error::not_found(format!(
            "tennis string {} not found",
            request.string_id
        )))
    }
}
