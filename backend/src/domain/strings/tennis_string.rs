//! Tennis string entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::OwnerId;

use super::{StringStatus, StringType, TennisStringValidationError};

/// Input payload for [`TennisString::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TennisStringDraft {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub brand: String,
    pub model: String,
    pub gauge: Option<String>,
    pub string_type: StringType,
    pub main_tension: Option<u32>,
    pub cross_tension: Option<u32>,
    pub status: StringStatus,
    pub date_strung: Option<DateTime<Utc>>,
    pub date_removed: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of the descriptive fields of a string setup.
///
/// `None` leaves the current value untouched. Lifecycle fields are absent on
/// purpose; they only change through [`super::LifecycleAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisStringPatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub gauge: Option<String>,
    #[serde(rename = "type")]
    pub string_type: Option<StringType>,
    pub main_tension: Option<u32>,
    pub cross_tension: Option<u32>,
    pub notes: Option<String>,
}

/// A validated string setup owned by one player.
///
/// `date_removed` is present exactly when the status is `Removed`, and
/// `date_strung` is present exactly when the status is not `Inventory`.
#[derive(Debug, Clone, PartialEq)]
pub struct TennisString {
    pub(super) id: Uuid,
    pub(super) owner_id: OwnerId,
    pub(super) brand: String,
    pub(super) model: String,
    pub(super) gauge: Option<String>,
    pub(super) string_type: StringType,
    pub(super) main_tension: Option<u32>,
    pub(super) cross_tension: Option<u32>,
    pub(super) status: StringStatus,
    pub(super) date_strung: Option<DateTime<Utc>>,
    pub(super) date_removed: Option<DateTime<Utc>>,
    pub(super) notes: Option<String>,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl TennisString {
    /// Creates a validated string setup.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use stringlog::domain::{
    ///     OwnerId, StringStatus, StringType, TennisString, TennisStringDraft,
    /// };
    /// use uuid::Uuid;
    ///
    /// let now = Utc::now();
    /// let string = TennisString::new(TennisStringDraft {
    ///     id: Uuid::new_v4(),
    ///     owner_id: OwnerId::random(),
    ///     brand: "Luxilon".to_owned(),
    ///     model: "ALU Power".to_owned(),
    ///     gauge: Some("1.25mm".to_owned()),
    ///     string_type: StringType::Polyester,
    ///     main_tension: Some(52),
    ///     cross_tension: Some(50),
    ///     status: StringStatus::Inventory,
    ///     date_strung: None,
    ///     date_removed: None,
    ///     notes: None,
    ///     created_at: now,
    ///     updated_at: now,
    /// })?;
    /// assert!(string.is_active());
    /// # Ok::<(), stringlog::domain::TennisStringValidationError>(())
    /// ```
    pub fn new(draft: TennisStringDraft) -> Result<Self, TennisStringValidationError> {
        Self::try_from(draft)
    }

    /// Returns the string id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning player.
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the manufacturer.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the product line.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the optional gauge label.
    pub fn gauge(&self) -> Option<&str> {
        self.gauge.as_deref()
    }

    /// Returns the material category.
    pub fn string_type(&self) -> StringType {
        self.string_type
    }

    /// Returns the main tension in pounds.
    pub fn main_tension(&self) -> Option<u32> {
        self.main_tension
    }

    /// Returns the cross tension in pounds.
    pub fn cross_tension(&self) -> Option<u32> {
        self.cross_tension
    }

    /// Returns the lifecycle stage.
    pub fn status(&self) -> StringStatus {
        self.status
    }

    /// Derived two-state flag for consumers of the active/removed model.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns when the string went onto the racquet.
    pub fn date_strung(&self) -> Option<DateTime<Utc>> {
        self.date_strung
    }

    /// Returns when the string came off the racquet.
    pub fn date_removed(&self) -> Option<DateTime<Utc>> {
        self.date_removed
    }

    /// Returns free-form notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Copies the entity back into an editable draft.
    pub fn to_draft(&self) -> TennisStringDraft {
        TennisStringDraft {
            id: self.id,
            owner_id: self.owner_id,
            brand: self.brand.clone(),
            model: self.model.clone(),
            gauge: self.gauge.clone(),
            string_type: self.string_type,
            main_tension: self.main_tension,
            cross_tension: self.cross_tension,
            status: self.status,
            date_strung: self.date_strung,
            date_removed: self.date_removed,
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies a descriptive patch, revalidating the result.
    ///
    /// The original entity is left untouched when validation fails.
    pub fn patched(
        &self,
        patch: TennisStringPatch,
        now: DateTime<Utc>,
    ) -> Result<Self, TennisStringValidationError> {
        let mut draft = self.to_draft();
        if let Some(brand) = patch.brand {
            draft.brand = brand;
        }
        if let Some(model) = patch.model {
            draft.model = model;
        }
        if patch.gauge.is_some() {
            draft.gauge = patch.gauge;
        }
        if let Some(string_type) = patch.string_type {
            draft.string_type = string_type;
        }
        if patch.main_tension.is_some() {
            draft.main_tension = patch.main_tension;
        }
        if patch.cross_tension.is_some() {
            draft.cross_tension = patch.cross_tension;
        }
        if patch.notes.is_some() {
            draft.notes = patch.notes;
        }
        draft.updated_at = now;
        Self::new(draft)
    }
}
