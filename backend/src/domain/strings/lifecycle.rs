//! Lifecycle state machine for string setups.
//!
//! | from        | action                | to          | dates                          |
//! |-------------|-----------------------|-------------|--------------------------------|
//! | `Inventory` | `StringIt`            | `Strung`    | strung = given or now          |
//! | `Strung`    | `Remove`              | `Removed`   | removed = given or now         |
//! | `Removed`   | `ReturnToInventory`   | `Inventory` | both cleared                   |
//! | `Removed`   | `Restore`             | `Strung`    | removed cleared, strung kept   |
//!
//! Every other pair is undefined and leaves the entity untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StringStatus, TennisString, TennisStringValidationError};

/// Caller-triggered lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LifecycleAction {
    /// Put the string on a racquet.
    #[serde(rename_all = "camelCase")]
    StringIt {
        #[serde(default)]
        date_strung: Option<DateTime<Utc>>,
    },
    /// Take the string off, optionally backdated.
    #[serde(rename_all = "camelCase")]
    Remove {
        #[serde(default)]
        date_removed: Option<DateTime<Utc>>,
    },
    /// Reset a removed string so its history can restart.
    ReturnToInventory,
    /// Two-state compatibility: reactivate a removed string in place.
    Restore,
}

impl LifecycleAction {
    /// Stable snake_case label used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StringIt { .. } => "string_it",
            Self::Remove { .. } => "remove",
            Self::ReturnToInventory => "return_to_inventory",
            Self::Restore => "restore",
        }
    }
}

/// Errors raised by [`TennisString::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    UndefinedTransition {
        from: StringStatus,
        action: &'static str,
    },
    Invalid(TennisStringValidationError),
}

impl LifecycleError {
    /// Name of the field the caller should correct.
    pub fn field(&self) -> &'static str {
        match self {
            Self::UndefinedTransition { .. } => "status",
            Self::Invalid(error) => error.field(),
        }
    }
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedTransition { from, action } => {
                write!(f, "cannot {action} a string that is {from}")
            }
            Self::Invalid(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for LifecycleError {}

impl From<TennisStringValidationError> for LifecycleError {
    fn from(value: TennisStringValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl TennisString {
    /// Applies a lifecycle action and returns the resulting entity.
    ///
    /// This is a pure function of the current state, the action and `now`;
    /// `now` fills in omitted dates and becomes the new `updated_at`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::{Duration, Utc};
    /// # use stringlog::domain::{
    /// #     LifecycleAction, OwnerId, StringStatus, StringType, TennisString, TennisStringDraft,
    /// # };
    /// # use uuid::Uuid;
    /// # let now = Utc::now();
    /// # let string = TennisString::new(TennisStringDraft {
    /// #     id: Uuid::new_v4(), owner_id: OwnerId::random(),
    /// #     brand: "Babolat".to_owned(), model: "RPM Blast".to_owned(), gauge: None,
    /// #     string_type: StringType::Polyester, main_tension: None, cross_tension: None,
    /// #     status: StringStatus::Inventory, date_strung: None, date_removed: None,
    /// #     notes: None, created_at: now, updated_at: now,
    /// # })?;
    /// let strung = string.apply(LifecycleAction::StringIt { date_strung: None }, now)?;
    /// let three_days_ago = now - Duration::days(3);
    /// let removed = strung.apply(
    ///     LifecycleAction::Remove { date_removed: Some(three_days_ago) },
    ///     now,
    /// )?;
    /// // An explicit removal date is kept even when it predates `date_strung`.
    /// assert_eq!(removed.date_removed(), Some(three_days_ago));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply(&self, action: LifecycleAction, now: DateTime<Utc>) -> Result<Self, LifecycleError> {
        let mut draft = self.to_draft();
        match (self.status, action) {
            (StringStatus::Inventory, LifecycleAction::StringIt { date_strung }) => {
                draft.status = StringStatus::Strung;
                draft.date_strung = Some(date_strung.unwrap_or(now));
                draft.date_removed = None;
            }
            (StringStatus::Strung, LifecycleAction::Remove { date_removed }) => {
                draft.status = StringStatus::Removed;
                draft.date_removed = Some(date_removed.unwrap_or(now));
            }
            (StringStatus::Removed, LifecycleAction::ReturnToInventory) => {
                draft.status = StringStatus::Inventory;
                draft.date_strung = None;
                draft.date_removed = None;
            }
            (StringStatus::Removed, LifecycleAction::Restore) => {
                draft.status = StringStatus::Strung;
                draft.date_removed = None;
            }
            (from, action) => {
                return Err(LifecycleError::UndefinedTransition {
                    from,
                    action: action.name(),
                });
            }
        }
        draft.updated_at = now;
        Ok(Self::new(draft)?)
    }
}
