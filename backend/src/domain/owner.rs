//! Owner identity used to scope every read and write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`OwnerId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerIdValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for OwnerIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "owner id must not be empty"),
            Self::InvalidId => write!(f, "owner id must be a valid UUID"),
        }
    }
}

impl std::error::Error for OwnerIdValidationError {}

/// Stable identifier of the user who owns strings and sessions.
///
/// # Examples
/// ```
/// use stringlog::domain::OwnerId;
///
/// let owner = OwnerId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(owner.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerId(Uuid);

impl OwnerId {
    /// Validate and construct an [`OwnerId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, OwnerIdValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(OwnerIdValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(OwnerIdValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| OwnerIdValidationError::InvalidId)
    }

    /// Generate a new random [`OwnerId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OwnerId {
    type Err = OwnerIdValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl From<OwnerId> for String {
    fn from(value: OwnerId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for OwnerId {
    type Error = OwnerIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", OwnerIdValidationError::EmptyId)]
    #[case("not-a-uuid", OwnerIdValidationError::InvalidId)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", OwnerIdValidationError::InvalidId)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: OwnerIdValidationError) {
        assert_eq!(OwnerId::new(raw), Err(expected));
    }

    #[rstest]
    fn serde_uses_plain_string() {
        let owner = OwnerId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&owner).expect("serialise owner");

        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let parsed: OwnerId = serde_json::from_str(&json).expect("deserialise owner");
        assert_eq!(parsed, owner);
    }

    #[rstest]
    fn random_ids_differ() {
        assert_ne!(OwnerId::random(), OwnerId::random());
    }
}
