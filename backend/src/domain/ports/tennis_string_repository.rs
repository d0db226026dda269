//! Port for owner-scoped tennis string persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{OwnerId, StringStatus, TennisString};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tennis string repository adapters.
    pub enum TennisStringRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "tennis string repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tennis string repository query failed: {message}",
    }
}

/// Pass-through listing predicate.
///
/// Both fields are optional; when both are set a string must satisfy both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringListFilter {
    pub status: Option<StringStatus>,
    pub is_active: Option<bool>,
}

impl StringListFilter {
    /// Filter selecting one lifecycle stage.
    pub fn by_status(status: StringStatus) -> Self {
        Self {
            status: Some(status),
            is_active: None,
        }
    }

    /// Filter selecting active (`true`) or removed (`false`) strings.
    pub fn by_active(is_active: bool) -> Self {
        Self {
            status: None,
            is_active: Some(is_active),
        }
    }

    /// Returns whether `string` passes the filter.
    pub fn matches(&self, string: &TennisString) -> bool {
        self.status.is_none_or(|status| string.status() == status)
            && self
                .is_active
                .is_none_or(|is_active| string.is_active() == is_active)
    }
}

/// Port for reading and writing string setups.
///
/// Every read and delete is scoped by owner; a string owned by someone else
/// is indistinguishable from a missing one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisStringRepository: Send + Sync {
    /// Find a string by id within one owner's collection.
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisString>, TennisStringRepositoryError>;

    /// List an owner's strings, newest first by creation time.
    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
        filter: &StringListFilter,
    ) -> Result<Vec<TennisString>, TennisStringRepositoryError>;

    /// Insert or replace a string.
    async fn save(&self, string: &TennisString) -> Result<(), TennisStringRepositoryError>;

    /// Delete a string; returns `false` when nothing matched.
    async fn delete(&self, id: &Uuid, owner_id: &OwnerId)
    -> Result<bool, TennisStringRepositoryError>;
}

/// Fixture implementation for tests that do not exercise string persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisStringRepository;

#[async_trait]
impl TennisStringRepository for FixtureTennisStringRepository {
    async fn find_by_id(
        &self,
        _id: &Uuid,
        _owner_id: &OwnerId,
    ) -> Result<Option<TennisString>, TennisStringRepositoryError> {
        Ok(None)
    }

    async fn list_for_owner(
        &self,
        _owner_id: &OwnerId,
        _filter: &StringListFilter,
    ) -> Result<Vec<TennisString>, TennisStringRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, _string: &TennisString) -> Result<(), TennisStringRepositoryError> {
        Ok(())
    }

    async fn delete(
        &self,
        _id: &Uuid,
        _owner_id: &OwnerId,
    ) -> Result<bool, TennisStringRepositoryError> {
        Ok(false)
    }
}
