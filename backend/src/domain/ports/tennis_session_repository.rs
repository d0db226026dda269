//! Port for owner-scoped tennis session persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{OwnerId, TennisSession};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tennis session repository adapters.
    pub enum TennisSessionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "tennis session repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tennis session repository query failed: {message}",
    }
}

/// Port for reading and writing played sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisSessionRepository: Send + Sync {
    /// Find a session by id within one owner's collection.
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisSession>, TennisSessionRepositoryError>;

    /// List an owner's sessions, newest `session_date` first.
    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError>;

    /// Fetch every session of one owner that references `string_id`.
    ///
    /// The result is complete and unpaginated; ordering matches
    /// [`Self::list_for_owner`].
    async fn list_by_string_id(
        &self,
        string_id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError>;

    /// Insert or replace a session.
    async fn save(&self, session: &TennisSession) -> Result<(), TennisSessionRepositoryError>;

    /// Delete a session; returns `false` when nothing matched.
    async fn delete(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<bool, TennisSessionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise session persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisSessionRepository;

#[async_trait]
impl TennisSessionRepository for FixtureTennisSessionRepository {
    async fn find_by_id(
        &self,
        _id: &Uuid,
        _owner_id: &OwnerId,
    ) -> Result<Option<TennisSession>, TennisSessionRepositoryError> {
        Ok(None)
    }

    async fn list_for_owner(
        &self,
        _owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_by_string_id(
        &self,
        _string_id: &Uuid,
        _owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, _session: &TennisSession) -> Result<(), TennisSessionRepositoryError> {
        Ok(())
    }

    async fn delete(
        &self,
        _id: &Uuid,
        _owner_id: &OwnerId,
    ) -> Result<bool, TennisSessionRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_are_empty() {
        let repo = FixtureTennisSessionRepository;
        let owner = OwnerId::random();

        let all = repo.list_for_owner(&owner).await.expect("fixture list");
        let linked = repo
            .list_by_string_id(&Uuid::new_v4(), &owner)
            .await
            .expect("fixture list");

        assert!(all.is_empty());
        assert!(linked.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_reports_no_match() {
        let repo = FixtureTennisSessionRepository;
        let deleted = repo
            .delete(&Uuid::new_v4(), &OwnerId::random())
            .await
            .expect("fixture delete");
        assert!(!deleted);
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = TennisSessionRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }
}
