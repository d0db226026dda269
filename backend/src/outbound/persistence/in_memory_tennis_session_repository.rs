//! In-process `TennisSessionRepository` used when no database is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{TennisSessionRepository, TennisSessionRepositoryError};
use crate::domain::{OwnerId, TennisSession};

/// Map-backed tennis session repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTennisSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, TennisSession>>>,
}

impl InMemoryTennisSessionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect_where<P>(&self, predicate: P) -> Vec<TennisSession>
    where
        P: Fn(&TennisSession) -> bool,
    {
        let sessions = self.sessions.read().await;
        let mut matched: Vec<TennisSession> = sessions
            .values()
            .filter(|session| predicate(session))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.session_date()
                .cmp(&a.session_date())
                .then_with(|| b.id().cmp(&a.id()))
        });
        matched
    }
}

#[async_trait]
impl TennisSessionRepository for InMemoryTennisSessionRepository {
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisSession>, TennisSessionRepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(id)
            .filter(|session| session.owner_id() == *owner_id)
            .cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        let owner_id = *owner_id;
        Ok(self
            .collect_where(|session| session.owner_id() == owner_id)
            .await)
    }

    async fn list_by_string_id(
        &self,
        string_id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        let (string_id, owner_id) = (*string_id, *owner_id);
        Ok(self
            .collect_where(|session| {
                session.owner_id() == owner_id && session.string_id() == Some(string_id)
            })
            .await)
    }

    async fn save(&self, session: &TennisSession) -> Result<(), TennisSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.get(&session.id()) {
            if existing.owner_id() != session.owner_id() {
                return Err(TennisSessionRepositoryError::query(format!(
                    "tennis session {} belongs to another owner",
                    session.id()
                )));
            }
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn delete(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<bool, TennisSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;
        let owned = sessions
            .get(id)
            .is_some_and(|session| session.owner_id() == *owner_id);
        if owned {
            sessions.remove(id);
        }
        Ok(owned)
    }
}
