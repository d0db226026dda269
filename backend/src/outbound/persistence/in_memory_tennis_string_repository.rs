//! In-process `TennisStringRepository` used when no database is configured.
//!
//! Storage is a map behind an async `RwLock`; cloning the repository shares
//! the same map.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{StringListFilter, TennisStringRepository, TennisStringRepositoryError};
use crate::domain::{OwnerId, TennisString};

/// Map-backed tennis string repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTennisStringRepository {
    strings: Arc<RwLock<HashMap<Uuid, TennisString>>>,
}

impl InMemoryTennisStringRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TennisStringRepository for InMemoryTennisStringRepository {
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisString>, TennisStringRepositoryError> {
        let strings = self.strings.read().await;
        Ok(strings
            .get(id)
            .filter(|string| string.owner_id() == *owner_id)
            .cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
        filter: &StringListFilter,
    ) -> Result<Vec<TennisString>, TennisStringRepositoryError> {
        let strings = self.strings.read().await;
        let mut owned: Vec<TennisString> = strings
            .values()
            .filter(|string| string.owner_id() == *owner_id && filter.matches(string))
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(owned)
    }

    async fn save(&self, string: &TennisString) -> Result<(), TennisStringRepositoryError> {
        let mut strings = self.strings.write().await;
        if let Some(existing) = strings.get(&string.id()) {
            if existing.owner_id() != string.owner_id() {
                return Err(TennisStringRepositoryError::query(format!(
                    "tennis string {} belongs to another owner",
                    string.id()
                )));
            }
        }
        strings.insert(string.id(), string.clone());
        Ok(())
    }

    async fn delete(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<bool, TennisStringRepositoryError> {
        let mut strings = self.strings.write().await;
        let owned = strings
            .get(id)
            .is_some_and(|string| string.owner_id() == *owner_id);
        if owned {
            strings.remove(id);
        }
        Ok(owned)
    }
}
