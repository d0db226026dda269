//! Tennis string domain services.
//!
//! These services implement the string driving ports: owner-scoped CRUD,
//! lifecycle transitions and usage aggregation. Each mutation reads the
//! current entity, applies a pure function and writes the result back.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{
    CreateTennisStringRequest, CreateTennisStringResponse, DeleteTennisStringRequest,
    GetTennisStringRequest, GetTennisStringResponse, ListTennisStringsRequest,
    ListTennisStringsResponse, StringExistsRequest, StringUsageRequest, StringUsageResponse,
    TennisSessionRepository, TennisSessionRepositoryError, TennisStringCommand,
    TennisStringQuery, TennisStringRepository, TennisStringRepositoryError,
    TransitionTennisStringRequest, TransitionTennisStringResponse, UpdateTennisStringRequest,
    UpdateTennisStringResponse,
};
use crate::domain::{Error, OwnerId, TennisString, compute_usage};

pub(crate) fn map_string_repository_error(error: TennisStringRepositoryError) -> Error {
    match error {
        TennisStringRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("tennis string repository unavailable: {message}"))
        }
        TennisStringRepositoryError::Query { message } => {
            Error::internal(format!("tennis string repository error: {message}"))
        }
    }
}

pub(crate) fn map_session_repository_error(error: TennisSessionRepositoryError) -> Error {
    match error {
        TennisSessionRepositoryError::Connection { message } => Error::service_unavailable(
            format!("tennis session repository unavailable: {message}"),
        ),
        TennisSessionRepositoryError::Query { message } => {
            Error::internal(format!("tennis session repository error: {message}"))
        }
    }
}

pub(crate) fn string_not_found(string_id: Uuid) -> Error {
    Error::not_found(format!("tennis string {string_id} not found"))
}

async fn load_string<R>(repo: &R, string_id: Uuid, owner_id: &OwnerId) -> Result<TennisString, Error>
where
    R: TennisStringRepository + ?Sized,
{
    repo.find_by_id(&string_id, owner_id)
        .await
        .map_err(map_string_repository_error)?
        .ok_or_else(|| string_not_found(string_id))
}

/// Tennis string service implementing the command driving port.
#[derive(Clone)]
pub struct TennisStringCommandService<R> {
    string_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> TennisStringCommandService<R> {
    /// Create a new command service with the string repository and clock.
    pub fn new(string_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { string_repo, clock }
    }
}

#[async_trait]
impl<R> TennisStringCommand for TennisStringCommandService<R>
where
    R: TennisStringRepository,
{
    async fn create_string(
        &self,
        request: CreateTennisStringRequest,
    ) -> Result<CreateTennisStringResponse, Error> {
        let draft = request
            .string
            .into_draft(Uuid::new_v4(), request.owner_id, self.clock.utc());
        let string = TennisString::new(draft)
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;

        self.string_repo
            .save(&string)
            .await
            .map_err(map_string_repository_error)?;

        Ok(CreateTennisStringResponse {
            string: string.into(),
        })
    }

    async fn update_string(
        &self,
        request: UpdateTennisStringRequest,
    ) -> Result<UpdateTennisStringResponse, Error> {
        let current =
            load_string(self.string_repo.as_ref(), request.string_id, &request.owner_id).await?;
        let updated = current
            .patched(request.patch, self.clock.utc())
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;

        self.string_repo
            .save(&updated)
            .await
            .map_err(map_string_repository_error)?;

        Ok(UpdateTennisStringResponse {
            string: updated.into(),
        })
    }

    async fn transition_string(
        &self,
        request: TransitionTennisStringRequest,
    ) -> Result<TransitionTennisStringResponse, Error> {
        let current =
            load_string(self.string_repo.as_ref(), request.string_id, &request.owner_id).await?;
        let next = current
            .apply(request.action, self.clock.utc())
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;

        self.string_repo
            .save(&next)
            .await
            .map_err(map_string_repository_error)?;
        info!(
            string_id = %next.id(),
            action = request.action.name(),
            from = %current.status(),
            to = %next.status(),
            "tennis string transitioned"
        );

        Ok(TransitionTennisStringResponse {
            string: next.into(),
        })
    }

    async fn delete_string(&self, request: DeleteTennisStringRequest) -> Result<(), Error> {
        let deleted = self
            .string_repo
            .delete(&request.string_id, &request.owner_id)
            .await
            .map_err(map_string_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(string_not_found(request.string_id))
        }
    }
}

/// Tennis string service implementing the query driving port.
#[derive(Clone)]
pub struct TennisStringQueryService<R, S> {
    string_repo: Arc<R>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<R, S> TennisStringQueryService<R, S> {
    /// Create a new query service over strings and their linked sessions.
    pub fn new(string_repo: Arc<R>, session_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            string_repo,
            session_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R, S> TennisStringQuery for TennisStringQueryService<R, S>
where
    R: TennisStringRepository,
    S: TennisSessionRepository,
{
    async fn get_string(
        &self,
        request: GetTennisStringRequest,
    ) -> Result<GetTennisStringResponse, Error> {
        let string =
            load_string(self.string_repo.as_ref(), request.string_id, &request.owner_id).await?;
        Ok(GetTennisStringResponse {
            string: string.into(),
        })
    }

    async fn list_strings(
        &self,
        request: ListTennisStringsRequest,
    ) -> Result<ListTennisStringsResponse, Error> {
        let strings = self
            .string_repo
            .list_for_owner(&request.owner_id, &request.filter)
            .await
            .map_err(map_string_repository_error)?;
        Ok(ListTennisStringsResponse {
            strings: strings.into_iter().map(Into::into).collect(),
        })
    }

    async fn string_usage(
        &self,
        request: StringUsageRequest,
    ) -> Result<StringUsageResponse, Error> {
        let string =
            load_string(self.string_repo.as_ref(), request.string_id, &request.owner_id).await?;
        let sessions = self
            .session_repo
            .list_by_string_id(&request.string_id, &request.owner_id)
            .await
            .map_err(map_session_repository_error)?;

        let usage = compute_usage(&string, &sessions, self.clock.utc());
        Ok(StringUsageResponse {
            string: string.into(),
            usage,
        })
    }

    async fn string_exists(&self, request: StringExistsRequest) -> Result<bool, Error> {
        let found = self
            .string_repo
            .find_by_id(&request.string_id, &request.owner_id)
            .await
            .map_err(map_string_repository_error)?;
        Ok(found.is_some())
    }
}

#[cfg(test)]
#[path = "tennis_string_service_tests.rs"]
mod tests;
