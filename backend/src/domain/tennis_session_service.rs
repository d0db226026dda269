//! Tennis session domain services.
//!
//! Sessions may reference a string; the reference is checked against the
//! string repository before anything is persisted because storage does not
//! enforce it.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    CreateTennisSessionRequest, CreateTennisSessionResponse, DeleteTennisSessionRequest,
    GetTennisSessionRequest, GetTennisSessionResponse, GetTennisSessionWithStringResponse,
    ListTennisSessionsRequest, ListTennisSessionsResponse, TennisSessionCommand,
    TennisSessionQuery, TennisSessionRepository, TennisStringRepository,
    UpdateTennisSessionRequest, UpdateTennisSessionResponse,
};
use crate::domain::tennis_string_service::{
    map_session_repository_error, map_string_repository_error,
};
use crate::domain::{Error, OwnerId, TennisSession};

fn session_not_found(session_id: Uuid) -> Error {
    Error::not_found(format!("tennis session {session_id} not found"))
}

async fn load_session<S>(
    repo: &S,
    session_id: Uuid,
    owner_id: &OwnerId,
) -> Result<TennisSession, Error>
where
    S: TennisSessionRepository + ?Sized,
{
    repo.find_by_id(&session_id, owner_id)
        .await
        .map_err(map_session_repository_error)?
        .ok_or_else(|| session_not_found(session_id))
}

/// Tennis session service implementing the command driving port.
#[derive(Clone)]
pub struct TennisSessionCommandService<S, R> {
    session_repo: Arc<S>,
    string_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<S, R> TennisSessionCommandService<S, R> {
    /// Create a new command service; the string repository validates links.
    pub fn new(session_repo: Arc<S>, string_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session_repo,
            string_repo,
            clock,
        }
    }
}

impl<S, R> TennisSessionCommandService<S, R>
where
    R: TennisStringRepository,
{
    async fn ensure_string_owned(
        &self,
        string_id: Option<Uuid>,
        owner_id: &OwnerId,
    ) -> Result<(), Error> {
        let Some(string_id) = string_id else {
            return Ok(());
        };
        let found = self
            .string_repo
            .find_by_id(&string_id, owner_id)
            .await
            .map_err(map_string_repository_error)?;
        if found.is_none() {
            debug!(%string_id, "session references unknown string");
            return Err(Error::invalid_field(
                "stringId",
                format!("tennis string {string_id} does not exist"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<S, R> TennisSessionCommand for TennisSessionCommandService<S, R>
where
    S: TennisSessionRepository,
    R: TennisStringRepository,
{
    async fn create_session(
        &self,
        request: CreateTennisSessionRequest,
    ) -> Result<CreateTennisSessionResponse, Error> {
        let draft = request
            .session
            .into_draft(Uuid::new_v4(), request.owner_id, self.clock.utc());
        let session = TennisSession::new(draft)
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;
        self.ensure_string_owned(session.string_id(), &request.owner_id)
            .await?;

        self.session_repo
            .save(&session)
            .await
            .map_err(map_session_repository_error)?;

        Ok(CreateTennisSessionResponse {
            session: session.into(),
        })
    }

    async fn update_session(
        &self,
        request: UpdateTennisSessionRequest,
    ) -> Result<UpdateTennisSessionResponse, Error> {
        let current =
            load_session(self.session_repo.as_ref(), request.session_id, &request.owner_id)
                .await?;
        let relinked = request
            .patch
            .string_id
            .filter(|id| current.string_id() != Some(*id));
        let updated = current
            .patched(request.patch, self.clock.utc())
            .map_err(|err| Error::invalid_field(err.field(), err.to_string()))?;
        self.ensure_string_owned(relinked, &request.owner_id).await?;

        self.session_repo
            .save(&updated)
            .await
            .map_err(map_session_repository_error)?;

        Ok(UpdateTennisSessionResponse {
            session: updated.into(),
        })
    }

    async fn delete_session(&self, request: DeleteTennisSessionRequest) -> Result<(), Error> {
        let deleted = self
            .session_repo
            .delete(&request.session_id, &request.owner_id)
            .await
            .map_err(map_session_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(session_not_found(request.session_id))
        }
    }
}

/// Tennis session service implementing the query driving port.
#[derive(Clone)]
pub struct TennisSessionQueryService<S, R> {
    session_repo: Arc<S>,
    string_repo: Arc<R>,
}

impl<S, R> TennisSessionQueryService<S, R> {
    /// Create a new query service over sessions and their strings.
    pub fn new(session_repo: Arc<S>, string_repo: Arc<R>) -> Self {
        Self {
            session_repo,
            string_repo,
        }
    }
}

#[async_trait]
impl<S, R> TennisSessionQuery for TennisSessionQueryService<S, R>
where
    S: TennisSessionRepository,
    R: TennisStringRepository,
{
    async fn get_session(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionResponse, Error> {
        let session =
            load_session(self.session_repo.as_ref(), request.session_id, &request.owner_id)
                .await?;
        Ok(GetTennisSessionResponse {
            session: session.into(),
        })
    }

    async fn get_session_with_string(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionWithStringResponse, Error> {
        let session =
            load_session(self.session_repo.as_ref(), request.session_id, &request.owner_id)
                .await?;
        let string = match session.string_id() {
            Some(string_id) => self
                .string_repo
                .find_by_id(&string_id, &request.owner_id)
                .await
                .map_err(map_string_repository_error)?,
            None => None,
        };

        Ok(GetTennisSessionWithStringResponse {
            session: session.into(),
            string: string.map(Into::into),
        })
    }

    async fn list_sessions(
        &self,
        request: ListTennisSessionsRequest,
    ) -> Result<ListTennisSessionsResponse, Error> {
        let sessions = self
            .session_repo
            .list_for_owner(&request.owner_id)
            .await
            .map_err(map_session_repository_error)?;
        Ok(ListTennisSessionsResponse {
            sessions: sessions.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
#[path = "tennis_session_service_tests.rs"]
mod tests;
