//! Driving port for tennis session reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, OwnerId};

use super::tennis_session_command::TennisSessionPayload;
use super::tennis_string_command::TennisStringPayload;

/// Request to fetch one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTennisSessionRequest {
    pub owner_id: OwnerId,
    pub session_id: Uuid,
}

/// Response for a single session lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTennisSessionResponse {
    pub session: TennisSessionPayload,
}

/// Response pairing a session with the string it references.
///
/// `string` is `None` when the session names no string or the reference
/// dangles after the string was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTennisSessionWithStringResponse {
    pub session: TennisSessionPayload,
    pub string: Option<TennisStringPayload>,
}

/// Request to list an owner's sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTennisSessionsRequest {
    pub owner_id: OwnerId,
}

/// Sessions ordered newest `sessionDate` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTennisSessionsResponse {
    pub sessions: Vec<TennisSessionPayload>,
}

/// Driving port for tennis session read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisSessionQuery: Send + Sync {
    /// Fetches one session owned by the caller.
    async fn get_session(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionResponse, Error>;

    /// Fetches one session together with its referenced string.
    async fn get_session_with_string(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionWithStringResponse, Error>;

    /// Lists the caller's sessions, newest first.
    async fn list_sessions(
        &self,
        request: ListTennisSessionsRequest,
    ) -> Result<ListTennisSessionsResponse, Error>;
}

/// Fixture query implementation backed by an empty collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisSessionQuery;

#[async_trait]
impl TennisSessionQuery for FixtureTennisSessionQuery {
    async fn get_session(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionResponse, Error> {
        Err(Error::not_found(format!(
            "tennis session {} not found",
            request.session_id
        )))
    }

    async fn get_session_with_string(
        &self,
        request: GetTennisSessionRequest,
    ) -> Result<GetTennisSessionWithStringResponse, Error> {
        Err(Error::not_found(format!(
            "tennis session {} not found",
            request.session_id
        )))
    }

    async fn list_sessions(
        &self,
        _request: ListTennisSessionsRequest,
    ) -> Result<ListTennisSessionsResponse, Error> {
        Ok(ListTennisSessionsResponse {
            sessions: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let response = FixtureTennisSessionQuery
            .list_sessions(ListTennisSessionsRequest {
                owner_id: OwnerId::random(),
            })
            .await
            .expect("fixture list succeeds");

        assert!(response.sessions.is_empty());
    }
}
