//! Driving port for tennis string reads and usage statistics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, OwnerId, StringUsageStats};

use super::tennis_string_command::TennisStringPayload;
use super::tennis_string_repository::StringListFilter;

/// Request to fetch one string setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTennisStringRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
}

/// Response for a single string lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTennisStringResponse {
    pub string: TennisStringPayload,
}

/// Request to list an owner's strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTennisStringsRequest {
    pub owner_id: OwnerId,
    #[serde(default)]
    pub filter: StringListFilter,
}

/// Response containing the listed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTennisStringsResponse {
    pub strings: Vec<TennisStringPayload>,
}

/// Request for a string's usage statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringUsageRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
}

/// Response pairing a string with its freshly computed usage statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringUsageResponse {
    pub string: TennisStringPayload,
    pub usage: StringUsageStats,
}

/// Request asking whether an owner has a given string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringExistsRequest {
    pub owner_id: OwnerId,
    pub string_id: Uuid,
}

/// Driving port for tennis string read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # use stringlog::domain::OwnerId;
/// # use stringlog::domain::ports::{
/// #     FixtureTennisStringQuery, StringExistsRequest, TennisStringQuery,
/// # };
/// # async fn example() -> Result<(), stringlog::domain::Error> {
/// let query = FixtureTennisStringQuery;
/// let exists = query
///     .string_exists(StringExistsRequest {
///         owner_id: OwnerId::random(),
///         string_id: uuid::Uuid::new_v4(),
///     })
///     .await?;
/// assert!(!exists);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TennisStringQuery: Send + Sync {
    /// Fetches one string owned by the caller.
    async fn get_string(
        &self,
        request: GetTennisStringRequest,
    ) -> Result<GetTennisStringResponse, Error>;

    /// Lists the caller's strings matching the filter.
    async fn list_strings(
        &self,
        request: ListTennisStringsRequest,
    ) -> Result<ListTennisStringsResponse, Error>;

    /// Recomputes usage statistics from every linked session.
    ///
    /// A string with no sessions yields zeros rather than an error.
    async fn string_usage(&self, request: StringUsageRequest)
    -> Result<StringUsageResponse, Error>;

    /// Returns whether the string exists and belongs to the owner.
    async fn string_exists(&self, request: StringExistsRequest) -> Result<bool, Error>;
}

/// Fixture query implementation backed by an empty collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTennisStringQuery;

#[async_trait]
impl TennisStringQuery for FixtureTennisStringQuery {
    async fn get_string(
        &self,
        request: GetTennisStringRequest,
    ) -> Result<GetTennisStringResponse, Error> {
        Err(Error::not_found(format!(
            "tennis string {} not found",
            request.string_id
        )))
    }

    async fn list_strings(
        &self,
        _request: ListTennisStringsRequest,
    ) -> Result<ListTennisStringsResponse, Error> {
        Ok(ListTennisStringsResponse {
            strings: Vec::new(),
        })
    }

    async fn string_usage(
        &self,
        request: StringUsageRequest,
    ) -> Result<StringUsageResponse, Error> {
        Err(Error::not_found(format!(
            "tennis string {} not found",
            request.string_id
        )))
    }

    async fn string_exists(&self, _request: StringExistsRequest) -> Result<bool, Error> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::{ErrorCode, StringStatus};

    #[rstest]
    fn list_request_defaults_to_unfiltered() {
        let request: ListTennisStringsRequest = serde_json::from_value(json!({
            "ownerId": OwnerId::random().to_string(),
        }))
        .expect("valid request");

        assert_eq!(request.filter, StringListFilter::default());
    }

    #[rstest]
    fn list_request_accepts_status_filter() {
        let request: ListTennisStringsRequest = serde_json::from_value(json!({
            "ownerId": OwnerId::random().to_string(),
            "filter": { "status": "strung" },
        }))
        .expect("valid request");

        assert_eq!(request.filter.status, Some(StringStatus::Strung));
        assert_eq!(request.filter.is_active, None);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_usage_is_not_found() {
        let err = FixtureTennisStringQuery
            .string_usage(StringUsageRequest {
                owner_id: OwnerId::random(),
                string_id: Uuid::new_v4(),
            })
            .await
            .expect_err("empty fixture");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
