//! Tests for tennis session services.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MockTennisSessionRepository, MockTennisStringRepository, NewTennisSessionPayload,
    TennisSessionRepositoryError,
};
use crate::domain::{
    ErrorCode, SessionType, StringStatus, StringType, TennisSessionDraft, TennisSessionPatch,
    TennisString, TennisStringDraft,
};
use crate::test_support::MutableClock;

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 12, 19, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn make_command_service(
    sessions: MockTennisSessionRepository,
    strings: MockTennisStringRepository,
    now: DateTime<Utc>,
) -> TennisSessionCommandService<MockTennisSessionRepository, MockTennisStringRepository> {
    let clock: Arc<dyn Clock> = Arc::new(MutableClock::new(now));
    TennisSessionCommandService::new(Arc::new(sessions), Arc::new(strings), clock)
}

fn new_session(string_id: Option<Uuid>, now: DateTime<Utc>) -> NewTennisSessionPayload {
    NewTennisSessionPayload {
        session_date: now - Duration::hours(2),
        session_type: SessionType::Match,
        duration_minutes: 90,
        location: Some("Riverside Tennis Club".to_owned()),
        surface: None,
        string_id,
        string_feeling_rating: Some(7),
        string_notes: None,
        notes: None,
    }
}

fn owned_string(id: Uuid, owner_id: OwnerId, now: DateTime<Utc>) -> TennisString {
    TennisString::new(TennisStringDraft {
        id,
        owner_id,
        brand: "Solinco".to_owned(),
        model: "Hyper-G".to_owned(),
        gauge: None,
        string_type: StringType::Polyester,
        main_tension: None,
        cross_tension: None,
        status: StringStatus::Strung,
        date_strung: Some(now - Duration::days(3)),
        date_removed: None,
        notes: None,
        created_at: now,
        updated_at: now,
    })
    .expect("valid string")
}

fn stored_session(owner_id: OwnerId, string_id: Option<Uuid>, now: DateTime<Utc>) -> TennisSession {
    TennisSession::new(TennisSessionDraft {
        id: Uuid::new_v4(),
        owner_id,
        session_date: now - Duration::days(1),
        session_type: SessionType::Practice,
        duration_minutes: 60,
        location: None,
        surface: None,
        string_id,
        string_feeling_rating: None,
        string_notes: None,
        notes: None,
        created_at: now,
        updated_at: now,
    })
    .expect("valid session")
}

#[rstest]
#[tokio::test]
async fn create_without_string_skips_lookup(now: DateTime<Utc>) {
    let mut sessions = MockTennisSessionRepository::new();
    sessions.expect_save().times(1).return_once(|_| Ok(()));
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().times(0);

    let service = make_command_service(sessions, strings, now);
    let response = service
        .create_session(CreateTennisSessionRequest {
            owner_id: OwnerId::random(),
            session: new_session(None, now),
        })
        .await
        .expect("create succeeds");

    assert_eq!(response.session.string_id, None);
    assert_eq!(response.session.created_at, now);
}

#[rstest]
#[tokio::test]
async fn create_with_owned_string_persists(now: DateTime<Utc>) {
    let owner_id = OwnerId::random();
    let string_id = Uuid::new_v4();
    let mut strings = MockTennisStringRepository::new();
    strings
        .expect_find_by_id()
        .withf(move |id, owner| *id == string_id && *owner == owner_id)
        .times(1)
        .return_once(move |_, _| Ok(Some(owned_string(string_id, owner_id, now))));
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_save()
        .withf(move |session| session.string_id() == Some(string_id))
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_command_service(sessions, strings, now);
    let response = service
        .create_session(CreateTennisSessionRequest {
            owner_id,
            session: new_session(Some(string_id), now),
        })
        .await
        .expect("create succeeds");

    assert_eq!(response.session.string_id, Some(string_id));
}

#[rstest]
#[tokio::test]
async fn create_with_unknown_string_is_rejected(now: DateTime<Utc>) {
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().return_once(|_, _| Ok(None));
    let mut sessions = MockTennisSessionRepository::new();
    sessions.expect_save().times(0);

    let service = make_command_service(sessions, strings, now);
    let error = service
        .create_session(CreateTennisSessionRequest {
            owner_id: OwnerId::random(),
            session: new_session(Some(Uuid::new_v4()), now),
        })
        .await
        .expect_err("dangling reference");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.field(), Some("stringId"));
}

#[rstest]
#[tokio::test]
async fn create_validates_before_checking_string(now: DateTime<Utc>) {
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().times(0);
    let mut payload = new_session(Some(Uuid::new_v4()), now);
    payload.string_feeling_rating = Some(0);

    let service = make_command_service(MockTennisSessionRepository::new(), strings, now);
    let error = service
        .create_session(CreateTennisSessionRequest {
            owner_id: OwnerId::random(),
            session: payload,
        })
        .await
        .expect_err("rating out of range");

    assert_eq!(error.field(), Some("stringFeelingRating"));
}

#[rstest]
#[tokio::test]
async fn update_keeps_existing_link_without_lookup(now: DateTime<Utc>) {
    let owner_id = OwnerId::random();
    let string_id = Uuid::new_v4();
    let session = stored_session(owner_id, Some(string_id), now);
    let session_id = session.id();
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_find_by_id()
        .return_once(move |_, _| Ok(Some(session)));
    sessions.expect_save().times(1).return_once(|_| Ok(()));
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().times(0);

    let service = make_command_service(sessions, strings, now);
    let response = service
        .update_session(UpdateTennisSessionRequest {
            owner_id,
            session_id,
            patch: TennisSessionPatch {
                string_id: Some(string_id),
                string_feeling_rating: Some(9),
                ..TennisSessionPatch::default()
            },
        })
        .await
        .expect("update succeeds");

    assert_eq!(response.session.string_feeling_rating, Some(9));
    assert_eq!(response.session.updated_at, now);
}

#[rstest]
#[tokio::test]
async fn update_to_foreign_string_is_rejected(now: DateTime<Utc>) {
    let owner_id = OwnerId::random();
    let session = stored_session(owner_id, None, now);
    let session_id = session.id();
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_find_by_id()
        .return_once(move |_, _| Ok(Some(session)));
    sessions.expect_save().times(0);
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().times(1).return_once(|_, _| Ok(None));

    let service = make_command_service(sessions, strings, now);
    let error = service
        .update_session(UpdateTennisSessionRequest {
            owner_id,
            session_id,
            patch: TennisSessionPatch {
                string_id: Some(Uuid::new_v4()),
                ..TennisSessionPatch::default()
            },
        })
        .await
        .expect_err("foreign string");

    assert_eq!(error.field(), Some("stringId"));
}

#[rstest]
#[tokio::test]
async fn delete_missing_session_is_not_found(now: DateTime<Utc>) {
    let mut sessions = MockTennisSessionRepository::new();
    sessions.expect_delete().return_once(|_, _| Ok(false));

    let service = make_command_service(sessions, MockTennisStringRepository::new(), now);
    let error = service
        .delete_session(DeleteTennisSessionRequest {
            owner_id: OwnerId::random(),
            session_id: Uuid::new_v4(),
        })
        .await
        .expect_err("missing session");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn session_with_dangling_string_has_no_string(now: DateTime<Utc>) {
    let owner_id = OwnerId::random();
    let session = stored_session(owner_id, Some(Uuid::new_v4()), now);
    let session_id = session.id();
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_find_by_id()
        .return_once(move |_, _| Ok(Some(session)));
    let mut strings = MockTennisStringRepository::new();
    strings.expect_find_by_id().times(1).return_once(|_, _| Ok(None));

    let service = TennisSessionQueryService::new(Arc::new(sessions), Arc::new(strings));
    let response = service
        .get_session_with_string(GetTennisSessionRequest {
            owner_id,
            session_id,
        })
        .await
        .expect("lookup succeeds");

    assert_eq!(response.session.id, session_id);
    assert!(response.string.is_none());
}

#[rstest]
#[tokio::test]
async fn session_with_string_returns_both(now: DateTime<Utc>) {
    let owner_id = OwnerId::random();
    let string_id = Uuid::new_v4();
    let session = stored_session(owner_id, Some(string_id), now);
    let session_id = session.id();
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_find_by_id()
        .return_once(move |_, _| Ok(Some(session)));
    let mut strings = MockTennisStringRepository::new();
    strings
        .expect_find_by_id()
        .return_once(move |_, _| Ok(Some(owned_string(string_id, owner_id, now))));

    let service = TennisSessionQueryService::new(Arc::new(sessions), Arc::new(strings));
    let response = service
        .get_session_with_string(GetTennisSessionRequest {
            owner_id,
            session_id,
        })
        .await
        .expect("lookup succeeds");

    assert_eq!(response.string.map(|s| s.id), Some(string_id));
}

#[rstest]
#[tokio::test]
async fn list_query_error_maps_to_internal() {
    let mut sessions = MockTennisSessionRepository::new();
    sessions
        .expect_list_for_owner()
        .return_once(|_| Err(TennisSessionRepositoryError::query("bad column")));

    let service =
        TennisSessionQueryService::new(Arc::new(sessions), Arc::new(MockTennisStringRepository::new()));
    let error = service
        .list_sessions(ListTennisSessionsRequest {
            owner_id: OwnerId::random(),
        })
        .await
        .expect_err("query failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
