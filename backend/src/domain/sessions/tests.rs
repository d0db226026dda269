//! Regression coverage for session validation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::{
    CourtSurface, SessionType, TennisSession, TennisSessionDraft, TennisSessionPatch,
    TennisSessionValidationError,
};
use crate::domain::OwnerId;

#[fixture]
fn draft() -> TennisSessionDraft {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 2, 18, 30, 0)
        .single()
        .expect("valid timestamp");
    TennisSessionDraft {
        id: Uuid::new_v4(),
        owner_id: OwnerId::random(),
        session_date: now,
        session_type: SessionType::Match,
        duration_minutes: 60,
        location: Some(" Riverside Tennis Club ".to_owned()),
        surface: Some(CourtSurface::Clay),
        string_id: Some(Uuid::new_v4()),
        string_feeling_rating: Some(8),
        string_notes: Some(String::new()),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[rstest]
fn constructs_and_normalises_text(draft: TennisSessionDraft) {
    let session = TennisSession::new(draft.clone()).expect("valid session");

    assert_eq!(session.location(), Some("Riverside Tennis Club"));
    assert_eq!(session.string_notes(), None);
    assert_eq!(session.string_id(), draft.string_id);
    assert_eq!(session.surface(), Some(CourtSurface::Clay));
}

#[rstest]
fn rejects_zero_duration(mut draft: TennisSessionDraft) {
    draft.duration_minutes = 0;

    let err = TennisSession::new(draft).expect_err("zero duration");

    assert_eq!(err, TennisSessionValidationError::NonPositiveDuration);
    assert_eq!(err.field(), "durationMinutes");
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(10, true)]
#[case(11, false)]
fn bounds_feeling_rating(mut draft: TennisSessionDraft, #[case] rating: u8, #[case] ok: bool) {
    draft.string_feeling_rating = Some(rating);

    let result = TennisSession::new(draft);

    assert_eq!(result.is_ok(), ok);
    if let Err(err) = result {
        assert_eq!(err.field(), "stringFeelingRating");
    }
}

#[rstest]
fn patch_revalidates(draft: TennisSessionDraft) {
    let session = TennisSession::new(draft).expect("valid session");
    let later = session.updated_at() + Duration::minutes(1);

    let bad = session.patched(
        TennisSessionPatch {
            string_feeling_rating: Some(12),
            ..TennisSessionPatch::default()
        },
        later,
    );
    let good = session
        .patched(
            TennisSessionPatch {
                duration_minutes: Some(75),
                session_type: Some(SessionType::Practice),
                ..TennisSessionPatch::default()
            },
            later,
        )
        .expect("valid patch");

    assert!(matches!(
        bad,
        Err(TennisSessionValidationError::RatingOutOfRange { rating: 12 })
    ));
    assert_eq!(good.duration_minutes(), 75);
    assert_eq!(good.session_type(), SessionType::Practice);
    assert_eq!(good.string_feeling_rating(), Some(8));
    assert_eq!(good.updated_at(), later);
}

#[rstest]
fn patch_json_uses_wire_names() {
    let patch: TennisSessionPatch = serde_json::from_value(serde_json::json!({
        "type": "hitting_session",
        "durationMinutes": 45,
        "surface": "hard_court"
    }))
    .expect("valid patch");

    assert_eq!(patch.session_type, Some(SessionType::HittingSession));
    assert_eq!(patch.duration_minutes, Some(45));
    assert_eq!(patch.surface, Some(CourtSurface::HardCourt));
}

#[rstest]
fn session_date_is_independent_of_created_at(mut draft: TennisSessionDraft) {
    let played: DateTime<Utc> = draft.created_at - Duration::days(3);
    draft.session_date = played;

    let session = TennisSession::new(draft).expect("backdated session");

    assert_eq!(session.session_date(), played);
}
