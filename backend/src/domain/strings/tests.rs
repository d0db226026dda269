//! Regression coverage for string setups and their lifecycle.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::{
    LifecycleAction, LifecycleError, StringStatus, StringType, TennisString, TennisStringDraft,
    TennisStringPatch, TennisStringValidationError,
};
use crate::domain::OwnerId;

#[fixture]
fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn build_draft(now: DateTime<Utc>) -> TennisStringDraft {
    TennisStringDraft {
        id: Uuid::new_v4(),
        owner_id: OwnerId::random(),
        brand: "Luxilon".to_owned(),
        model: "ALU Power".to_owned(),
        gauge: Some("1.25mm".to_owned()),
        string_type: StringType::Polyester,
        main_tension: Some(52),
        cross_tension: Some(50),
        status: StringStatus::Inventory,
        date_strung: None,
        date_removed: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

fn inventory_string(now: DateTime<Utc>) -> TennisString {
    TennisString::new(build_draft(now)).expect("valid inventory string")
}

fn assert_removed_iff_date_removed(string: &TennisString) {
    assert_eq!(
        string.status() == StringStatus::Removed,
        string.date_removed().is_some(),
        "status {} disagrees with dateRemoved",
        string.status()
    );
}

#[rstest]
fn constructs_from_valid_draft(t0: DateTime<Utc>) {
    let draft = build_draft(t0);
    let string = TennisString::new(draft.clone()).expect("valid string");

    assert_eq!(string.id(), draft.id);
    assert_eq!(string.brand(), "Luxilon");
    assert_eq!(string.status(), StringStatus::Inventory);
    assert!(string.is_active());
    assert_eq!(string.to_draft(), draft);
}

#[rstest]
fn trims_descriptive_text(t0: DateTime<Utc>) {
    let mut draft = build_draft(t0);
    draft.brand = "  Babolat ".to_owned();
    draft.gauge = Some("   ".to_owned());
    draft.notes = Some(" crisp ".to_owned());

    let string = TennisString::new(draft).expect("valid string");

    assert_eq!(string.brand(), "Babolat");
    assert_eq!(string.gauge(), None);
    assert_eq!(string.notes(), Some("crisp"));
}

#[rstest]
#[case::blank_brand(|d: &mut TennisStringDraft| d.brand = " ".to_owned(), "brand")]
#[case::blank_model(|d: &mut TennisStringDraft| d.model = String::new(), "model")]
#[case::zero_main(|d: &mut TennisStringDraft| d.main_tension = Some(0), "mainTension")]
#[case::zero_cross(|d: &mut TennisStringDraft| d.cross_tension = Some(0), "crossTension")]
fn rejects_invalid_descriptive_fields(
    t0: DateTime<Utc>,
    #[case] mutate: fn(&mut TennisStringDraft),
    #[case] field: &str,
) {
    let mut draft = build_draft(t0);
    mutate(&mut draft);

    let err = TennisString::new(draft).expect_err("draft should be rejected");

    assert_eq!(err.field(), field);
}

#[rstest]
#[case(StringStatus::Inventory, true, false, "dateStrung")]
#[case(StringStatus::Strung, false, false, "dateStrung")]
#[case(StringStatus::Strung, true, true, "dateRemoved")]
#[case(StringStatus::Removed, true, false, "dateRemoved")]
fn rejects_dates_that_contradict_status(
    t0: DateTime<Utc>,
    #[case] status: StringStatus,
    #[case] strung: bool,
    #[case] removed: bool,
    #[case] field: &str,
) {
    let mut draft = build_draft(t0);
    draft.status = status;
    draft.date_strung = strung.then_some(t0);
    draft.date_removed = removed.then_some(t0 + Duration::days(1));

    let err = TennisString::new(draft).expect_err("dates should be rejected");

    assert_eq!(err.field(), field);
}

#[rstest]
fn string_it_defaults_date_to_now(t0: DateTime<Utc>) {
    let later = t0 + Duration::hours(3);
    let strung = inventory_string(t0)
        .apply(LifecycleAction::StringIt { date_strung: None }, later)
        .expect("inventory can be strung");

    assert_eq!(strung.status(), StringStatus::Strung);
    assert_eq!(strung.date_strung(), Some(later));
    assert_eq!(strung.date_removed(), None);
    assert_eq!(strung.updated_at(), later);
    assert_eq!(strung.created_at(), t0);
}

#[rstest]
fn remove_keeps_backdated_date(t0: DateTime<Utc>) {
    let now = t0 + Duration::days(10);
    let three_days_ago = now - Duration::days(3);
    let strung = inventory_string(t0)
        .apply(LifecycleAction::StringIt { date_strung: Some(t0) }, t0)
        .expect("inventory can be strung");

    let removed = strung
        .apply(
            LifecycleAction::Remove {
                date_removed: Some(three_days_ago),
            },
            now,
        )
        .expect("strung string can be removed");

    assert_eq!(removed.status(), StringStatus::Removed);
    assert_eq!(removed.date_removed(), Some(three_days_ago));
    assert_eq!(removed.date_strung(), Some(t0));
    assert!(!removed.is_active());
}

#[rstest]
fn full_cycle_clears_both_dates(t0: DateTime<Utc>) {
    let string = inventory_string(t0);
    let mut states = vec![string.clone()];

    let strung = string
        .apply(LifecycleAction::StringIt { date_strung: None }, t0)
        .expect("string it");
    states.push(strung.clone());
    let removed = strung
        .apply(LifecycleAction::Remove { date_removed: None }, t0 + Duration::days(4))
        .expect("remove");
    states.push(removed.clone());
    let back = removed
        .apply(LifecycleAction::ReturnToInventory, t0 + Duration::days(5))
        .expect("return to inventory");
    states.push(back.clone());

    assert_eq!(back.status(), StringStatus::Inventory);
    assert_eq!(back.date_strung(), None);
    assert_eq!(back.date_removed(), None);
    for state in &states {
        assert_removed_iff_date_removed(state);
    }
}

#[rstest]
fn restore_keeps_date_strung(t0: DateTime<Utc>) {
    let removed = inventory_string(t0)
        .apply(LifecycleAction::StringIt { date_strung: Some(t0) }, t0)
        .and_then(|s| s.apply(LifecycleAction::Remove { date_removed: None }, t0 + Duration::days(2)))
        .expect("removed string");

    let restored = removed
        .apply(LifecycleAction::Restore, t0 + Duration::days(3))
        .expect("removed string can be restored");

    assert_eq!(restored.status(), StringStatus::Strung);
    assert_eq!(restored.date_strung(), Some(t0));
    assert_eq!(restored.date_removed(), None);
    assert!(restored.is_active());
}

#[rstest]
#[case(StringStatus::Inventory, LifecycleAction::Remove { date_removed: None })]
#[case(StringStatus::Inventory, LifecycleAction::ReturnToInventory)]
#[case(StringStatus::Inventory, LifecycleAction::Restore)]
#[case(StringStatus::Strung, LifecycleAction::StringIt { date_strung: None })]
#[case(StringStatus::Strung, LifecycleAction::ReturnToInventory)]
#[case(StringStatus::Removed, LifecycleAction::StringIt { date_strung: None })]
#[case(StringStatus::Removed, LifecycleAction::Remove { date_removed: None })]
fn undefined_edges_are_rejected(
    t0: DateTime<Utc>,
    #[case] status: StringStatus,
    #[case] action: LifecycleAction,
) {
    let mut draft = build_draft(t0);
    draft.status = status;
    if status != StringStatus::Inventory {
        draft.date_strung = Some(t0);
    }
    if status == StringStatus::Removed {
        draft.date_removed = Some(t0 + Duration::days(1));
    }
    let string = TennisString::new(draft).expect("valid string");

    let err = string
        .apply(action, t0 + Duration::days(2))
        .expect_err("edge is undefined");

    assert_eq!(
        err,
        LifecycleError::UndefinedTransition {
            from: status,
            action: action.name(),
        }
    );
    assert_eq!(err.field(), "status");
}

#[rstest]
fn removal_dated_before_stringing_is_stored_as_given(t0: DateTime<Utc>) {
    let later = t0 + Duration::days(1);
    let strung = inventory_string(t0)
        .apply(LifecycleAction::StringIt { date_strung: None }, later)
        .expect("string it");
    let backdated = t0 - Duration::days(2);

    let removed = strung
        .apply(
            LifecycleAction::Remove {
                date_removed: Some(backdated),
            },
            later,
        )
        .expect("backdated removal is accepted");

    assert_eq!(removed.status(), StringStatus::Removed);
    assert_eq!(removed.date_strung(), Some(later));
    assert_eq!(removed.date_removed(), Some(backdated));
    assert_eq!(removed.updated_at(), later);
}

#[rstest]
fn patch_updates_only_named_fields(t0: DateTime<Utc>) {
    let string = inventory_string(t0);
    let later = t0 + Duration::minutes(5);
    let patch = TennisStringPatch {
        main_tension: Some(54),
        notes: Some("lost tension fast".to_owned()),
        ..TennisStringPatch::default()
    };

    let patched = string.patched(patch, later).expect("valid patch");

    assert_eq!(patched.main_tension(), Some(54));
    assert_eq!(patched.cross_tension(), Some(50));
    assert_eq!(patched.brand(), "Luxilon");
    assert_eq!(patched.notes(), Some("lost tension fast"));
    assert_eq!(patched.updated_at(), later);
}

#[rstest]
fn patch_rejects_blank_brand(t0: DateTime<Utc>) {
    let string = inventory_string(t0);
    let patch = TennisStringPatch {
        brand: Some("  ".to_owned()),
        ..TennisStringPatch::default()
    };

    let err = string.patched(patch, t0).expect_err("blank brand");

    assert_eq!(err, TennisStringValidationError::BlankBrand);
}

#[rstest]
fn lifecycle_action_uses_tagged_json(t0: DateTime<Utc>) {
    let json = serde_json::json!({ "action": "remove", "dateRemoved": t0 });

    let action: LifecycleAction = serde_json::from_value(json).expect("valid action");

    assert_eq!(action, LifecycleAction::Remove { date_removed: Some(t0) });
    let bare: LifecycleAction =
        serde_json::from_value(serde_json::json!({ "action": "string_it" }))
            .expect("date is optional");
    assert_eq!(bare, LifecycleAction::StringIt { date_strung: None });
}
