//! Usage statistics derived from the sessions linked to a string.
//!
//! Statistics are recomputed on every read. Sessions are folded in any order;
//! only count and sums are accumulated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TennisSession, TennisString};

/// Read-only usage summary for one string setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringUsageStats {
    pub string_id: Uuid,
    pub total_sessions: u64,
    pub total_minutes_played: u64,
    /// Mean over rated sessions only; `0.0` when none are rated.
    pub average_feeling_rating: f64,
    /// Whole days since stringing, truncated. Negative for future dates.
    pub days_since_strung: i64,
}

#[derive(Default)]
struct Tally {
    sessions: u64,
    minutes: u64,
    rated: u32,
    rating_sum: u32,
}

/// Folds the sessions referencing `string` into usage statistics.
///
/// Sessions that reference another string or belong to another owner are
/// ignored. An absent `date_strung` counts from `now`, giving zero days.
///
/// # Examples
///
/// ```
/// # use chrono::Utc;
/// # use stringlog::domain::{
/// #     OwnerId, StringStatus, StringType, TennisString, TennisStringDraft, compute_usage,
/// # };
/// # use uuid::Uuid;
/// # let now = Utc::now();
/// # let string = TennisString::new(TennisStringDraft {
/// #     id: Uuid::new_v4(), owner_id: OwnerId::random(),
/// #     brand: "Solinco".to_owned(), model: "Hyper-G".to_owned(), gauge: None,
/// #     string_type: StringType::Polyester, main_tension: None, cross_tension: None,
/// #     status: StringStatus::Inventory, date_strung: None, date_removed: None,
/// #     notes: None, created_at: now, updated_at: now,
/// # })?;
/// let stats = compute_usage(&string, &[], now);
/// assert_eq!(stats.total_sessions, 0);
/// assert_eq!(stats.average_feeling_rating, 0.0);
/// assert_eq!(stats.days_since_strung, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_usage(
    string: &TennisString,
    sessions: &[TennisSession],
    now: DateTime<Utc>,
) -> StringUsageStats {
    let tally = sessions
        .iter()
        .filter(|session| {
            session.string_id() == Some(string.id()) && session.owner_id() == string.owner_id()
        })
        .fold(Tally::default(), |mut tally, session| {
            tally.sessions += 1;
            tally.minutes += u64::from(session.duration_minutes());
            if let Some(rating) = session.string_feeling_rating() {
                tally.rated += 1;
                tally.rating_sum += u32::from(rating);
            }
            tally
        });

    let average_feeling_rating = if tally.rated == 0 {
        0.0
    } else {
        f64::from(tally.rating_sum) / f64::from(tally.rated)
    };
    let days_since_strung = (now - string.date_strung().unwrap_or(now)).num_days();

    StringUsageStats {
        string_id: string.id(),
        total_sessions: tally.sessions,
        total_minutes_played: tally.minutes,
        average_feeling_rating,
        days_since_strung,
    }
}
