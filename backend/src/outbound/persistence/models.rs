//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Rows are converted into
//! domain entities through their validating constructors.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{tennis_sessions, tennis_strings};

// ---------------------------------------------------------------------------
// Tennis string models
// ---------------------------------------------------------------------------

/// Row struct for reading from the tennis_strings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tennis_strings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TennisStringRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub gauge: Option<String>,
    pub string_type: String,
    pub main_tension: Option<i32>,
    pub cross_tension: Option<i32>,
    pub status: String,
    pub date_strung: Option<DateTime<Utc>>,
    pub date_removed: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating tennis string records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tennis_strings)]
pub(crate) struct NewTennisStringRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: &'a str,
    pub model: &'a str,
    pub gauge: Option<&'a str>,
    pub string_type: &'a str,
    pub main_tension: Option<i32>,
    pub cross_tension: Option<i32>,
    pub status: &'a str,
    pub date_strung: Option<DateTime<Utc>>,
    pub date_removed: Option<DateTime<Utc>>,
    pub notes: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied on id conflict. Owner and creation time never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tennis_strings)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct TennisStringUpdate<'a> {
    pub brand: &'a str,
    pub model: &'a str,
    pub gauge: Option<&'a str>,
    pub string_type: &'a str,
    pub main_tension: Option<i32>,
    pub cross_tension: Option<i32>,
    pub status: &'a str,
    pub date_strung: Option<DateTime<Utc>>,
    pub date_removed: Option<DateTime<Utc>>,
    pub notes: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tennis session models
// ---------------------------------------------------------------------------

/// Row struct for reading from the tennis_sessions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tennis_sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TennisSessionRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub session_date: DateTime<Utc>,
    pub session_type: String,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub surface: Option<String>,
    pub string_id: Option<Uuid>,
    pub string_feeling_rating: Option<i16>,
    pub string_notes: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating tennis session records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tennis_sessions)]
pub(crate) struct NewTennisSessionRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub session_date: DateTime<Utc>,
    pub session_type: &'a str,
    pub duration_minutes: i32,
    pub location: Option<&'a str>,
    pub surface: Option<&'a str>,
    pub string_id: Option<Uuid>,
    pub string_feeling_rating: Option<i16>,
    pub string_notes: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied on id conflict. Owner and creation time never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tennis_sessions)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct TennisSessionUpdate<'a> {
    pub session_date: DateTime<Utc>,
    pub session_type: &'a str,
    pub duration_minutes: i32,
    pub location: Option<&'a str>,
    pub surface: Option<&'a str>,
    pub string_id: Option<Uuid>,
    pub string_feeling_rating: Option<i16>,
    pub string_notes: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
