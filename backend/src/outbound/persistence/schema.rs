//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`. Enumerations are stored as
//! snake_case text so that adding a variant does not require a type change.

diesel::table! {
    /// String setups owned by players.
    tennis_strings (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owner scoping every query.
        owner_id -> Uuid,
        brand -> Varchar,
        model -> Varchar,
        gauge -> Nullable<Varchar>,
        /// `StringType` label.
        string_type -> Varchar,
        main_tension -> Nullable<Int4>,
        cross_tension -> Nullable<Int4>,
        /// `StringStatus` label.
        status -> Varchar,
        date_strung -> Nullable<Timestamptz>,
        date_removed -> Nullable<Timestamptz>,
        notes -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Played sessions.
    ///
    /// `string_id` is a soft reference with no foreign key; the application
    /// validates it before writing and tolerates it dangling afterwards.
    tennis_sessions (id) {
        id -> Uuid,
        owner_id -> Uuid,
        session_date -> Timestamptz,
        /// `SessionType` label.
        session_type -> Varchar,
        duration_minutes -> Int4,
        location -> Nullable<Varchar>,
        /// `CourtSurface` label.
        surface -> Nullable<Varchar>,
        string_id -> Nullable<Uuid>,
        string_feeling_rating -> Nullable<Int2>,
        string_notes -> Nullable<Text>,
        notes -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
