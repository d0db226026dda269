//! PostgreSQL-backed `TennisSessionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{TennisSessionRepository, TennisSessionRepositoryError};
use crate::domain::{OwnerId, TennisSession, TennisSessionDraft};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTennisSessionRow, TennisSessionRow, TennisSessionUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::tennis_sessions;

/// Diesel-backed implementation of the tennis session repository port.
#[derive(Clone)]
pub struct DieselTennisSessionRepository {
    pool: DbPool,
}

impl DieselTennisSessionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load owner sessions, newest first, optionally narrowed to one string.
    async fn load_for_owner(
        &self,
        owner_id: &OwnerId,
        string_id: Option<Uuid>,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = tennis_sessions::table
            .filter(tennis_sessions::owner_id.eq(*owner_id.as_uuid()))
            .into_boxed();
        if let Some(string_id) = string_id {
            query = query.filter(tennis_sessions::string_id.eq(string_id));
        }
        let rows: Vec<TennisSessionRow> = query
            .order((tennis_sessions::session_date.desc(), tennis_sessions::id.desc()))
            .select(TennisSessionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_tennis_session).collect()
    }
}

fn map_pool_error(error: PoolError) -> TennisSessionRepositoryError {
    map_basic_pool_error(error, TennisSessionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TennisSessionRepositoryError {
    map_basic_diesel_error(
        error,
        TennisSessionRepositoryError::query,
        TennisSessionRepositoryError::connection,
    )
}

/// An upsert touching no rows hit an id held by another owner.
fn ensure_upserted(affected: usize, id: Uuid) -> Result<(), TennisSessionRepositoryError> {
    if affected == 0 {
        return Err(TennisSessionRepositoryError::query(format!(
            "tennis session {id} belongs to another owner"
        )));
    }
    Ok(())
}

/// Convert a database row into a validated domain session.
fn row_to_tennis_session(
    row: TennisSessionRow,
) -> Result<TennisSession, TennisSessionRepositoryError> {
    let session_type = row.session_type.parse().map_err(|_| {
        TennisSessionRepositoryError::query(format!("unknown session type {}", row.session_type))
    })?;
    let surface = row
        .surface
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|_| TennisSessionRepositoryError::query("unknown court surface in row"))?;
    let duration_minutes = u32::try_from(row.duration_minutes)
        .map_err(|_| TennisSessionRepositoryError::query("negative duration in row"))?;
    let string_feeling_rating = row
        .string_feeling_rating
        .map(u8::try_from)
        .transpose()
        .map_err(|_| TennisSessionRepositoryError::query("feeling rating exceeds u8 in row"))?;

    TennisSession::new(TennisSessionDraft {
        id: row.id,
        owner_id: OwnerId::from_uuid(row.owner_id),
        session_date: row.session_date,
        session_type,
        duration_minutes,
        location: row.location,
        surface,
        string_id: row.string_id,
        string_feeling_rating,
        string_notes: row.string_notes,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
    .map_err(|err| TennisSessionRepositoryError::query(err.to_string()))
}

#[async_trait]
impl TennisSessionRepository for DieselTennisSessionRepository {
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisSession>, TennisSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = tennis_sessions::table
            .filter(tennis_sessions::id.eq(id))
            .filter(tennis_sessions::owner_id.eq(owner_id.as_uuid()))
            .select(TennisSessionRow::as_select())
            .first::<TennisSessionRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_tennis_session).transpose()
    }

    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        self.load_for_owner(owner_id, None).await
    }

    async fn list_by_string_id(
        &self,
        string_id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Vec<TennisSession>, TennisSessionRepositoryError> {
        self.load_for_owner(owner_id, Some(*string_id)).await
    }

    async fn save(&self, session: &TennisSession) -> Result<(), TennisSessionRepositoryError> {
        let duration_minutes = i32::try_from(session.duration_minutes())
            .map_err(|_| TennisSessionRepositoryError::query("duration exceeds column range"))?;
        let string_feeling_rating = session.string_feeling_rating().map(i16::from);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTennisSessionRow {
            id: session.id(),
            owner_id: *session.owner_id().as_uuid(),
            session_date: session.session_date(),
            session_type: session.session_type().as_str(),
            duration_minutes,
            location: session.location(),
            surface: session.surface().map(|surface| surface.as_str()),
            string_id: session.string_id(),
            string_feeling_rating,
            string_notes: session.string_notes(),
            notes: session.notes(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        };

        let update_row = TennisSessionUpdate {
            session_date: session.session_date(),
            session_type: session.session_type().as_str(),
            duration_minutes,
            location: session.location(),
            surface: session.surface().map(|surface| surface.as_str()),
            string_id: session.string_id(),
            string_feeling_rating,
            string_notes: session.string_notes(),
            notes: session.notes(),
            updated_at: session.updated_at(),
        };

        let affected = diesel::query_dsl::methods::FilterDsl::filter(
            diesel::insert_into(tennis_sessions::table)
                .values(&new_row)
                .on_conflict(tennis_sessions::id)
                .do_update()
                .set(&update_row),
            tennis_sessions::owner_id.eq(session.owner_id().as_uuid()),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        ensure_upserted(affected, session.id())
    }

    async fn delete(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<bool, TennisSessionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            tennis_sessions::table
                .filter(tennis_sessions::id.eq(id))
                .filter(tennis_sessions::owner_id.eq(owner_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
