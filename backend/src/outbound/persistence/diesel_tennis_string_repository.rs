//! PostgreSQL-backed `TennisStringRepository` implementation using Diesel ORM.
//!
//! Every query is filtered by `owner_id`. Rows are converted through
//! `TennisString::new`, so a row violating entity invariants surfaces as a
//! query error rather than an invalid entity.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{StringListFilter, TennisStringRepository, TennisStringRepositoryError};
use crate::domain::{OwnerId, StringStatus, TennisString, TennisStringDraft};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTennisStringRow, TennisStringRow, TennisStringUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::tennis_strings;

/// Diesel-backed implementation of the tennis string repository port.
#[derive(Clone)]
pub struct DieselTennisStringRepository {
    pool: DbPool,
}

impl DieselTennisStringRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TennisStringRepositoryError {
    map_basic_pool_error(error, TennisStringRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TennisStringRepositoryError {
    map_basic_diesel_error(
        error,
        TennisStringRepositoryError::query,
        TennisStringRepositoryError::connection,
    )
}

/// An upsert touching no rows hit an id held by another owner.
fn ensure_upserted(affected: usize, id: Uuid) -> Result<(), TennisStringRepositoryError> {
    if affected == 0 {
        return Err(TennisStringRepositoryError::query(format!(
            "tennis string {id} belongs to another owner"
        )));
    }
    Ok(())
}

fn tension_to_column(
    tension: Option<u32>,
    field: &str,
) -> Result<Option<i32>, TennisStringRepositoryError> {
    tension
        .map(i32::try_from)
        .transpose()
        .map_err(|_| TennisStringRepositoryError::query(format!("{field} exceeds column range")))
}

fn tension_from_column(
    tension: Option<i32>,
    field: &str,
) -> Result<Option<u32>, TennisStringRepositoryError> {
    tension
        .map(u32::try_from)
        .transpose()
        .map_err(|_| TennisStringRepositoryError::query(format!("negative {field} in row")))
}

/// Convert a database row into a validated domain string.
fn row_to_tennis_string(row: TennisStringRow) -> Result<TennisString, TennisStringRepositoryError> {
    let string_type = row.string_type.parse().map_err(|_| {
        TennisStringRepositoryError::query(format!("unknown string type {}", row.string_type))
    })?;
    let status = row.status.parse().map_err(|_| {
        TennisStringRepositoryError::query(format!("unknown string status {}", row.status))
    })?;

    TennisString::new(TennisStringDraft {
        id: row.id,
        owner_id: OwnerId::from_uuid(row.owner_id),
        brand: row.brand,
        model: row.model,
        gauge: row.gauge,
        string_type,
        main_tension: tension_from_column(row.main_tension, "main_tension")?,
        cross_tension: tension_from_column(row.cross_tension, "cross_tension")?,
        status,
        date_strung: row.date_strung,
        date_removed: row.date_removed,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
    .map_err(|err| TennisStringRepositoryError::query(err.to_string()))
}

/// Statuses admitted by a listing filter, or `None` for no restriction.
fn admitted_statuses(filter: &StringListFilter) -> Option<Vec<&'static str>> {
    if filter.status.is_none() && filter.is_active.is_none() {
        return None;
    }
    let statuses = [
        StringStatus::Inventory,
        StringStatus::Strung,
        StringStatus::Removed,
    ];
    Some(
        statuses
            .into_iter()
            .filter(|status| filter.status.is_none_or(|wanted| wanted == *status))
            .filter(|status| filter.is_active.is_none_or(|active| status.is_active() == active))
            .map(StringStatus::as_str)
            .collect(),
    )
}

#[async_trait]
impl TennisStringRepository for DieselTennisStringRepository {
    async fn find_by_id(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<Option<TennisString>, TennisStringRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = tennis_strings::table
            .filter(tennis_strings::id.eq(id))
            .filter(tennis_strings::owner_id.eq(owner_id.as_uuid()))
            .select(TennisStringRow::as_select())
            .first::<TennisStringRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_tennis_string).transpose()
    }

    async fn list_for_owner(
        &self,
        owner_id: &OwnerId,
        filter: &StringListFilter,
    ) -> Result<Vec<TennisString>, TennisStringRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = tennis_strings::table
            .filter(tennis_strings::owner_id.eq(owner_id.as_uuid()))
            .into_boxed();
        if let Some(statuses) = admitted_statuses(filter) {
            query = query.filter(tennis_strings::status.eq_any(statuses));
        }

        let rows: Vec<TennisStringRow> = query
            .order((tennis_strings::created_at.desc(), tennis_strings::id.desc()))
            .select(TennisStringRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_tennis_string).collect()
    }

    async fn save(&self, string: &TennisString) -> Result<(), TennisStringRepositoryError> {
        let main_tension = tension_to_column(string.main_tension(), "main_tension")?;
        let cross_tension = tension_to_column(string.cross_tension(), "cross_tension")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTennisStringRow {
            id: string.id(),
            owner_id: *string.owner_id().as_uuid(),
            brand: string.brand(),
            model: string.model(),
            gauge: string.gauge(),
            string_type: string.string_type().as_str(),
            main_tension,
            cross_tension,
            status: string.status().as_str(),
            date_strung: string.date_strung(),
            date_removed: string.date_removed(),
            notes: string.notes(),
            created_at: string.created_at(),
            updated_at: string.updated_at(),
        };

        let update_row = TennisStringUpdate {
            brand: string.brand(),
            model: string.model(),
            gauge: string.gauge(),
            string_type: string.string_type().as_str(),
            main_tension,
            cross_tension,
            status: string.status().as_str(),
            date_strung: string.date_strung(),
            date_removed: string.date_removed(),
            notes: string.notes(),
            updated_at: string.updated_at(),
        };

        let affected = diesel::query_dsl::methods::FilterDsl::filter(
            diesel::insert_into(tennis_strings::table)
                .values(&new_row)
                .on_conflict(tennis_strings::id)
                .do_update()
                .set(&update_row),
            tennis_strings::owner_id.eq(string.owner_id().as_uuid()),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        ensure_upserted(affected, string.id())
    }

    async fn delete(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
    ) -> Result<bool, TennisStringRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            tennis_strings::table
                .filter(tennis_strings::id.eq(id))
                .filter(tennis_strings::owner_id.eq(owner_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
