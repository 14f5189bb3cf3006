//! Postgres-backed webinar repository.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | RepositoryError |
//! |------------|----------------------|-----------------|
//! | Database (unique violation) | `23505` | `AlreadyExists` |
//! | Database (other) | any other | `Storage` |
//! | PoolClosed / network / decode | N/A | `Storage` |
//!
//! `update` is a single-row `UPDATE ... WHERE id = $1`; the row-level atomicity
//! of that statement is the only concurrency guard.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use confero_core::WebinarId;
use confero_webinars::{RepositoryError, Seats, Webinar, WebinarProps, WebinarRepository};

const SCHEMA: &str = include_str!("../schema/webinars.sql");

/// Postgres-backed webinar repository.
///
/// Uses the SQLx connection pool, so it is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone)]
pub struct PostgresWebinarRepository {
    pool: Arc<PgPool>,
}

impl PostgresWebinarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect to `database_url` and build a repository on the new pool.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `webinars` table if it does not exist yet.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(SCHEMA)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    /// Remove every stored webinar (test fixture reset).
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM webinars")
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_all", e))?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    #[instrument(skip(self), fields(webinar_id = %id), err)]
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT
                id,
                organizer_id,
                title,
                start_date,
                end_date,
                seats
            FROM webinars
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.map(|r| webinar_from_row(&r)).transpose()
    }

    #[instrument(skip(self, webinar), fields(webinar_id = %webinar.webinar_id()), err)]
    async fn create(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO webinars (
                id,
                organizer_id,
                title,
                start_date,
                end_date,
                seats
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(webinar.webinar_id().as_str())
        .bind(webinar.organizer_id().as_str())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(seats_to_db(webinar.seats())?)
        .execute(&*self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::AlreadyExists(webinar.webinar_id().clone())
            } else {
                map_sqlx_error("create", e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, webinar), fields(webinar_id = %webinar.webinar_id()), err)]
    async fn update(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE webinars SET
                organizer_id = $2,
                title = $3,
                start_date = $4,
                end_date = $5,
                seats = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(webinar.webinar_id().as_str())
        .bind(webinar.organizer_id().as_str())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(seats_to_db(webinar.seats())?)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(webinar.webinar_id().clone()));
        }
        Ok(())
    }
}

fn webinar_from_row(row: &PgRow) -> Result<Webinar, RepositoryError> {
    let decode = |e: sqlx::Error| map_sqlx_error("decode webinar row", e);

    let id: String = row.try_get("id").map_err(decode)?;
    let organizer_id: String = row.try_get("organizer_id").map_err(decode)?;
    let title: String = row.try_get("title").map_err(decode)?;
    let start_date: DateTime<Utc> = row.try_get("start_date").map_err(decode)?;
    let end_date: DateTime<Utc> = row.try_get("end_date").map_err(decode)?;
    let seats: i32 = row.try_get("seats").map_err(decode)?;

    Ok(Webinar::new(WebinarProps {
        id: id.into(),
        organizer_id: organizer_id.into(),
        title,
        start_date,
        end_date,
        seats: seats_from_db(seats)?,
    }))
}

fn seats_to_db(seats: Seats) -> Result<i32, RepositoryError> {
    i32::try_from(seats.get())
        .map_err(|_| RepositoryError::storage(format!("seat count {seats} out of range")))
}

fn seats_from_db(seats: i32) -> Result<Seats, RepositoryError> {
    u32::try_from(seats)
        .map(Seats::new)
        .map_err(|_| RepositoryError::storage(format!("negative seat count {seats} in storage")))
}

/// Map SQLx errors to `RepositoryError`.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => RepositoryError::storage(format!(
            "database error in {operation}: {}",
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            RepositoryError::storage(format!("connection pool closed in {operation}"))
        }
        other => RepositoryError::storage(format!("sqlx error in {operation}: {other}")),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            return code.as_ref() == "23505";
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_round_trip_through_db_integer() {
        assert_eq!(seats_to_db(Seats::new(1000)).unwrap(), 1000);
        assert_eq!(seats_from_db(250).unwrap(), Seats::new(250));
    }

    #[test]
    fn out_of_range_seats_are_storage_errors() {
        assert!(matches!(
            seats_to_db(Seats::new(u32::MAX)),
            Err(RepositoryError::Storage(_))
        ));
        assert!(matches!(seats_from_db(-1), Err(RepositoryError::Storage(_))));
    }

    #[test]
    fn non_database_errors_map_to_storage() {
        let err = map_sqlx_error("find_by_id", sqlx::Error::PoolClosed);
        assert_eq!(
            err,
            RepositoryError::Storage("connection pool closed in find_by_id".to_string())
        );
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn schema_creates_the_webinars_table() {
        assert!(SCHEMA.contains("CREATE TABLE IF NOT EXISTS webinars"));
        assert!(SCHEMA.contains("CHECK (seats >= 0)"));
    }
}
