//! PostgreSQL-backed `AdministratorRepository` implementation using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{AdministratorRepository, AdministratorRepositoryError};
use crate::domain::{Administrator, Email};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AdministratorRow, AdministratorUpdate, NewAdministratorRow};
use super::pool::DbPool;
use super::schema::administrators;

/// Diesel-backed implementation of the `AdministratorRepository` port.
///
/// Uniqueness of email and invitation code is enforced by the table's
/// constraints, so concurrent registrations that both pass the service's
/// pre-checks still end with exactly one row.
#[derive(Clone)]
pub struct DieselAdministratorRepository {
    pool: DbPool,
}

impl DieselAdministratorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_administrator(
    row: AdministratorRow,
) -> Result<Administrator, AdministratorRepositoryError> {
    let email = row.email.clone();
    Administrator::try_from(row).map_err(|err| {
        warn!(%email, error = %err, "stored administrator failed validation");
        AdministratorRepositoryError::query(format!(
            "stored administrator {email} is invalid: {err}"
        ))
    })
}

#[async_trait]
impl AdministratorRepository for DieselAdministratorRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AdministratorRow> = administrators::table
            .filter(administrators::email.eq(email.as_str()))
            .select(AdministratorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_administrator).transpose()
    }

    async fn find_by_invitation_code(
        &self,
        code: &str,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AdministratorRow> = administrators::table
            .filter(administrators::invitation_code.eq(code))
            .select(AdministratorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_administrator).transpose()
    }

    async fn save(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(administrators::table)
            .values(NewAdministratorRow::from(administrator))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = AdministratorUpdate::from_administrator(administrator, Utc::now());

        let updated = diesel::update(
            administrators::table.filter(administrators::email.eq(administrator.email().as_str())),
        )
        .set(&changes)
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(AdministratorRepositoryError::query(
                "administrator not found for update",
            ));
        }
        Ok(())
    }

    async fn delete(&self, email: &Email) -> Result<(), AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(administrators::table.filter(administrators::email.eq(email.as_str())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<Administrator>, AdministratorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AdministratorRow> = administrators::table
            .order((administrators::created_at.asc(), administrators::email.asc()))
            .select(AdministratorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_administrator).collect()
    }
}
