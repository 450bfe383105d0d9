//! Diesel and pool error translation for the administrator repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::AdministratorRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> AdministratorRepositoryError {
    AdministratorRepositoryError::connection(error.into_message())
}

/// Map Diesel failures onto repository error variants.
///
/// Unique violations keep the constraint name so the service can report
/// which value was taken.
pub(crate) fn map_diesel_error(error: DieselError) -> AdministratorRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let message = match info.constraint_name() {
                Some(constraint) => format!("unique constraint {constraint} violated"),
                None => "unique constraint violated".to_owned(),
            };
            AdministratorRepositoryError::duplicate(message)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AdministratorRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => AdministratorRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            AdministratorRepositoryError::query("database query error")
        }
        _ => AdministratorRepositoryError::query("database error"),
    }
}
