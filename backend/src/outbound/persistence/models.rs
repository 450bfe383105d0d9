//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversions to and from
//! domain types live next to them so the repository stays a thin translator.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Administrator, AdministratorValidationError, Email};

use super::schema::administrators;

/// Row struct for reading from the administrators table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = administrators)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AdministratorRow {
    pub email: String,
    pub password: String,
    pub invitation_code: Option<String>,
    #[expect(dead_code, reason = "timestamps are maintained by the database")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "timestamps are maintained by the database")]
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = AdministratorValidationError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let email = Email::new(row.email)?;
        Ok(Administrator::new(email, row.password, row.invitation_code))
    }
}

/// Insertable struct for creating administrator records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = administrators)]
pub(crate) struct NewAdministratorRow<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub invitation_code: Option<&'a str>,
}

impl<'a> From<&'a Administrator> for NewAdministratorRow<'a> {
    fn from(value: &'a Administrator) -> Self {
        Self {
            email: value.email().as_str(),
            password: value.password(),
            invitation_code: value.invitation_code(),
        }
    }
}

/// Changeset applied by `update`; `None` codes are written as NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = administrators)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct AdministratorUpdate<'a> {
    pub password: &'a str,
    pub invitation_code: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> AdministratorUpdate<'a> {
    pub fn from_administrator(value: &'a Administrator, updated_at: DateTime<Utc>) -> Self {
        Self {
            password: value.password(),
            invitation_code: value.invitation_code(),
            updated_at,
        }
    }
}
