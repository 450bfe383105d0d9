//! Port abstraction for administrator persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Administrator, Email};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by administrator repository adapters.
    pub enum AdministratorRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "administrator repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "administrator repository query failed: {message}",
        /// A uniqueness constraint on email or invitation code was violated.
        Duplicate { message: String } =>
            "administrator repository rejected duplicate: {message}",
    }
}

/// Keyed store of administrators.
///
/// Email and invitation code are both unique across stored administrators.
/// Adapters report a violation as [`AdministratorRepositoryError::Duplicate`]
/// rather than silently overwriting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdministratorRepository: Send + Sync {
    /// Fetch an administrator by exact email match.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError>;

    /// Fetch the administrator registered with `code`, if any.
    async fn find_by_invitation_code(
        &self,
        code: &str,
    ) -> Result<Option<Administrator>, AdministratorRepositoryError>;

    /// Insert a new administrator.
    async fn save(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError>;

    /// Replace the stored record sharing the administrator's email.
    async fn update(
        &self,
        administrator: &Administrator,
    ) -> Result<(), AdministratorRepositoryError>;

    /// Remove the administrator with `email`; a missing record is not an error.
    async fn delete(&self, email: &Email) -> Result<(), AdministratorRepositoryError>;

    /// Every stored administrator, in a stable order.
    async fn find_all(&self) -> Result<Vec<Administrator>, AdministratorRepositoryError>;
}
