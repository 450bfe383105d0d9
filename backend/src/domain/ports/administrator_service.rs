//! Driving port for the administrator lifecycle.
//!
//! HTTP handlers depend on [`AdministratorService`] only. Every failure is a
//! domain [`Error`] whose code tells the adapter which status to emit.

use async_trait::async_trait;

use crate::domain::{AdministratorRequest, AdministratorResponse, Email, Error};

/// Administrator lifecycle use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdministratorService: Send + Sync {
    /// Register a new administrator with an unclaimed invitation code.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the invitation code is unknown.
    /// - `Conflict` when the email or invitation code is already taken.
    /// - `InternalError` when a collaborator fails.
    async fn register(&self, request: AdministratorRequest)
    -> Result<AdministratorResponse, Error>;

    /// Authenticate an administrator by email, password and invitation code.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no administrator has the email.
    /// - `InvalidRequest` when the password or invitation code differ.
    /// - `Conflict` when the stored administrator has no invitation code.
    async fn sign_in(&self, request: AdministratorRequest) -> Result<AdministratorResponse, Error>;

    /// Fetch an administrator by email.
    async fn find_by_email(&self, email: &Email) -> Result<AdministratorResponse, Error>;

    /// Remove an administrator by email.
    async fn delete_by_email(&self, email: &Email) -> Result<(), Error>;

    /// Overwrite the password and invitation code of an existing administrator.
    async fn update(&self, request: AdministratorRequest) -> Result<AdministratorResponse, Error>;

    /// List every administrator; an empty store is reported as `NotFound`.
    async fn list_all(&self) -> Result<Vec<AdministratorResponse>, Error>;
}
