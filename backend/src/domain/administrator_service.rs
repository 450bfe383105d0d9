//! Administrator lifecycle service.
//!
//! Implements the [`AdministratorService`] driving port on top of the
//! administrator repository and the invitation-code client. All business
//! rules live here; adapters only translate.
//!
//! Registration marks the invitation code as used before persisting. A
//! persistence failure after that point leaves the code consumed.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AdministratorRepository, AdministratorRepositoryError, AdministratorService,
    InvitationCodeClient, InvitationCodeClientError,
};
use crate::domain::{Administrator, AdministratorRequest, AdministratorResponse, Email, Error};

/// Administrator service implementing the driving port.
///
/// Generic parameters may be unsized so the server can wire trait objects:
/// `AdministratorServiceImpl<dyn AdministratorRepository, dyn InvitationCodeClient>`.
pub struct AdministratorServiceImpl<R: ?Sized, C: ?Sized> {
    repository: Arc<R>,
    invitation_codes: Arc<C>,
}

impl<R: ?Sized, C: ?Sized> AdministratorServiceImpl<R, C> {
    /// Create a new service over the given collaborators.
    pub fn new(repository: Arc<R>, invitation_codes: Arc<C>) -> Self {
        Self {
            repository,
            invitation_codes,
        }
    }
}

impl<R: ?Sized, C: ?Sized> Clone for AdministratorServiceImpl<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            invitation_codes: Arc::clone(&self.invitation_codes),
        }
    }
}

impl<R, C> AdministratorServiceImpl<R, C>
where
    R: AdministratorRepository + ?Sized,
    C: InvitationCodeClient + ?Sized,
{
    fn map_repository_error(error: AdministratorRepositoryError) -> Error {
        match error {
            AdministratorRepositoryError::Connection { message } => {
                Error::internal(format!("administrator repository unavailable: {message}"))
            }
            AdministratorRepositoryError::Query { message } => {
                Error::internal(format!("administrator repository error: {message}"))
            }
            AdministratorRepositoryError::Duplicate { message } => Error::conflict(message),
        }
    }

    fn map_client_error(error: InvitationCodeClientError) -> Error {
        Error::internal(format!("invitation code service error: {error}"))
    }

    async fn require_by_email(&self, email: &Email) -> Result<Administrator, Error> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("administrator with email {email} not found")))
    }
}

#[async_trait]
impl<R, C> AdministratorService for AdministratorServiceImpl<R, C>
where
    R: AdministratorRepository + ?Sized,
    C: InvitationCodeClient + ?Sized,
{
    async fn register(
        &self,
        request: AdministratorRequest,
    ) -> Result<AdministratorResponse, Error> {
        let code = request.invitation_code();

        let invitation = self
            .invitation_codes
            .find_by_code(code)
            .await
            .map_err(Self::map_client_error)?
            .ok_or_else(|| Error::not_found(format!("invitation code {code} not found")))?;

        let existing_email = self
            .repository
            .find_by_email(request.email())
            .await
            .map_err(Self::map_repository_error)?;
        if existing_email.is_some() {
            return Err(Error::conflict(format!(
                "email {} already exists",
                request.email()
            )));
        }

        // Deleting an administrator leaves its code consumed.
        let claimed = invitation.used
            || self
                .repository
                .find_by_invitation_code(code)
                .await
                .map_err(Self::map_repository_error)?
                .is_some();
        if claimed {
            return Err(Error::conflict(format!(
                "invitation code {code} already used"
            )));
        }

        self.invitation_codes
            .mark_as_used(code)
            .await
            .map_err(Self::map_client_error)?;

        let administrator = Administrator::from_request(&request);
        self.repository
            .save(&administrator)
            .await
            .map_err(Self::map_repository_error)?;

        Ok(AdministratorResponse::from(&administrator))
    }

    async fn sign_in(&self, request: AdministratorRequest) -> Result<AdministratorResponse, Error> {
        let administrator = self.require_by_email(request.email()).await?;
        let invalid = || {
            Error::invalid_request(format!(
                "invalid credentials for administrator {}",
                request.email()
            ))
        };

        if administrator.password() != request.password() {
            return Err(invalid());
        }
        let Some(stored_code) = administrator.invitation_code() else {
            return Err(Error::conflict(format!(
                "no invitation code associated with administrator {}",
                request.email()
            )));
        };
        if stored_code != request.invitation_code() {
            return Err(invalid());
        }

        Ok(AdministratorResponse::from(&administrator))
    }

    async fn find_by_email(&self, email: &Email) -> Result<AdministratorResponse, Error> {
        let administrator = self.require_by_email(email).await?;
        Ok(AdministratorResponse::from(administrator))
    }

    async fn delete_by_email(&self, email: &Email) -> Result<(), Error> {
        let administrator = self.require_by_email(email).await?;
        self.repository
            .delete(administrator.email())
            .await
            .map_err(Self::map_repository_error)
    }

    async fn update(&self, request: AdministratorRequest) -> Result<AdministratorResponse, Error> {
        let mut administrator = self.require_by_email(request.email()).await?;
        administrator.overwrite_with(&request);
        self.repository
            .update(&administrator)
            .await
            .map_err(Self::map_repository_error)?;
        Ok(AdministratorResponse::from(&administrator))
    }

    async fn list_all(&self) -> Result<Vec<AdministratorResponse>, Error> {
        let administrators = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)?;
        if administrators.is_empty() {
            return Err(Error::not_found("no administrators found"));
        }
        Ok(administrators
            .iter()
            .map(AdministratorResponse::from)
            .collect())
    }
}

#[cfg(test)]
#[path = "administrator_service_tests.rs"]
mod tests;
