//! Port for the external invitation-code service.

use async_trait::async_trait;

use crate::domain::InvitationCode;

use super::define_port_error;

define_port_error! {
    /// Errors raised by invitation-code service adapters.
    pub enum InvitationCodeClientError {
        /// The service could not be reached or timed out.
        Transport { message: String } => "invitation code service transport failed: {message}",
        /// The service answered with an unexpected status.
        Status { status: u16, message: String } =>
            "invitation code service returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "invitation code response decode failed: {message}",
    }
}

/// Lookup and consumption of invitation codes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationCodeClient: Send + Sync {
    /// Fetch a code; `Ok(None)` means the service does not know it.
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<InvitationCode>, InvitationCodeClientError>;

    /// Flag `code` as consumed.
    async fn mark_as_used(&self, code: &str) -> Result<(), InvitationCodeClientError>;
}
