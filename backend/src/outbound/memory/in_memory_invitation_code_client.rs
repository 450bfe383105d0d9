//! In-memory `InvitationCodeClient` seeded with known codes.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::InvitationCode;
use crate::domain::ports::{InvitationCodeClient, InvitationCodeClientError};

/// Invitation-code service stand-in.
///
/// Unknown codes are absent on lookup and rejected with status `404` when
/// marked as used, matching the remote service.
#[derive(Debug, Default)]
pub struct InMemoryInvitationCodeClient {
    codes: Mutex<HashMap<String, bool>>,
}

impl InMemoryInvitationCodeClient {
    /// Build a client knowing each of `codes` as unused.
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes.into_iter().map(|code| (code.into(), false)).collect();
        Self {
            codes: Mutex::new(codes),
        }
    }

    /// Make `code` available as unused, resetting it if it was consumed.
    ///
    /// # Errors
    ///
    /// Fails only when the store lock is poisoned.
    pub fn issue(&self, code: impl Into<String>) -> Result<(), InvitationCodeClientError> {
        let mut codes = self.codes.lock().map_err(|_| poisoned())?;
        codes.insert(code.into(), false);
        Ok(())
    }
}

fn poisoned() -> InvitationCodeClientError {
    InvitationCodeClientError::transport("invitation code store poisoned")
}

#[async_trait]
impl InvitationCodeClient for InMemoryInvitationCodeClient {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<InvitationCode>, InvitationCodeClientError> {
        let codes = self.codes.lock().map_err(|_| poisoned())?;
        Ok(codes.get(code).map(|used| InvitationCode {
            code: code.to_owned(),
            used: *used,
        }))
    }

    async fn mark_as_used(&self, code: &str) -> Result<(), InvitationCodeClientError> {
        let mut codes = self.codes.lock().map_err(|_| poisoned())?;
        match codes.get_mut(code) {
            Some(used) => {
                *used = true;
                Ok(())
            }
            None => Err(InvitationCodeClientError::status(
                404_u16,
                format!("invitation code {code} not found"),
            )),
        }
    }
}
