//! Invitation codes as reported by the external invitation-code service.

use serde::{Deserialize, Serialize};

/// Single-use invitation code owned by the invitation-code service.
///
/// The `used` flag moves from `false` to `true` exactly once, when an
/// administrator registers with the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationCode {
    pub code: String,
    pub used: bool,
}

impl InvitationCode {
    /// Build an unused code.
    pub fn unused(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            used: false,
        }
    }
}
