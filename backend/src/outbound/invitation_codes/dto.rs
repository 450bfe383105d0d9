//! Wire format of the invitation-code service.

use serde::Deserialize;

use crate::domain::InvitationCode;

#[derive(Debug, Deserialize)]
pub(super) struct InvitationCodeDto {
    pub(super) code: String,
    #[serde(default)]
    pub(super) used: bool,
}

impl From<InvitationCodeDto> for InvitationCode {
    fn from(value: InvitationCodeDto) -> Self {
        Self {
            code: value.code,
            used: value.used,
        }
    }
}
