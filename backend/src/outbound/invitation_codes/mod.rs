//! Invitation-code service adapters.
//!
//! [`InvitationCodeHttpClient`] talks to the remote service over HTTP.
//! In-process stand-ins live in [`crate::outbound::memory`].

mod dto;
mod http_client;

pub use http_client::{InvitationCodeHttpClient, InvitationCodeHttpClientBuildError};
