//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`AdministratorRepository`], [`InvitationCodeClient`]) are
//! implemented by outbound adapters. The driving port
//! ([`AdministratorService`]) is consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod administrator_repository;
mod administrator_service;
mod invitation_code_client;

#[cfg(test)]
pub use administrator_repository::MockAdministratorRepository;
pub use administrator_repository::{AdministratorRepository, AdministratorRepositoryError};
#[cfg(test)]
pub use administrator_service::MockAdministratorService;
pub use administrator_service::AdministratorService;
#[cfg(test)]
pub use invitation_code_client::MockInvitationCodeClient;
pub use invitation_code_client::{InvitationCodeClient, InvitationCodeClientError};
