//! In-process adapters backing the ports without external infrastructure.
//!
//! Used when no database or invitation-code service is configured, and by
//! integration tests that exercise the full HTTP stack.

mod in_memory_administrator_repository;
mod in_memory_invitation_code_client;

pub use in_memory_administrator_repository::InMemoryAdministratorRepository;
pub use in_memory_invitation_code_client::InMemoryInvitationCodeClient;
