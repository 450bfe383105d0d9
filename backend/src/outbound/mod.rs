//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL administrator repository using Diesel.
//! - **invitation_codes**: reqwest client for the invitation-code service.
//! - **memory**: in-process stand-ins for both ports.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod invitation_codes;
pub mod memory;
pub mod persistence;
