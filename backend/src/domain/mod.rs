//! Domain primitives, aggregates and use cases.
//!
//! Purpose: define the administrator lifecycle independently of transport
//! and storage. Adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Administrator, AdministratorRequest, AdministratorResponse, Email.
//! - InvitationCode: code record owned by the invitation-code service.
//! - AdministratorServiceImpl: the driving port implementation.
//! - Error and ErrorCode: use-case failures.
//! - TraceId: request-scoped correlation identifier.

pub mod administrator;
pub mod administrator_service;
pub mod error;
pub mod invitation_code;
pub mod ports;
pub mod trace_id;

pub use self::administrator::{
    Administrator, AdministratorRequest, AdministratorResponse, AdministratorValidationError,
    Email,
};
pub use self::administrator_service::AdministratorServiceImpl;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::invitation_code::InvitationCode;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use admin_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("administrator with email a@x.com not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
