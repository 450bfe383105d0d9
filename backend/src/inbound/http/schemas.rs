//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. These wrappers mirror their JSON
//! shape and register under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed input or credential mismatch.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Administrator, invitation code or listing is absent.
    #[schema(rename = "not_found")]
    NotFound,
    /// Email or invitation code already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// Collaborator failure; details are withheld.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "administrator with email a@x.com not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context, for example the offending request field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::AdministratorResponse`].
///
/// The password is never part of this payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::AdministratorResponse)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AdministratorResponseSchema {
    #[schema(example = "a@x.com")]
    email: String,
    #[schema(example = "INV1")]
    invitation_code: Option<String>,
}
