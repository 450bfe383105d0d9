//! Administrator API handlers.
//!
//! ```text
//! POST   /admin/register        {"email","password","invitationCode"}
//! POST   /admin/login           {"email","password","invitationCode"}
//! POST   /admin/get/{email}
//! DELETE /admin/delete/{email}
//! PUT    /admin/update          {"email","password","invitationCode"}
//! GET    /admin/getall
//! ```
//!
//! Bad-request and internal failures are prefixed with the endpoint's
//! context; not-found and conflict failures pass through untouched.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    AdministratorRequest, AdministratorResponse, AdministratorValidationError, Email, Error,
    ErrorCode,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::schemas::{AdministratorResponseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request body shared by register, login and update.
///
/// Missing fields decode as empty strings and are then rejected by
/// validation, so clients always receive the standard error envelope.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AdministratorRequestBody {
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "p")]
    pub password: String,
    #[schema(example = "INV1")]
    pub invitation_code: String,
}

impl TryFrom<AdministratorRequestBody> for AdministratorRequest {
    type Error = AdministratorValidationError;

    fn try_from(value: AdministratorRequestBody) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password, &value.invitation_code)
    }
}

fn map_validation_error(err: AdministratorValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}

fn with_endpoint_context(error: Error, context: &str) -> Error {
    match error.code() {
        ErrorCode::InvalidRequest | ErrorCode::InternalError => error.with_context(context),
        _ => error,
    }
}

fn parse_body(body: AdministratorRequestBody) -> Result<AdministratorRequest, Error> {
    AdministratorRequest::try_from(body).map_err(map_validation_error)
}

fn parse_email(raw: String) -> Result<Email, Error> {
    Email::new(raw).map_err(map_validation_error)
}

/// Register the `/admin` scope and its JSON extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use admin_backend::inbound::http::administrators;
///
/// let _app = App::new().configure(administrators::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(register)
            .service(sign_in)
            .service(find_by_email)
            .service(delete_by_email)
            .service(update)
            .service(list_all),
    );
}

/// Register an administrator with an unclaimed invitation code.
#[utoipa::path(
    post,
    path = "/admin/register",
    request_body = AdministratorRequestBody,
    responses(
        (status = 200, description = "Administrator registered", body = AdministratorResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Invitation code not found", body = ErrorSchema),
        (status = 409, description = "Email or invitation code already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "registerAdministrator"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<AdministratorRequestBody>,
) -> ApiResult<web::Json<AdministratorResponse>> {
    const CONTEXT: &str = "registering administrator";
    let request =
        parse_body(payload.into_inner()).map_err(|err| with_endpoint_context(err, CONTEXT))?;
    let response = state
        .administrators
        .register(request)
        .await
        .map_err(|err| with_endpoint_context(err, CONTEXT))?;
    info!(email = %response.email, "administrator registered");
    Ok(web::Json(response))
}

/// Check an administrator's email, password and invitation code.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = AdministratorRequestBody,
    responses(
        (status = 200, description = "Credentials accepted", body = AdministratorResponseSchema),
        (status = 400, description = "Invalid request or credentials", body = ErrorSchema),
        (status = 404, description = "Administrator not found", body = ErrorSchema),
        (status = 409, description = "Administrator has no invitation code", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "signInAdministrator"
)]
#[post("/login")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    payload: web::Json<AdministratorRequestBody>,
) -> ApiResult<web::Json<AdministratorResponse>> {
    const CONTEXT: &str = "signing in administrator";
    let request =
        parse_body(payload.into_inner()).map_err(|err| with_endpoint_context(err, CONTEXT))?;
    let response = state
        .administrators
        .sign_in(request)
        .await
        .map_err(|err| with_endpoint_context(err, CONTEXT))?;
    Ok(web::Json(response))
}

/// Fetch an administrator by email.
#[utoipa::path(
    post,
    path = "/admin/get/{email}",
    params(("email" = String, Path, description = "Administrator email")),
    responses(
        (status = 200, description = "Administrator", body = AdministratorResponseSchema),
        (status = 400, description = "Malformed email", body = ErrorSchema),
        (status = 404, description = "Administrator not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "findAdministratorByEmail"
)]
#[post("/get/{email}")]
pub async fn find_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AdministratorResponse>> {
    let raw = path.into_inner();
    let context = format!("fetching administrator with email {raw}");
    let email = parse_email(raw).map_err(|err| with_endpoint_context(err, &context))?;
    let response = state
        .administrators
        .find_by_email(&email)
        .await
        .map_err(|err| with_endpoint_context(err, &context))?;
    Ok(web::Json(response))
}

/// Delete an administrator by email.
#[utoipa::path(
    delete,
    path = "/admin/delete/{email}",
    params(("email" = String, Path, description = "Administrator email")),
    responses(
        (status = 204, description = "Administrator deleted"),
        (status = 400, description = "Malformed email", body = ErrorSchema),
        (status = 404, description = "Administrator not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "deleteAdministratorByEmail"
)]
#[delete("/delete/{email}")]
pub async fn delete_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let context = format!("deleting administrator with email {raw}");
    let email = parse_email(raw).map_err(|err| with_endpoint_context(err, &context))?;
    state
        .administrators
        .delete_by_email(&email)
        .await
        .map_err(|err| with_endpoint_context(err, &context))?;
    info!(%email, "administrator deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Overwrite an administrator's password and invitation code.
#[utoipa::path(
    put,
    path = "/admin/update",
    request_body = AdministratorRequestBody,
    responses(
        (status = 200, description = "Administrator updated", body = AdministratorResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Administrator not found", body = ErrorSchema),
        (status = 409, description = "Invitation code already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "updateAdministrator"
)]
#[put("/update")]
pub async fn update(
    state: web::Data<HttpState>,
    payload: web::Json<AdministratorRequestBody>,
) -> ApiResult<web::Json<AdministratorResponse>> {
    const CONTEXT: &str = "updating administrator";
    let request =
        parse_body(payload.into_inner()).map_err(|err| with_endpoint_context(err, CONTEXT))?;
    let response = state
        .administrators
        .update(request)
        .await
        .map_err(|err| with_endpoint_context(err, CONTEXT))?;
    Ok(web::Json(response))
}

/// List every administrator.
#[utoipa::path(
    get,
    path = "/admin/getall",
    responses(
        (status = 200, description = "Administrators", body = [AdministratorResponseSchema]),
        (status = 404, description = "No administrators registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["administrators"],
    operation_id = "listAdministrators"
)]
#[get("/getall")]
pub async fn list_all(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AdministratorResponse>>> {
    let administrators = state
        .administrators
        .list_all()
        .await
        .map_err(|err| with_endpoint_context(err, "listing administrators"))?;
    Ok(web::Json(administrators))
}

#[cfg(test)]
#[path = "administrators_tests.rs"]
mod tests;
