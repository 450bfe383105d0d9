//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every administrator endpoint and the health probes,
//! together with schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//! [`AdministratorResponseSchema`]) that describe domain types without
//! coupling them to utoipa.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::administrators::AdministratorRequestBody;
use crate::inbound::http::schemas::{AdministratorResponseSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the administrator API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Administrator backend API",
        description = "Invitation-gated administrator registration, sign-in and management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::administrators::register,
        crate::inbound::http::administrators::sign_in,
        crate::inbound::http::administrators::find_by_email,
        crate::inbound::http::administrators::delete_by_email,
        crate::inbound::http::administrators::update,
        crate::inbound::http::administrators::list_all,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AdministratorRequestBody,
        AdministratorResponseSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "administrators", description = "Administrator lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
