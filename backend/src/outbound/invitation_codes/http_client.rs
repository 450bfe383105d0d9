//! Reqwest-backed invitation-code client.
//!
//! Owns transport details only: URL construction, timeout, status mapping
//! and JSON decoding.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  invitation-codes/{code}`: `200` with `{"code", "used"}`, `404` when unknown.
//! - `PUT  invitation-codes/{code}/used`: any `2xx` marks the code consumed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::InvitationCodeDto;
use crate::domain::InvitationCode;
use crate::domain::ports::{InvitationCodeClient, InvitationCodeClientError};

const CODES_SEGMENT: &str = "invitation-codes";
const USED_SEGMENT: &str = "used";

/// Errors raised while constructing [`InvitationCodeHttpClient`].
#[derive(Debug, thiserror::Error)]
pub enum InvitationCodeHttpClientBuildError {
    #[error("invitation code base URL {0} cannot carry a path")]
    InvalidBaseUrl(Url),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP adapter for the invitation-code service.
pub struct InvitationCodeHttpClient {
    client: Client,
    base_url: Url,
}

impl InvitationCodeHttpClient {
    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Fails when `base_url` is not hierarchical (for example `mailto:`) or the
    /// reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        timeout: Duration,
    ) -> Result<Self, InvitationCodeHttpClientBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(InvitationCodeHttpClientBuildError::InvalidBaseUrl(base_url));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, InvitationCodeClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                InvitationCodeClientError::transport(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl InvitationCodeClient for InvitationCodeHttpClient {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<InvitationCode>, InvitationCodeClientError> {
        let url = self.endpoint(&[CODES_SEGMENT, code])?;
        debug!(%url, "looking up invitation code");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_code(body.as_ref()).map(Some)
    }

    async fn mark_as_used(&self, code: &str) -> Result<(), InvitationCodeClientError> {
        let url = self.endpoint(&[CODES_SEGMENT, code, USED_SEGMENT])?;
        debug!(%url, "marking invitation code as used");
        let response = self
            .client
            .put(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn parse_code(body: &[u8]) -> Result<InvitationCode, InvitationCodeClientError> {
    let decoded: InvitationCodeDto = serde_json::from_slice(body).map_err(|error| {
        InvitationCodeClientError::decode(format!("invalid invitation code payload: {error}"))
    })?;
    Ok(decoded.into())
}

fn map_transport_error(error: reqwest::Error) -> InvitationCodeClientError {
    InvitationCodeClientError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> InvitationCodeClientError {
    InvitationCodeClientError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return "empty body".to_owned();
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for URL building, payload decoding and a live round trip
    //! against a local stand-in service.

    use std::net::TcpListener;

    use actix_web::{App, HttpResponse, HttpServer, web};
    use rstest::rstest;

    use super::*;

    fn client(base: &str) -> InvitationCodeHttpClient {
        let base = Url::parse(base).expect("valid base URL");
        InvitationCodeHttpClient::new(base, Duration::from_secs(2)).expect("client builds")
    }

    #[rstest]
    #[case("http://codes.test", "http://codes.test/invitation-codes/INV1")]
    #[case("http://codes.test/api/", "http://codes.test/api/invitation-codes/INV1")]
    #[case("http://codes.test/api", "http://codes.test/api/invitation-codes/INV1")]
    fn endpoint_appends_segments_to_base(#[case] base: &str, #[case] expected: &str) {
        let url = client(base)
            .endpoint(&[CODES_SEGMENT, "INV1"])
            .expect("endpoint");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn endpoint_percent_encodes_codes() {
        let url = client("http://codes.test")
            .endpoint(&[CODES_SEGMENT, "A/B C", USED_SEGMENT])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://codes.test/invitation-codes/A%2FB%20C/used"
        );
    }

    #[rstest]
    fn rejects_non_hierarchical_base_url() {
        let base = Url::parse("mailto:ops@codes.test").expect("valid URL");
        let result = InvitationCodeHttpClient::new(base, Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(InvitationCodeHttpClientBuildError::InvalidBaseUrl(_))
        ));
    }

    #[rstest]
    #[case(r#"{"code":"INV1","used":true}"#, true)]
    #[case(r#"{"code":"INV1"}"#, false)]
    fn decodes_code_payloads(#[case] body: &str, #[case] used: bool) {
        let code = parse_code(body.as_bytes()).expect("payload decodes");
        assert_eq!(code.code, "INV1");
        assert_eq!(code.used, used);
    }

    #[rstest]
    fn malformed_payload_maps_to_decode() {
        let error = parse_code(b"<html>").expect_err("decode fails");
        assert!(matches!(error, InvitationCodeClientError::Decode { .. }));
    }

    #[rstest]
    fn status_errors_keep_code_and_preview() {
        let error = map_status_error(
            StatusCode::SERVICE_UNAVAILABLE,
            b"  down \n for   maintenance ",
        );
        assert_eq!(
            error,
            InvitationCodeClientError::status(503_u16, "down for maintenance")
        );
    }

    async fn lookup(path: web::Path<String>) -> HttpResponse {
        match path.as_str() {
            "INV1" => HttpResponse::Ok().json(serde_json::json!({ "code": "INV1", "used": false })),
            "BROKEN" => HttpResponse::Ok().body("not json"),
            "FLAKY" => HttpResponse::ServiceUnavailable().body("try later"),
            _ => HttpResponse::NotFound().finish(),
        }
    }

    async fn consume(path: web::Path<String>) -> HttpResponse {
        match path.as_str() {
            "INV1" => HttpResponse::NoContent().finish(),
            _ => HttpResponse::NotFound().body("unknown code"),
        }
    }

    fn spawn_stand_in() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let server = HttpServer::new(|| {
            App::new()
                .route("/invitation-codes/{code}", web::get().to(lookup))
                .route("/invitation-codes/{code}/used", web::put().to(consume))
        })
        .workers(1)
        .listen(listener)
        .expect("listen")
        .run();
        actix_web::rt::spawn(server);
        format!("http://{addr}")
    }

    #[actix_web::test]
    async fn talks_to_invitation_code_service() {
        let client = client(&spawn_stand_in());

        let found = client.find_by_code("INV1").await.expect("lookup succeeds");
        assert_eq!(found, Some(InvitationCode::unused("INV1")));

        let missing = client.find_by_code("NOPE").await.expect("lookup succeeds");
        assert_eq!(missing, None);

        let broken = client.find_by_code("BROKEN").await.expect_err("bad payload");
        assert!(matches!(broken, InvitationCodeClientError::Decode { .. }));

        let flaky = client.find_by_code("FLAKY").await.expect_err("unavailable");
        assert!(matches!(
            flaky,
            InvitationCodeClientError::Status { status: 503, .. }
        ));

        client.mark_as_used("INV1").await.expect("mark succeeds");
        let unknown = client.mark_as_used("NOPE").await.expect_err("unknown code");
        assert_eq!(
            unknown,
            InvitationCodeClientError::status(404_u16, "unknown code")
        );
    }

    #[actix_web::test]
    async fn unreachable_service_maps_to_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let error = client(&format!("http://{addr}"))
            .find_by_code("INV1")
            .await
            .expect_err("connection refused");
        assert!(matches!(error, InvitationCodeClientError::Transport { .. }));
    }
}
