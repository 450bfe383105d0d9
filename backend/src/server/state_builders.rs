//! Builders wiring configured adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use admin_backend::domain::AdministratorServiceImpl;
use admin_backend::domain::ports::{
    AdministratorRepository, AdministratorService, InvitationCodeClient,
};
use admin_backend::inbound::http::state::HttpState;
use admin_backend::outbound::invitation_codes::InvitationCodeHttpClient;
use admin_backend::outbound::memory::{
    InMemoryAdministratorRepository, InMemoryInvitationCodeClient,
};
use admin_backend::outbound::persistence::DieselAdministratorRepository;

use super::ServerConfig;

/// Pick the configured adapter, or the in-memory fallback when none is set.
fn select_adapter<Cfg, Port>(
    configured: Option<&Cfg>,
    make_configured: impl FnOnce(&Cfg) -> std::io::Result<Arc<Port>>,
    fallback: impl FnOnce() -> Arc<Port>,
) -> std::io::Result<Arc<Port>>
where
    Port: ?Sized,
{
    match configured {
        Some(cfg) => make_configured(cfg),
        None => Ok(fallback()),
    }
}

fn build_repository(config: &ServerConfig) -> std::io::Result<Arc<dyn AdministratorRepository>> {
    select_adapter(
        config.db_pool.as_ref(),
        |pool| {
            info!("using PostgreSQL administrator repository");
            Ok(Arc::new(DieselAdministratorRepository::new(pool.clone()))
                as Arc<dyn AdministratorRepository>)
        },
        || {
            info!("no database configured; using in-memory administrator repository");
            Arc::new(InMemoryAdministratorRepository::new()) as Arc<dyn AdministratorRepository>
        },
    )
}

fn build_invitation_codes(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn InvitationCodeClient>> {
    select_adapter(
        config.invitation_codes.as_ref(),
        |endpoint| {
            info!(base_url = %endpoint.base_url, "using remote invitation-code service");
            let client =
                InvitationCodeHttpClient::new(endpoint.base_url.clone(), endpoint.timeout)
                    .map_err(|err| std::io::Error::other(err.to_string()))?;
            Ok(Arc::new(client) as Arc<dyn InvitationCodeClient>)
        },
        || {
            info!(
                seeded = config.seed_invitation_codes.len(),
                "no invitation-code service configured; using in-memory client"
            );
            Arc::new(InMemoryInvitationCodeClient::with_codes(
                config.seed_invitation_codes.iter().cloned(),
            )) as Arc<dyn InvitationCodeClient>
        },
    )
}

/// Build the shared HTTP state from the configured adapters.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the invitation-code HTTP client cannot be
/// constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let repository = build_repository(config)?;
    let invitation_codes = build_invitation_codes(config)?;
    let service: Arc<dyn AdministratorService> =
        Arc::new(AdministratorServiceImpl::new(repository, invitation_codes));
    Ok(web::Data::new(HttpState::new(service)))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use super::*;
    use admin_backend::domain::{AdministratorRequest, ErrorCode};
    use rstest::rstest;
    use url::Url;

    trait Label {
        fn label(&self) -> &'static str;
    }

    struct Configured;
    struct Fallback;

    impl Label for Configured {
        fn label(&self) -> &'static str {
            "configured"
        }
    }

    impl Label for Fallback {
        fn label(&self) -> &'static str {
            "fallback"
        }
    }

    fn config() -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    #[rstest]
    #[case(Some(()), "configured")]
    #[case(None, "fallback")]
    fn selects_configured_adapter_when_present(
        #[case] configured: Option<()>,
        #[case] expected: &str,
    ) {
        let adapter: Arc<dyn Label> = select_adapter(
            configured.as_ref(),
            |_| Ok(Arc::new(Configured) as Arc<dyn Label>),
            || Arc::new(Fallback) as Arc<dyn Label>,
        )
        .expect("adapter selected");
        assert_eq!(adapter.label(), expected);
    }

    #[rstest]
    fn rejects_unusable_invitation_code_url() {
        let url = Url::parse("mailto:ops@codes.test").expect("valid URL");
        let config = config().with_invitation_codes_service(url, Duration::from_secs(1));
        assert!(build_invitation_codes(&config).is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn in_memory_state_registers_with_seeded_codes() {
        let config = config().with_seed_invitation_codes(vec!["INV1".to_owned()]);
        let state = build_http_state(&config).expect("state builds");

        let request =
            AdministratorRequest::try_from_parts("a@x.com", "p", "INV1").expect("valid request");
        let response = state
            .administrators
            .register(request)
            .await
            .expect("registration succeeds");
        assert_eq!(response.email, "a@x.com");

        let unknown =
            AdministratorRequest::try_from_parts("b@x.com", "p", "NOPE").expect("valid request");
        let error = state
            .administrators
            .register(unknown)
            .await
            .expect_err("unknown code");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
