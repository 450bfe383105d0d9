//! Backend entry-point: loads settings, prepares adapters and serves the
//! administrator API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use admin_backend::inbound::http::health::HealthState;
use admin_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use admin_backend::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = build_server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("failed to start server")?;
    info!("administrator backend listening");
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}

async fn build_server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let bind_addr = settings.bind_addr().wrap_err("invalid bind host")?;
    let mut config = ServerConfig::new(bind_addr)
        .with_seed_invitation_codes(settings.seed_invitation_codes());

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            let url = database_url.to_owned();
            tokio::task::spawn_blocking(move || run_migrations(&url))
                .await
                .wrap_err("migration task panicked")?
                .wrap_err("failed to run migrations")?;
        }
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    if let Some(base_url) = settings
        .invitation_codes_url()
        .wrap_err("invalid invitation code service URL")?
    {
        config =
            config.with_invitation_codes_service(base_url, settings.invitation_codes_timeout());
    }

    Ok(config)
}
