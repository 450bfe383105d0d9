//! Application settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `ADMIN_*` environment variables and config
//! files. Absent adapter settings select the in-memory adapters.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_INVITATION_CODES_TIMEOUT_SECS: u64 = 5;

/// Runtime configuration for the administrator service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADMIN")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory repository is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Base URL of the invitation-code service.
    pub invitation_codes_url: Option<String>,
    /// Per-request timeout for the invitation-code service.
    pub invitation_codes_timeout_secs: Option<u64>,
    /// Codes known to the in-memory invitation-code client. The environment
    /// variable takes a comma-separated list.
    #[serde(default, deserialize_with = "codes_from_list_or_single")]
    pub seed_invitation_codes: Option<Vec<String>>,
}

/// A lone `ADMIN_SEED_INVITATION_CODES=INV1` arrives as a string rather than
/// a list.
fn codes_from_list_or_single<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Codes {
        Many(Vec<String>),
        One(String),
    }

    Ok(Option::<Codes>::deserialize(deserializer)?.map(|codes| match codes {
        Codes::Many(codes) => codes,
        Codes::One(code) => vec![code],
    }))
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim().parse()?;
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Parse the invitation-code service URL, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the configured value is not a URL.
    pub fn invitation_codes_url(&self) -> Result<Option<Url>, url::ParseError> {
        self.invitation_codes_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(Url::parse)
            .transpose()
    }

    pub fn invitation_codes_timeout(&self) -> Duration {
        Duration::from_secs(
            self.invitation_codes_timeout_secs
                .unwrap_or(DEFAULT_INVITATION_CODES_TIMEOUT_SECS),
        )
    }

    /// Codes seeded into the in-memory invitation-code client.
    pub fn seed_invitation_codes(&self) -> Vec<String> {
        self.seed_invitation_codes
            .iter()
            .flatten()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
