//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use admin_backend::outbound::persistence::DbPool;
use url::Url;

/// Remote invitation-code service endpoint.
#[derive(Debug, Clone)]
pub struct InvitationCodesEndpoint {
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) invitation_codes: Option<InvitationCodesEndpoint>,
    pub(crate) seed_invitation_codes: Vec<String>,
}

impl ServerConfig {
    /// Construct a configuration that falls back to in-memory adapters.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            invitation_codes: None,
            seed_invitation_codes: Vec::new(),
        }
    }

    /// Attach a database connection pool for the administrator repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Use the remote invitation-code service instead of the in-memory one.
    #[must_use]
    pub fn with_invitation_codes_service(mut self, base_url: Url, timeout: Duration) -> Self {
        self.invitation_codes = Some(InvitationCodesEndpoint { base_url, timeout });
        self
    }

    /// Codes known to the in-memory invitation-code client.
    #[must_use]
    pub fn with_seed_invitation_codes(mut self, codes: Vec<String>) -> Self {
        self.seed_invitation_codes = codes;
        self
    }
}
