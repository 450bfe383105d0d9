//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving port, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::AdministratorService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub administrators: Arc<dyn AdministratorService>,
}

impl HttpState {
    /// Construct state from the administrator use-case port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use admin_backend::domain::AdministratorServiceImpl;
    /// use admin_backend::inbound::http::state::HttpState;
    /// use admin_backend::outbound::memory::{
    ///     InMemoryAdministratorRepository, InMemoryInvitationCodeClient,
    /// };
    ///
    /// let service = AdministratorServiceImpl::new(
    ///     Arc::new(InMemoryAdministratorRepository::new()),
    ///     Arc::new(InMemoryInvitationCodeClient::default()),
    /// );
    /// let _state = HttpState::new(Arc::new(service));
    /// ```
    pub fn new(administrators: Arc<dyn AdministratorService>) -> Self {
        Self { administrators }
    }
}
