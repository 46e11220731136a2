use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::session_service::SessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = Arc::new(InMemorySessionRepository::new(config.session_idle_timeout()));
        Self::with_repository(config, repository)
    }

    pub fn with_repository(config: Config, repository: Arc<dyn SessionRepository>) -> Self {
        let session_service = Arc::new(SessionService::new(repository));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}
