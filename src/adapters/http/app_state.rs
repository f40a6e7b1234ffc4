use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    /// The store itself, for backend status reporting on /health.
    pub waitlist_repo: Arc<dyn WaitlistRepo>,
}
