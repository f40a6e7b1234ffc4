//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryPersistence},
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating an `AppState` for testing. Defaults to a fresh
/// in-memory store and no configured database.
pub struct TestAppStateBuilder {
    database_url: Option<String>,
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            database_url: None,
            repo: None,
        }
    }

    /// Mark a database as configured (without connecting to one).
    pub fn with_database_url(mut self, url: &str) -> Self {
        self.database_url = Some(url.to_string());
        self
    }

    /// Use a specific repo implementation instead of the in-memory default.
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            database_url: self.database_url,
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
        };

        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryPersistence::new()));
        let waitlist_use_cases = WaitlistUseCases::new(repo.clone());

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
            waitlist_repo: repo,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh `AppState` over an empty in-memory store.
pub fn test_app_state() -> AppState {
    TestAppStateBuilder::new().build()
}
