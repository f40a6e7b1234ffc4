use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::validate_submission,
    entities::waitlist_signup::{NewWaitlistSignup, WaitlistSignup},
};

/// Which backend a repo writes to. Reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Persists a validated signup, assigning `id` and `created_at`.
    async fn create(&self, signup: NewWaitlistSignup) -> AppResult<WaitlistSignup>;
    /// Exact-match lookup; no trimming or case folding is applied.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistSignup>>;
    /// Callers must not rely on the ordering of the result.
    async fn list_all(&self) -> AppResult<Vec<WaitlistSignup>>;
    fn kind(&self) -> StorageKind;
    async fn ping(&self) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validates a raw payload, rejects duplicate emails, and persists the
    /// signup.
    ///
    /// The duplicate check and the insert are not atomic for the in-memory
    /// backend; the Postgres backend's unique constraint on `email` catches
    /// the race and surfaces it as a storage error. No retries are attempted.
    #[instrument(skip(self, payload))]
    pub async fn submit(&self, payload: &Value) -> AppResult<WaitlistSignup> {
        let request = validate_submission(payload).map_err(AppError::Validation)?;

        if self.repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        self.repo.create(request).await
    }

    /// No filtering or pagination; the waitlist is expected to stay small.
    pub async fn list_all(&self) -> AppResult<Vec<WaitlistSignup>> {
        self.repo.list_all().await
    }
}
