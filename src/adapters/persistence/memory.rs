use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    app_error::AppResult,
    entities::waitlist_signup::{NewWaitlistSignup, WaitlistSignup},
    use_cases::waitlist::{StorageKind, WaitlistRepo},
};

/// Volatile signup store, used when no database is configured or when
/// connecting to it fails at startup. Data lives for the process lifetime
/// only; losing it on restart is a documented limitation of this backend.
///
/// A `Vec` keeps `list_all` in insertion order. The mutex serializes
/// concurrent inserts; it does not make the service's check-then-insert
/// sequence atomic (the database backend's unique constraint covers that).
#[derive(Default)]
pub struct InMemoryPersistence {
    signups: Mutex<Vec<WaitlistSignup>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryPersistence {
    async fn create(&self, signup: NewWaitlistSignup) -> AppResult<WaitlistSignup> {
        let record = WaitlistSignup {
            id: Uuid::new_v4(),
            email: signup.email,
            name: signup.name,
            phone_number: signup.phone_number,
            company_name: signup.company_name,
            role: signup.role,
            company_size: signup.company_size,
            is_pilot_partner: signup.is_pilot_partner,
            created_at: Utc::now(),
        };
        self.signups.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistSignup>> {
        Ok(self
            .signups
            .lock()
            .unwrap()
            .iter()
            .find(|signup| signup.email == email)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistSignup>> {
        Ok(self.signups.lock().unwrap().clone())
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Memory
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
