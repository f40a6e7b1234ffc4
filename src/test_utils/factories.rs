//! Test data factories for creating valid test fixtures.
//!
//! Each factory creates a complete, valid value with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use serde_json::{Value, json};

use crate::entities::waitlist_signup::NewWaitlistSignup;

/// Create a minimal valid signup payload for the given email.
pub fn signup_payload(email: &str, overrides: impl FnOnce(&mut Value)) -> Value {
    let mut payload = json!({
        "email": email,
        "name": "Test User",
        "companyName": "Acme Labs",
    });
    overrides(&mut payload);
    payload
}

/// Create a validated signup-creation request with sensible defaults.
pub fn create_test_request(
    overrides: impl FnOnce(&mut NewWaitlistSignup),
) -> NewWaitlistSignup {
    let mut request = NewWaitlistSignup {
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        phone_number: None,
        company_name: "Acme Labs".to_string(),
        role: None,
        company_size: None,
        is_pilot_partner: false,
    };
    overrides(&mut request);
    request
}
