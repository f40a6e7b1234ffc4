use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored waitlist signup. `id` and `created_at` are assigned by the
/// store at creation time and never change afterwards.
///
/// Wire names are camelCase to match the landing-page client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSignup {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// `None` means the field was never submitted; it serializes as `null`,
    /// never as an empty string.
    pub phone_number: Option<String>,
    pub company_name: String,
    pub role: Option<String>,
    pub company_size: Option<String>,
    pub is_pilot_partner: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated signup-creation request, produced by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWaitlistSignup {
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub company_name: String,
    pub role: Option<String>,
    pub company_size: Option<String>,
    pub is_pilot_partner: bool,
}
