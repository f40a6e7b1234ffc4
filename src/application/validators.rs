use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::{
    app_error::FieldError,
    entities::waitlist_signup::NewWaitlistSignup,
};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email()
}

/// Validates an untrusted signup payload and produces a typed creation
/// request, or the full list of per-field failures.
///
/// Rules:
/// - `email`, `name`, `companyName` are required non-empty strings; `email`
///   must additionally pass email-syntax validation. No normalization is
///   applied to any value (no trimming, no case folding).
/// - `phoneNumber`, `role`, `companySize` are optional strings; absent or
///   null stays absent, it is never coerced to an empty string.
/// - `isPilotPartner` is an optional boolean defaulting to false.
///
/// All failures are collected; validation never short-circuits on the first
/// bad field.
pub fn validate_submission(payload: &Value) -> Result<NewWaitlistSignup, Vec<FieldError>> {
    let Some(body) = payload.as_object() else {
        return Err(vec![FieldError::new("body", "Expected a JSON object")]);
    };

    let mut errors = Vec::new();

    let email = required_string(body, "email", &mut errors);
    if let Some(email) = email.as_deref()
        && !is_valid_email(email)
    {
        errors.push(FieldError::new("email", "Must be a valid email address"));
    }
    let name = required_string(body, "name", &mut errors);
    let company_name = required_string(body, "companyName", &mut errors);

    let phone_number = optional_string(body, "phoneNumber", &mut errors);
    let role = optional_string(body, "role", &mut errors);
    let company_size = optional_string(body, "companySize", &mut errors);

    let is_pilot_partner = match body.get("isPilotPartner") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            errors.push(FieldError::new("isPilotPartner", "Expected a boolean"));
            false
        }
    };

    match (email, name, company_name) {
        (Some(email), Some(name), Some(company_name)) if errors.is_empty() => {
            Ok(NewWaitlistSignup {
                email,
                name,
                phone_number,
                company_name,
                role,
                company_size,
                is_pilot_partner,
            })
        }
        _ => Err(errors),
    }
}

fn required_string(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::String(value)) if value.is_empty() => {
            errors.push(FieldError::new(field, "Must not be empty"));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected a string"));
            None
        }
    }
}

fn optional_string(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected a string"));
            None
        }
    }
}
