// ============================================================================
// VALIDATION - client-side checks run before any request is sent
// ============================================================================

use regex::Regex;
use crate::models::{Credentials, Role};
use crate::services::ClientError;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex");
}

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn require(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ClientError> {
    require("Email", email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ClientError::Validation("Please enter a valid email address".to_string()));
    }
    Ok(())
}

/// At least 8 characters with upper, lower, digit and special character
pub fn validate_password(password: &str) -> Result<(), ClientError> {
    require("Password", password)?;
    let complex = password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());
    if !complex {
        return Err(ClientError::Validation(format!(
            "Password must be at least {} characters and include upper and lower case letters, a number and a special character",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Checks a login form for the given role
pub fn validate_credentials(role: Role, credentials: &Credentials) -> Result<(), ClientError> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)?;
    if role == Role::Admin {
        require("Pass key", credentials.pass_key.as_deref().unwrap_or(""))?;
    }
    Ok(())
}
