use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::customer::NewCustomer;
use super::{require, require_email, ValidationError, MIN_PASSWORD_LENGTH};

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Checks for signing in. Only presence is checked so that nothing
    /// hints at which part was wrong.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Missing("Password"));
        }
        Ok(())
    }

    /// Checks for creating a new sign-in
    pub fn validate_new(&self) -> Result<(), ValidationError> {
        require_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Missing("Password"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Response of the credential exchange endpoints.
#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Everything collected by the sign-up form: the new credentials plus the
/// customer profile created right after them.
#[derive(Debug, Clone)]
pub struct Registration {
    pub credentials: Credentials,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credentials.validate_new()?;
        self.profile().validate()
    }

    /// Profile record for `POST /api/customers`, sharing the sign-in email
    pub fn profile(&self) -> NewCustomer {
        NewCustomer {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.credentials.email.clone(),
            birth_date: self.birth_date,
        }
    }
}
