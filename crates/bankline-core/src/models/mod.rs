//! Data models for the banking API.
//!
//! This module contains the request and response records exchanged with the
//! backend, one set per endpoint:
//!
//! - `Credentials`, `Registration`, `AuthResponse`: sign-in and sign-up
//! - `NewCustomer`, `Customer`: customer profiles
//! - `NewAccount`, `Account`, `AccountType`, `AccountStatus`: bank accounts
//! - `NewPayment`, `Payment`, `PaymentType`, `PaymentStatus`: transfers
//!
//! Request types carry a `validate` method for checks that can be made
//! before anything is sent.

pub mod account;
pub mod auth;
pub mod customer;
pub mod payment;

pub use account::{Account, AccountStatus, AccountType, NewAccount};
pub use auth::{AuthResponse, Credentials, Registration};
pub use customer::{Customer, NewCustomer};
pub use payment::{NewPayment, Payment, PaymentStatus, PaymentType};

use thiserror::Error;

/// Maximum length for names accepted by the backend
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Email should be valid")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Amount must be a positive number with at most two decimal places")]
    InvalidAmount,

    #[error("Source and destination accounts must be different")]
    SameAccount,
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

pub(crate) fn require_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Loose shape check: one `@` with something on both sides.
pub(crate) fn require_email(value: &str) -> Result<(), ValidationError> {
    require("Email", value)?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_email() {
        assert!(require_email("a@x.com").is_ok());
        assert!(require_email("  a@x.com ").is_ok());
        assert_eq!(require_email(""), Err(ValidationError::Missing("Email")));
        assert_eq!(require_email("ax.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("@x.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("a@"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("a@b@c"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_require_name_length() {
        assert!(require_name("First name", "Ada").is_ok());
        assert!(require_name("First name", &"x".repeat(100)).is_ok());
        assert_eq!(
            require_name("First name", &"x".repeat(101)),
            Err(ValidationError::TooLong { field: "First name", max: 100 })
        );
        assert_eq!(require_name("First name", "   "), Err(ValidationError::Missing("First name")));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Missing("Address").to_string(), "Address is required");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
