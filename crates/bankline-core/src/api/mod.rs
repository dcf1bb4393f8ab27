//! REST API client module for the banking backend.
//!
//! This module provides the `BankApi` trait describing every endpoint the
//! client uses, the reqwest-backed `ApiClient` implementing it, and the
//! `AuthInterceptor` that attaches the session's bearer token to each
//! outgoing request.

pub mod client;
pub mod error;
pub mod interceptor;

pub use client::{ApiClient, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use interceptor::AuthInterceptor;

use async_trait::async_trait;

use crate::models::{
    Account, AuthResponse, Credentials, Customer, NewAccount, NewCustomer, NewPayment, Payment,
};

/// The backend's HTTP contract, one method per endpoint.
#[async_trait]
pub trait BankApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// `POST /api/customers`
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError>;

    /// `GET /api/customers/email/{email}`
    async fn customer_by_email(&self, email: &str) -> Result<Customer, ApiError>;

    /// `POST /api/accounts`
    async fn create_account(&self, account: &NewAccount) -> Result<Account, ApiError>;

    /// `GET /api/accounts/customer/{customerId}`
    async fn accounts_by_customer(&self, customer_id: &str) -> Result<Vec<Account>, ApiError>;

    /// `POST /api/payments`
    async fn process_payment(&self, payment: &NewPayment) -> Result<Payment, ApiError>;

    /// `GET /api/payments/account/{accountId}`
    async fn payments_by_account(&self, account_id: &str) -> Result<Vec<Payment>, ApiError>;
}
