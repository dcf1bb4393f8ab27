//! API client for communicating with the banking REST backend.
//!
//! This module provides the `ApiClient` struct, the reqwest-backed
//! implementation of [`BankApi`]. Every request passes through the
//! [`AuthInterceptor`] before it is sent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, AUTHORIZATION};
use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::Session;
use crate::models::{
    Account, AuthResponse, Credentials, Customer, NewAccount, NewCustomer, NewPayment, Payment,
};

use super::{ApiError, AuthInterceptor, BankApi};

// ============================================================================
// Constants
// ============================================================================

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How a 401 to a request is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    /// A 401 means the bearer token was rejected
    Authorized,
    /// `/auth/*`: a 401 means the submitted credentials were wrong
    CredentialExchange,
}

/// Options for building an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    /// Drop the stored session when the backend rejects its token
    pub expire_on_unauthorized: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            expire_on_unauthorized: true,
        }
    }
}

/// API client for the banking backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Session,
    interceptor: AuthInterceptor,
    expire_on_unauthorized: bool,
}

impl ApiClient {
    /// Create a new API client bound to `session`
    pub fn new(session: Session, options: ClientOptions) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&options.base_url)?;
        let client = Client::builder().timeout(options.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            interceptor: AuthInterceptor::new(session.clone()),
            session,
            expire_on_unauthorized: options.expire_on_unauthorized,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build an endpoint URL. Each segment is percent-encoded on its own, so
    /// values such as emails cannot change the path structure.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(
        &self,
        response: reqwest::Response,
        kind: RequestKind,
        sent_token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);

        if error.is_unauthorized() && kind == RequestKind::Authorized && self.expire_on_unauthorized {
            if let Some(token) = sent_token {
                self.expire(token);
            }
        }

        Err(error)
    }

    /// End the session if it still holds the rejected token. A token stored
    /// after the request went out is left alone.
    fn expire(&self, rejected: &str) {
        if self.session.token().as_deref() != Some(rejected) {
            debug!("Rejected token is no longer stored, keeping session");
            return;
        }
        warn!("Backend rejected the session token, signing out");
        if let Err(e) = self.session.end() {
            warn!(error = %e, "Failed to clear rejected session");
        }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        kind: RequestKind,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "Sending request");

        let mut builder = self
            .client
            .request(method, url.clone())
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build()?;

        let mut sent_token = None;
        let response = self
            .interceptor
            .intercept(&request, |outgoing| {
                sent_token = bearer_token(outgoing.headers());
                self.client.execute(outgoing)
            })
            .await?;

        let response = self
            .check_response(response, kind, sent_token.as_deref())
            .await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.send::<T, ()>(Method::GET, segments, None, RequestKind::Authorized)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, segments, Some(body), RequestKind::Authorized)
            .await
    }

    /// `POST /auth/{action}`
    async fn exchange(&self, action: &str, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.send(
            Method::POST,
            &["auth", action],
            Some(credentials),
            RequestKind::CredentialExchange,
        )
        .await
    }
}

/// Token carried by an `Authorization: Bearer` header
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidRequest(format!(
            "base URL must be http or https: {}",
            raw
        )));
    }
    Ok(url)
}

#[async_trait]
impl BankApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.exchange("login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.exchange("register", credentials).await
    }

    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        self.post(&["api", "customers"], customer).await
    }

    async fn customer_by_email(&self, email: &str) -> Result<Customer, ApiError> {
        self.get(&["api", "customers", "email", email]).await
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account, ApiError> {
        self.post(&["api", "accounts"], account).await
    }

    async fn accounts_by_customer(&self, customer_id: &str) -> Result<Vec<Account>, ApiError> {
        self.get(&["api", "accounts", "customer", customer_id]).await
    }

    async fn process_payment(&self, payment: &NewPayment) -> Result<Payment, ApiError> {
        self.post(&["api", "payments"], payment).await
    }

    async fn payments_by_account(&self, account_id: &str) -> Result<Vec<Payment>, ApiError> {
        self.get(&["api", "payments", "account", account_id]).await
    }
}
