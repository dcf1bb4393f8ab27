//! Bearer token attachment for outgoing requests.

use std::future::Future;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use tracing::warn;

use super::ApiError;
use crate::auth::Session;

/// Adds `Authorization: Bearer <token>` to every request while a session is
/// active.
///
/// There is no allow-list: sign-in and sign-up requests get the header too
/// when a token happens to be stored, which the backend ignores.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    session: Session,
}

impl AuthInterceptor {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Copy of `request` ready to send. The caller's request is left as is.
    ///
    /// Without a token the copy is identical to the original. With one, the
    /// copy carries exactly one `Authorization` header, replacing any that
    /// was already present.
    pub fn authorize(&self, request: &Request) -> Result<Request, ApiError> {
        let mut outgoing = request.try_clone().ok_or_else(|| {
            ApiError::InvalidRequest("request body cannot be replayed".to_string())
        })?;

        let Some(token) = self.session.token() else {
            return Ok(outgoing);
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                outgoing.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!(url = %request.url(), "Stored token is not a valid header value, sending without it");
            }
        }

        Ok(outgoing)
    }

    /// Authorize `request` and hand the copy to `next`.
    pub async fn intercept<F, Fut, T>(&self, request: &Request, next: F) -> Result<T, ApiError>
    where
        F: FnOnce(Request) -> Fut,
        Fut: Future<Output = Result<T, reqwest::Error>>,
    {
        let outgoing = self.authorize(request)?;
        Ok(next(outgoing).await?)
    }
}
