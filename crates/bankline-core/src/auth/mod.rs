//! Authentication module for managing the signed-in session.
//!
//! This module provides:
//! - `TokenStore`: a single persistent slot for the bearer token, with file,
//!   OS keychain, and in-memory backends
//! - `decode_email` / `decode_claims`: unverified reads of the token payload
//! - `Session`: the logged-in predicate and current identity
//!
//! The token is the only session state. Nothing here checks expiry; the
//! backend decides when a token is no longer good.

pub mod credentials;
pub mod session;
pub mod store;
pub mod token;

pub use credentials::KeyringTokenStore;
pub use session::{Session, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
pub use token::{decode_claims, decode_email, Claims};
