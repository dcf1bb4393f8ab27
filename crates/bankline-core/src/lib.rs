//! Core library for bankline.
//!
//! Session handling, the authorizing API client, typed API records, route
//! guarding and the user flows of the retail banking client. The command
//! line front end lives in `bankline-cli`.
//!
//! The signed-in state is nothing more than the stored bearer token: see
//! [`auth::Session`]. Every request made by [`api::ApiClient`] passes through
//! [`api::AuthInterceptor`], and [`routes::Router`] keeps signed-out users on
//! the login view.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod routes;
pub mod utils;

pub use api::{ApiClient, ApiError, AuthInterceptor, BankApi, ClientOptions};
pub use app::{AccountHistory, App, Dashboard, FlowError};
pub use auth::{Session, SessionState, TokenStore};
pub use config::Config;
pub use routes::{Navigation, RouteGuard, Router, View};
