//! User flows: signing in and out, sign-up, and the account screens.
//!
//! `App` owns the current view and routes every screen change through the
//! [`Router`]. Each flow returns a [`FlowError`] whose message is safe to show
//! to the user; the underlying API error is kept as its source for logging.

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, BankApi};
use crate::auth::{Session, StoreError};
use crate::models::{
    Account, AccountType, Credentials, Customer, NewAccount, NewPayment, Payment, Registration,
    ValidationError,
};
use crate::routes::{Navigation, Router, View};

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid login credentials")]
    InvalidCredentials(#[source] ApiError),

    #[error("Unable to reach the bank. Check your connection and try again.")]
    Unreachable(#[source] ApiError),

    #[error("Registration failed. Email may already be in use.")]
    RegistrationFailed(#[source] ApiError),

    #[error("Account created but customer profile failed. Contact support.")]
    ProfileFailed(#[source] ApiError),

    #[error("Signed in, but the session could not be saved.")]
    SessionNotSaved(#[source] StoreError),

    #[error("Please log in to continue.")]
    NotLoggedIn,

    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    #[error("Could not determine the signed-in user.")]
    UnknownIdentity,

    #[error("Could not find your customer profile.")]
    ProfileNotFound(#[source] ApiError),

    #[error("Failed to load accounts.")]
    AccountsUnavailable(#[source] ApiError),

    #[error("Failed to create account. Please try again.")]
    AccountCreationFailed(#[source] ApiError),

    #[error("Payment failed")]
    PaymentFailed(#[source] ApiError),

    #[error("Failed to load payments.")]
    PaymentsUnavailable(#[source] ApiError),
}

/// The signed-in customer and their accounts
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub customer: Customer,
    pub accounts: Vec<Account>,
}

/// One account with its payments
#[derive(Debug, Clone)]
pub struct AccountHistory {
    pub account: Account,
    pub payments: Vec<Payment>,
}

pub struct App<A> {
    api: A,
    session: Session,
    router: Router,
    view: View,
}

impl<A: BankApi> App<A> {
    /// Start on the landing view, or on login when signed out
    pub fn new(api: A, session: Session) -> Self {
        let router = Router::new(session.clone());
        let view = router.navigate(View::HOME).view();
        debug!(view = %view, "App starting");
        Self {
            api,
            session,
            router,
            view,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn navigate(&mut self, target: View) -> Navigation {
        let navigation = self.router.navigate(target);
        self.view = navigation.view();
        navigation
    }

    fn enter(&mut self, target: View) -> Result<(), FlowError> {
        if self.navigate(target).is_allowed() {
            Ok(())
        } else {
            Err(FlowError::NotLoggedIn)
        }
    }

    /// Map an API failure from a signed-in screen. A rejected token that has
    /// since been dropped sends the user back to login.
    fn api_failure(&mut self, err: ApiError, wrap: fn(ApiError) -> FlowError) -> FlowError {
        if err.is_unauthorized() && !self.session.is_logged_in() {
            self.navigate(View::Login);
            return FlowError::SessionExpired;
        }
        if err.is_transport() {
            return FlowError::Unreachable(err);
        }
        wrap(err)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Exchange credentials for a session and open the landing view
    pub async fn login(&mut self, credentials: &Credentials) -> Result<View, FlowError> {
        credentials.validate()?;

        let auth = match self.api.login(credentials).await {
            Ok(auth) if !auth.access_token.is_empty() => auth,
            Ok(_) => {
                error!("Login response carried an empty access token");
                return Err(FlowError::InvalidCredentials(ApiError::InvalidResponse(
                    "empty access token".to_string(),
                )));
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                return Err(if e.is_transport() {
                    FlowError::Unreachable(e)
                } else {
                    FlowError::InvalidCredentials(e)
                });
            }
        };

        self.session
            .start(&auth.access_token)
            .map_err(FlowError::SessionNotSaved)?;
        info!("Login successful");

        Ok(self.navigate(View::HOME).view())
    }

    /// Create a sign-in, then the customer profile that goes with it.
    ///
    /// The profile is only attempted once the sign-in exists. If it fails the
    /// new session is kept, so the user is signed in but told the profile is
    /// missing.
    pub async fn register(&mut self, registration: &Registration) -> Result<View, FlowError> {
        registration.validate()?;

        let auth = match self.api.register(&registration.credentials).await {
            Ok(auth) if !auth.access_token.is_empty() => auth,
            Ok(_) => {
                error!("Registration response carried an empty access token");
                return Err(FlowError::RegistrationFailed(ApiError::InvalidResponse(
                    "empty access token".to_string(),
                )));
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                return Err(if e.is_transport() {
                    FlowError::Unreachable(e)
                } else {
                    FlowError::RegistrationFailed(e)
                });
            }
        };

        self.session
            .start(&auth.access_token)
            .map_err(FlowError::SessionNotSaved)?;
        info!("Registration successful");

        if let Err(e) = self.api.create_customer(&registration.profile()).await {
            error!(error = %e, "Customer profile creation failed after registration");
            return Err(FlowError::ProfileFailed(e));
        }

        Ok(self.navigate(View::HOME).view())
    }

    /// Forget the session and return to login. Safe to call when signed out.
    pub fn logout(&mut self) -> View {
        if let Err(e) = self.session.end() {
            error!(error = %e, "Failed to clear session");
        }
        self.navigate(View::Login).view()
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    async fn current_customer(&mut self) -> Result<Customer, FlowError> {
        let email = self.session.current_email().ok_or_else(|| {
            warn!("Session token carries no readable email");
            FlowError::UnknownIdentity
        })?;

        match self.api.customer_by_email(&email).await {
            Ok(customer) => Ok(customer),
            Err(e) => {
                warn!(error = %e, "Customer lookup failed");
                Err(self.api_failure(e, FlowError::ProfileNotFound))
            }
        }
    }

    /// Load the signed-in customer, then their accounts
    pub async fn dashboard(&mut self) -> Result<Dashboard, FlowError> {
        self.enter(View::Dashboard)?;

        let customer = self.current_customer().await?;
        let accounts = match self.api.accounts_by_customer(&customer.id).await {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(error = %e, "Failed to load accounts");
                return Err(self.api_failure(e, FlowError::AccountsUnavailable));
            }
        };

        debug!(count = accounts.len(), "Accounts loaded");
        Ok(Dashboard { customer, accounts })
    }

    /// Dashboard accounts together with their payments, fetched concurrently
    pub async fn account_history(&mut self) -> Result<Vec<AccountHistory>, FlowError> {
        let dashboard = self.dashboard().await?;

        let api = &self.api;
        let fetches = dashboard
            .accounts
            .iter()
            .map(|account| api.payments_by_account(&account.id));
        let results = join_all(fetches).await;

        let mut history = Vec::with_capacity(results.len());
        for (account, result) in dashboard.accounts.into_iter().zip(results) {
            match result {
                Ok(payments) => history.push(AccountHistory { account, payments }),
                Err(e) => {
                    warn!(error = %e, account = %account.id, "Failed to load payments");
                    return Err(self.api_failure(e, FlowError::PaymentsUnavailable));
                }
            }
        }
        Ok(history)
    }

    /// Open a new empty account for the signed-in customer
    pub async fn open_account(
        &mut self,
        name: &str,
        account_type: AccountType,
    ) -> Result<Account, FlowError> {
        self.enter(View::CreateAccount)?;
        crate::models::require_name("Account name", name)?;

        let customer = self.current_customer().await?;
        let request = NewAccount::open(name, &customer.id, account_type);
        request.validate()?;

        match self.api.create_account(&request).await {
            Ok(account) => {
                info!(account = %account.id, "Account opened");
                self.navigate(View::HOME);
                Ok(account)
            }
            Err(e) => {
                error!(error = %e, "Account creation failed");
                Err(self.api_failure(e, FlowError::AccountCreationFailed))
            }
        }
    }

    // =========================================================================
    // Payments
    // =========================================================================

    pub async fn transfer(&mut self, payment: &NewPayment) -> Result<Payment, FlowError> {
        self.enter(View::Payment)?;
        payment.validate()?;

        match self.api.process_payment(payment).await {
            Ok(result) => {
                info!(payment = %result.id, status = %result.status, "Payment processed");
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "Payment failed");
                Err(self.api_failure(e, FlowError::PaymentFailed))
            }
        }
    }

    pub async fn payments(&mut self, account_id: &str) -> Result<Vec<Payment>, FlowError> {
        self.enter(View::Dashboard)?;
        crate::models::require("Account", account_id)?;

        match self.api.payments_by_account(account_id.trim()).await {
            Ok(payments) => Ok(payments),
            Err(e) => {
                warn!(error = %e, "Failed to load payments");
                Err(self.api_failure(e, FlowError::PaymentsUnavailable))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use reqwest::StatusCode;

    use super::*;
    use crate::models::{AuthResponse, NewCustomer};

    const TOKEN: &str = "abc.eyJlbWFpbCI6ImFAeC5jb20ifQ.sig";

    fn status(code: u16) -> ApiError {
        ApiError::from_status(StatusCode::from_u16(code).unwrap(), "")
    }

    /// Scripted backend. Protected calls answer 401 and clear the session
    /// when `reject_token` is set, as the real client does.
    #[derive(Default)]
    struct FakeApi {
        token: Option<String>,
        fail_profile: bool,
        customer_missing: bool,
        fail_accounts: bool,
        fail_payment: bool,
        reject_token: bool,
        session: Option<Session>,
        calls: Mutex<Vec<&'static str>>,
        opened: Mutex<Option<NewAccount>>,
    }

    impl FakeApi {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn check_token(&self) -> Result<(), ApiError> {
            if self.reject_token {
                if let Some(session) = &self.session {
                    session.end().unwrap();
                }
                return Err(ApiError::Unauthorized);
            }
            Ok(())
        }

        fn account(id: &str) -> Account {
            serde_json::from_value(serde_json::json!({
                "accountId": id,
                "accountName": format!("Account {}", id),
                "accountType": "CHECKING",
                "accountStatus": "ACTIVE",
                "accountBalance": "10.00",
                "customerId": "c-1"
            }))
            .unwrap()
        }

        fn payment(id: &str, from: &str, to: &str) -> Payment {
            serde_json::from_value(serde_json::json!({
                "paymentId": id,
                "fromAccountId": from,
                "toAccountId": to,
                "amount": "5.00",
                "status": "COMPLETED",
                "type": "TRANSFER"
            }))
            .unwrap()
        }
    }

    #[async_trait]
    impl BankApi for FakeApi {
        async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
            self.record("login");
            match &self.token {
                Some(token) => Ok(serde_json::from_value(serde_json::json!({ "accessToken": token })).unwrap()),
                None => Err(status(401)),
            }
        }

        async fn register(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
            self.record("register");
            match &self.token {
                Some(token) => Ok(serde_json::from_value(serde_json::json!({ "accessToken": token })).unwrap()),
                None => Err(status(409)),
            }
        }

        async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
            self.record("create_customer");
            if self.fail_profile {
                return Err(status(400));
            }
            Ok(Customer {
                id: "c-1".to_string(),
                first_name: Some(customer.first_name.clone()),
                last_name: Some(customer.last_name.clone()),
                address: Some(customer.address.clone()),
                email: Some(customer.email.clone()),
                birth_date: Some(customer.birth_date),
                register_date: None,
            })
        }

        async fn customer_by_email(&self, email: &str) -> Result<Customer, ApiError> {
            self.record("customer_by_email");
            self.check_token()?;
            if self.customer_missing {
                return Err(status(404));
            }
            Ok(Customer {
                id: "c-1".to_string(),
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                address: None,
                email: Some(email.to_string()),
                birth_date: None,
                register_date: None,
            })
        }

        async fn create_account(&self, account: &NewAccount) -> Result<Account, ApiError> {
            self.record("create_account");
            self.check_token()?;
            *self.opened.lock().unwrap() = Some(account.clone());
            Ok(Self::account("a-9"))
        }

        async fn accounts_by_customer(&self, customer_id: &str) -> Result<Vec<Account>, ApiError> {
            self.record("accounts_by_customer");
            self.check_token()?;
            assert_eq!(customer_id, "c-1");
            if self.fail_accounts {
                return Err(status(500));
            }
            Ok(vec![Self::account("a-1"), Self::account("a-2")])
        }

        async fn process_payment(&self, payment: &NewPayment) -> Result<Payment, ApiError> {
            self.record("process_payment");
            self.check_token()?;
            if self.fail_payment {
                return Err(status(422));
            }
            Ok(Self::payment("p-1", &payment.from_account_id, &payment.to_account_id))
        }

        async fn payments_by_account(&self, account_id: &str) -> Result<Vec<Payment>, ApiError> {
            self.record("payments_by_account");
            self.check_token()?;
            Ok(vec![Self::payment("p-1", account_id, "a-x")])
        }
    }

    fn app(api: FakeApi) -> App<FakeApi> {
        App::new(api, Session::in_memory())
    }

    fn signed_in(mut api: FakeApi) -> App<FakeApi> {
        let session = Session::in_memory();
        session.start(TOKEN).unwrap();
        api.session = Some(session.clone());
        App::new(api, session)
    }

    fn registration() -> Registration {
        Registration {
            credentials: Credentials::new("a@x.com", "correct horse"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address: "12 St James's Square".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        }
    }

    // -------------------------------------------------------------------------
    // Login / logout
    // -------------------------------------------------------------------------

    #[test]
    fn test_starts_on_login_when_signed_out() {
        assert_eq!(app(FakeApi::default()).view(), View::Login);
        assert_eq!(signed_in(FakeApi::default()).view(), View::Dashboard);
    }

    #[tokio::test]
    async fn test_login_success_stores_token() {
        let mut app = app(FakeApi {
            token: Some(TOKEN.to_string()),
            ..Default::default()
        });

        let view = app.login(&Credentials::new("a@x.com", "pw")).await.unwrap();

        assert_eq!(view, View::Dashboard);
        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.session().token().as_deref(), Some(TOKEN));
        assert_eq!(app.session().current_email().as_deref(), Some("a@x.com"));
        assert!(app.navigate(View::Dashboard).is_allowed());
    }

    #[tokio::test]
    async fn test_login_failure_is_generic() {
        let mut app = app(FakeApi::default());

        let err = app.login(&Credentials::new("a@x.com", "wrong")).await.unwrap_err();

        assert!(matches!(err, FlowError::InvalidCredentials(_)));
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert!(!app.session().is_logged_in());
        assert_eq!(app.view(), View::Login);
    }

    #[tokio::test]
    async fn test_login_empty_token_is_rejected() {
        let mut app = app(FakeApi {
            token: Some(String::new()),
            ..Default::default()
        });

        let err = app.login(&Credentials::new("a@x.com", "pw")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert!(!app.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let mut app = app(FakeApi::default());

        let err = app.login(&Credentials::new("", "pw")).await.unwrap_err();
        assert!(matches!(err, FlowError::Invalid(ValidationError::Missing("Email"))));
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_and_guards() {
        let mut app = signed_in(FakeApi::default());
        assert!(app.navigate(View::Dashboard).is_allowed());

        assert_eq!(app.logout(), View::Login);
        assert!(!app.session().is_logged_in());

        let err = app.dashboard().await.unwrap_err();
        assert!(matches!(err, FlowError::NotLoggedIn));
        assert_eq!(app.view(), View::Login);
        assert!(app.api().calls().is_empty());

        // Logging out again is harmless
        assert_eq!(app.logout(), View::Login);
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_register_creates_profile_after_sign_up() {
        let mut app = app(FakeApi {
            token: Some(TOKEN.to_string()),
            ..Default::default()
        });

        let view = app.register(&registration()).await.unwrap();

        assert_eq!(view, View::Dashboard);
        assert_eq!(app.api().calls(), vec!["register", "create_customer"]);
        assert!(app.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_register_profile_failure_keeps_session() {
        let mut app = app(FakeApi {
            token: Some(TOKEN.to_string()),
            fail_profile: true,
            ..Default::default()
        });

        let err = app.register(&registration()).await.unwrap_err();

        assert!(matches!(err, FlowError::ProfileFailed(_)));
        assert_eq!(
            err.to_string(),
            "Account created but customer profile failed. Contact support."
        );
        assert!(app.session().is_logged_in());
        assert_eq!(app.session().token().as_deref(), Some(TOKEN));
    }

    #[tokio::test]
    async fn test_register_failure_skips_profile() {
        let mut app = app(FakeApi::default());

        let err = app.register(&registration()).await.unwrap_err();

        assert!(matches!(err, FlowError::RegistrationFailed(_)));
        assert_eq!(err.to_string(), "Registration failed. Email may already be in use.");
        assert_eq!(app.api().calls(), vec!["register"]);
        assert!(!app.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_register_validates_before_sending() {
        let mut app = app(FakeApi {
            token: Some(TOKEN.to_string()),
            ..Default::default()
        });
        let mut short = registration();
        short.credentials.password = "short".to_string();

        let err = app.register(&short).await.unwrap_err();
        assert!(matches!(err, FlowError::Invalid(ValidationError::PasswordTooShort)));
        assert!(app.api().calls().is_empty());
    }

    // -------------------------------------------------------------------------
    // Accounts
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_dashboard_loads_customer_then_accounts() {
        let mut app = signed_in(FakeApi::default());

        let dashboard = app.dashboard().await.unwrap();

        assert_eq!(dashboard.customer.email.as_deref(), Some("a@x.com"));
        assert_eq!(dashboard.accounts.len(), 2);
        assert_eq!(app.api().calls(), vec!["customer_by_email", "accounts_by_customer"]);
    }

    #[tokio::test]
    async fn test_dashboard_missing_profile() {
        let mut app = signed_in(FakeApi {
            customer_missing: true,
            ..Default::default()
        });

        let err = app.dashboard().await.unwrap_err();

        assert!(matches!(err, FlowError::ProfileNotFound(_)));
        assert_eq!(err.to_string(), "Could not find your customer profile.");
        assert_eq!(app.api().calls(), vec!["customer_by_email"]);
    }

    #[tokio::test]
    async fn test_dashboard_accounts_failure_is_distinct() {
        let mut app = signed_in(FakeApi {
            fail_accounts: true,
            ..Default::default()
        });

        let err = app.dashboard().await.unwrap_err();
        assert!(matches!(err, FlowError::AccountsUnavailable(_)));
    }

    #[tokio::test]
    async fn test_token_without_email() {
        let session = Session::in_memory();
        session.start("opaque-token").unwrap();
        let mut app = App::new(FakeApi::default(), session);

        let err = app.dashboard().await.unwrap_err();
        assert!(matches!(err, FlowError::UnknownIdentity));
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_token_redirects_to_login() {
        let mut app = signed_in(FakeApi {
            reject_token: true,
            ..Default::default()
        });

        let err = app.dashboard().await.unwrap_err();

        assert!(matches!(err, FlowError::SessionExpired));
        assert_eq!(app.view(), View::Login);
        assert!(!app.session().is_logged_in());
        assert!(!app.navigate(View::Dashboard).is_allowed());
    }

    #[tokio::test]
    async fn test_open_account() {
        let mut app = signed_in(FakeApi::default());
        app.navigate(View::CreateAccount);

        let account = app.open_account("Holiday fund", AccountType::Savings).await.unwrap();

        assert_eq!(account.id, "a-9");
        assert_eq!(app.view(), View::Dashboard);
        let opened = app.api().opened.lock().unwrap().clone().unwrap();
        assert_eq!(opened.name, "Holiday fund");
        assert_eq!(opened.customer_id, "c-1");
        assert_eq!(opened.account_type, AccountType::Savings);
        assert_eq!(opened.balance, "0.00");
    }

    #[tokio::test]
    async fn test_open_account_requires_name() {
        let mut app = signed_in(FakeApi::default());

        let err = app.open_account("  ", AccountType::Checking).await.unwrap_err();
        assert!(matches!(err, FlowError::Invalid(ValidationError::Missing("Account name"))));
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_account_history() {
        let mut app = signed_in(FakeApi::default());

        let history = app.account_history().await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].account.id, "a-1");
        assert_eq!(history[0].payments[0].from_account_id.as_deref(), Some("a-1"));
        assert_eq!(history[1].payments[0].from_account_id.as_deref(), Some("a-2"));
        assert_eq!(
            app.api().calls().iter().filter(|c| **c == "payments_by_account").count(),
            2
        );
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_transfer() {
        let mut app = signed_in(FakeApi::default());

        let payment = app
            .transfer(&NewPayment::transfer("a-1", "a-2", "5.00"))
            .await
            .unwrap();

        assert_eq!(payment.id, "p-1");
        assert_eq!(app.view(), View::Payment);
    }

    #[tokio::test]
    async fn test_transfer_failure_message() {
        let mut app = signed_in(FakeApi {
            fail_payment: true,
            ..Default::default()
        });

        let err = app
            .transfer(&NewPayment::transfer("a-1", "a-2", "5.00"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Payment failed");
    }

    #[tokio::test]
    async fn test_transfer_validation() {
        let mut app = signed_in(FakeApi::default());

        let err = app
            .transfer(&NewPayment::transfer("a-1", "a-1", "5.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Invalid(ValidationError::SameAccount)));
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_transfer_requires_session() {
        let mut app = app(FakeApi::default());

        let err = app
            .transfer(&NewPayment::transfer("a-1", "a-2", "5.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::NotLoggedIn));
        assert_eq!(app.view(), View::Login);
    }

    #[tokio::test]
    async fn test_payments_for_account() {
        let mut app = signed_in(FakeApi::default());

        let payments = app.payments(" a-1 ").await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].from_account_id.as_deref(), Some("a-1"));
    }
}
