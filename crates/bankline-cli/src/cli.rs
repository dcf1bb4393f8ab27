//! Command line arguments.

use argh::FromArgs;
use chrono::NaiveDate;

use bankline_core::models::{AccountType, PaymentType};

/// Command line client for the bankline retail banking backend
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// print results as JSON
    #[argh(switch)]
    pub json: bool,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout(LogoutArgs),
    WhoAmI(WhoAmIArgs),
    Accounts(AccountsArgs),
    OpenAccount(OpenAccountArgs),
    Pay(PayArgs),
    Payments(PaymentsArgs),
}

/// Sign in and keep the session for later commands
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "login")]
pub struct LoginArgs {
    /// email to sign in with [env BANKLINE_EMAIL]
    #[argh(option, short = 'e')]
    pub email: Option<String>,
}

/// Create a sign-in and customer profile
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "register")]
pub struct RegisterArgs {
    /// email for the new sign-in [env BANKLINE_EMAIL]
    #[argh(option, short = 'e')]
    pub email: Option<String>,

    /// first name
    #[argh(option)]
    pub first_name: String,

    /// last name
    #[argh(option)]
    pub last_name: String,

    /// postal address
    #[argh(option)]
    pub address: String,

    /// date of birth (YYYY-MM-DD)
    #[argh(option)]
    pub birth_date: NaiveDate,
}

/// Forget the stored session
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "logout")]
pub struct LogoutArgs {}

/// Show who is signed in
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "whoami")]
pub struct WhoAmIArgs {}

/// List your accounts
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "accounts")]
pub struct AccountsArgs {
    /// include the payments of each account
    #[argh(switch)]
    pub history: bool,
}

/// Open a new account with a zero balance
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "open-account")]
pub struct OpenAccountArgs {
    /// account name
    #[argh(option, short = 'n')]
    pub name: String,

    /// savings, checking, business or credit
    #[argh(option, long = "type", default = "AccountType::Checking")]
    pub account_type: AccountType,
}

/// Move money between accounts
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "pay")]
pub struct PayArgs {
    /// source account id
    #[argh(option)]
    pub from: String,

    /// destination account id
    #[argh(option)]
    pub to: String,

    /// amount, e.g. 25.50
    #[argh(option)]
    pub amount: String,

    /// transfer, deposit or withdrawal
    #[argh(option, long = "type", default = "PaymentType::Transfer")]
    pub payment_type: PaymentType,

    /// optional note
    #[argh(option, short = 'd')]
    pub description: Option<String>,
}

/// List the payments of one account
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "payments")]
pub struct PaymentsArgs {
    /// account id
    #[argh(positional)]
    pub account_id: String,
}
