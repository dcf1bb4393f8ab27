//! Command handlers. Each one drives a flow on [`App`] and prints the result.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use bankline_core::models::{Account, Credentials, NewPayment, Payment, Registration};
use bankline_core::utils::{format_amount, format_date, format_optional, format_timestamp, truncate_string};
use bankline_core::{ApiClient, App, Config, SessionState};

use crate::cli::{
    AccountsArgs, Command, LoginArgs, OpenAccountArgs, PayArgs, PaymentsArgs, RegisterArgs,
};

pub const ENV_EMAIL: &str = "BANKLINE_EMAIL";
pub const ENV_PASSWORD: &str = "BANKLINE_PASSWORD";

/// Column widths for the account listing
const NAME_WIDTH: usize = 24;
const ID_WIDTH: usize = 36;

pub struct Ctx {
    pub config: Config,
    pub app: App<ApiClient>,
    pub json: bool,
}

pub async fn run(command: Command, ctx: &mut Ctx) -> Result<()> {
    match command {
        Command::Login(args) => login(args, ctx).await,
        Command::Register(args) => register(args, ctx).await,
        Command::Logout(_) => {
            ctx.app.logout();
            println!("Signed out.");
            Ok(())
        }
        Command::WhoAmI(_) => whoami(ctx),
        Command::Accounts(args) => accounts(args, ctx).await,
        Command::OpenAccount(args) => open_account(args, ctx).await,
        Command::Pay(args) => pay(args, ctx).await,
        Command::Payments(args) => payments(args, ctx).await,
    }
}

// ============================================================================
// Authentication
// ============================================================================

async fn login(args: LoginArgs, ctx: &mut Ctx) -> Result<()> {
    let email = resolve_email(args.email, ctx.config.last_email.as_deref(), env_var)?;
    let password = resolve_password("Password: ")?;

    ctx.app.login(&Credentials::new(email, password)).await?;
    remember_email(ctx);

    println!("Signed in as {}.", ctx.app.session().current_email().unwrap_or_default());
    Ok(())
}

async fn register(args: RegisterArgs, ctx: &mut Ctx) -> Result<()> {
    let email = resolve_email(args.email, None, env_var)?;
    let password = resolve_password("Choose a password: ")?;
    if env_var(ENV_PASSWORD).is_none() {
        let confirm = rpassword::prompt_password("Repeat password: ")?;
        if confirm != password {
            anyhow::bail!("Passwords do not match");
        }
    }

    let registration = Registration {
        credentials: Credentials::new(email, password),
        first_name: args.first_name,
        last_name: args.last_name,
        address: args.address,
        birth_date: args.birth_date,
    };

    let result = ctx.app.register(&registration).await;
    // The sign-in exists even when the profile step failed
    if ctx.app.session().is_logged_in() {
        remember_email(ctx);
    }
    result?;

    println!("Registered and signed in as {}.", registration.credentials.email);
    Ok(())
}

fn remember_email(ctx: &mut Ctx) {
    ctx.config.last_email = ctx.app.session().current_email();
    if let Err(e) = ctx.config.save() {
        warn!(error = %e, "Failed to save config");
    }
}

#[derive(Serialize)]
struct WhoAmI {
    state: &'static str,
    backend: String,
    email: Option<String>,
    role: Option<String>,
    issued_at: Option<i64>,
    expires_at: Option<i64>,
}

fn whoami(ctx: &Ctx) -> Result<()> {
    let session = ctx.app.session();
    let claims = session.claims().unwrap_or_default();
    let info = WhoAmI {
        state: match session.state() {
            SessionState::Authenticated => "authenticated",
            SessionState::Anonymous => "anonymous",
        },
        backend: ctx.app.api().base_url().to_string(),
        email: claims.email,
        role: claims.role,
        issued_at: claims.iat,
        expires_at: claims.exp,
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if info.state == "anonymous" {
        println!("Not signed in ({}).", info.backend);
        return Ok(());
    }
    println!("Email:    {}", format_optional(&info.email, "(unknown)"));
    println!("Role:     {}", format_optional(&info.role, "-"));
    if let Some(iat) = info.issued_at {
        println!("Issued:   {}", format_timestamp(iat));
    }
    if let Some(exp) = info.expires_at {
        println!("Expires:  {}", format_timestamp(exp));
    }
    println!("Backend:  {} ({} store)", info.backend, ctx.config.token_backend);
    Ok(())
}

// ============================================================================
// Accounts
// ============================================================================

async fn accounts(args: AccountsArgs, ctx: &mut Ctx) -> Result<()> {
    if args.history {
        let history = ctx.app.account_history().await?;
        if ctx.json {
            let value: Vec<_> = history
                .iter()
                .map(|h| json!({ "account": h.account, "payments": h.payments }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        if history.is_empty() {
            println!("No accounts yet.");
        }
        for entry in &history {
            print_account(&entry.account);
            print_payments(&entry.account.id, &entry.payments, "    ");
            println!();
        }
        return Ok(());
    }

    let dashboard = ctx.app.dashboard().await?;
    if ctx.json {
        let value = json!({ "customer": dashboard.customer, "accounts": dashboard.accounts });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", dashboard.customer.full_name());
    if dashboard.accounts.is_empty() {
        println!("No accounts yet. Open one with `bankline open-account`.");
    }
    for account in &dashboard.accounts {
        print_account(account);
    }
    Ok(())
}

fn print_account(account: &Account) {
    println!(
        "{:<name$} {:<id$} {:<9} {:<7} {:>14}",
        truncate_string(&account.display_name(), NAME_WIDTH),
        account.id,
        account.account_type.to_string(),
        account.status.to_string(),
        format_amount(account.balance.as_deref().unwrap_or("0")),
        name = NAME_WIDTH,
        id = ID_WIDTH,
    );
}

async fn open_account(args: OpenAccountArgs, ctx: &mut Ctx) -> Result<()> {
    let account = ctx.app.open_account(&args.name, args.account_type).await?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&account)?);
    } else {
        println!("Opened {} ({}).", account.display_name(), account.id);
    }
    Ok(())
}

// ============================================================================
// Payments
// ============================================================================

async fn pay(args: PayArgs, ctx: &mut Ctx) -> Result<()> {
    let mut payment = NewPayment::transfer(&args.from, &args.to, &args.amount)
        .with_description(args.description.unwrap_or_default());
    payment.payment_type = args.payment_type;

    let result = ctx.app.transfer(&payment).await?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} of {} from {} to {}: {}",
            result.payment_type,
            format_amount(result.amount.as_deref().unwrap_or(&payment.amount)),
            payment.from_account_id,
            payment.to_account_id,
            result.status,
        );
    }
    Ok(())
}

async fn payments(args: PaymentsArgs, ctx: &mut Ctx) -> Result<()> {
    let payments = ctx.app.payments(&args.account_id).await?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&payments)?);
    } else {
        print_payments(args.account_id.trim(), &payments, "");
    }
    Ok(())
}

fn print_payments(account_id: &str, payments: &[Payment], indent: &str) {
    if payments.is_empty() {
        println!("{}No payments.", indent);
        return;
    }
    for payment in payments {
        let (sign, other) = if payment.is_outgoing_from(account_id) {
            ("-", &payment.to_account_id)
        } else {
            ("+", &payment.from_account_id)
        };
        let date = payment
            .created_at
            .as_deref()
            .map(format_date)
            .unwrap_or_default();
        println!(
            "{}{:<12} {}{:>13} {:<10} {:<9} {} {}",
            indent,
            date,
            sign,
            format_amount(payment.amount.as_deref().unwrap_or("0")),
            payment.payment_type.to_string(),
            payment.status.to_string(),
            format_optional(other, "-"),
            payment.description.as_deref().unwrap_or(""),
        );
    }
}

// ============================================================================
// Input
// ============================================================================

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Email from the flag, then `BANKLINE_EMAIL`, then an interactive prompt
/// offering the last email used.
fn resolve_email<F>(flag: Option<String>, last: Option<&str>, var: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(email) = flag.or_else(|| var(ENV_EMAIL)) {
        return Ok(email);
    }
    prompt("Email", last)
}

fn resolve_password(label: &str) -> Result<String> {
    match env_var(ENV_PASSWORD) {
        Some(password) => Ok(password),
        None => rpassword::prompt_password(label).context("Failed to read password"),
    }
}

fn prompt(label: &str, default: Option<&str>) -> Result<String> {
    let mut stdout = io::stdout();
    match default {
        Some(default) => write!(stdout, "{} [{}]: ", label, default)?,
        None => write!(stdout, "{}: ", label)?,
    }
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label.to_lowercase()))?;

    let line = line.trim();
    Ok(if line.is_empty() {
        default.unwrap_or_default().to_string()
    } else {
        line.to_string()
    })
}
