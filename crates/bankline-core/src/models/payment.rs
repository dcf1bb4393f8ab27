use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{require, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    #[default]
    Transfer,
    Deposit,
    Withdrawal,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Transfer => write!(f, "Transfer"),
            PaymentType::Deposit => write!(f, "Deposit"),
            PaymentType::Withdrawal => write!(f, "Withdrawal"),
            PaymentType::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transfer" => Ok(PaymentType::Transfer),
            "deposit" => Ok(PaymentType::Deposit),
            "withdrawal" => Ok(PaymentType::Withdrawal),
            other => Err(format!(
                "unknown payment type '{}' (expected transfer, deposit or withdrawal)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Completed => write!(f, "Completed"),
            PaymentStatus::Failed => write!(f, "Failed"),
            PaymentStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    #[serde(rename = "fromAccountId")]
    pub from_account_id: String,
    #[serde(rename = "toAccountId")]
    pub to_account_id: String,
    /// Decimal string, the same representation the backend uses for balances
    pub amount: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub description: Option<String>,
}

impl NewPayment {
    pub fn transfer(from: &str, to: &str, amount: &str) -> Self {
        Self {
            from_account_id: from.trim().to_string(),
            to_account_id: to.trim().to_string(),
            amount: amount.trim().to_string(),
            payment_type: PaymentType::Transfer,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Source account", &self.from_account_id)?;
        require("Destination account", &self.to_account_id)?;
        if self.payment_type == PaymentType::Transfer && self.from_account_id == self.to_account_id {
            return Err(ValidationError::SameAccount);
        }
        validate_amount(&self.amount)
    }
}

/// Accepts `123`, `123.4` and `123.45`; rejects signs, exponents, more than
/// two fraction digits, and zero.
pub fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(ValidationError::Missing("Amount"));
    }

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if whole.is_empty() || !digits(whole) || !digits(fraction) || fraction.len() > 2 {
        return Err(ValidationError::InvalidAmount);
    }
    if amount.contains('.') && fraction.is_empty() {
        return Err(ValidationError::InvalidAmount);
    }
    if whole.chars().chain(fraction.chars()).all(|c| c == '0') {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}

/// Payment record as returned by the payment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "paymentId", default)]
    pub id: String,
    #[serde(rename = "fromAccountId")]
    pub from_account_id: Option<String>,
    #[serde(rename = "toAccountId")]
    pub to_account_id: Option<String>,
    pub amount: Option<String>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(rename = "type", default = "unknown_type")]
    pub payment_type: PaymentType,
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

fn unknown_type() -> PaymentType {
    PaymentType::Unknown
}

impl Payment {
    /// True when money left the given account
    pub fn is_outgoing_from(&self, account_id: &str) -> bool {
        self.from_account_id.as_deref() == Some(account_id)
    }
}
