use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{require, require_name, ValidationError};

/// Opening balance for new accounts
pub const OPENING_BALANCE: &str = "0.00";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    #[default]
    Checking,
    Business,
    Credit,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Checking => write!(f, "Checking"),
            AccountType::Business => write!(f, "Business"),
            AccountType::Credit => write!(f, "Credit"),
            AccountType::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "savings" => Ok(AccountType::Savings),
            "checking" => Ok(AccountType::Checking),
            "business" => Ok(AccountType::Business),
            "credit" => Ok(AccountType::Credit),
            other => Err(format!(
                "unknown account type '{}' (expected savings, checking, business or credit)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Frozen,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Frozen => write!(f, "Frozen"),
            AccountStatus::Closed => write!(f, "Closed"),
            AccountStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Body of `POST /api/accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(rename = "accName")]
    pub name: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub balance: String,
}

impl NewAccount {
    /// A new active account with a zero balance
    pub fn open(name: &str, customer_id: &str, account_type: AccountType) -> Self {
        Self {
            name: name.trim().to_string(),
            customer_id: customer_id.to_string(),
            account_type,
            status: AccountStatus::Active,
            balance: OPENING_BALANCE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Account name", &self.name)?;
        require("Customer", &self.customer_id)
    }
}

/// Account record as returned by the account endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "accountId", default)]
    pub id: String,
    #[serde(rename = "accountName")]
    pub name: Option<String>,
    #[serde(rename = "accountNumber")]
    pub number: Option<String>,
    #[serde(rename = "accountType", default = "unknown_type")]
    pub account_type: AccountType,
    #[serde(rename = "accountBalance")]
    pub balance: Option<String>,
    #[serde(rename = "accountStatus", default)]
    pub status: AccountStatus,
    #[serde(rename = "interestRate")]
    pub interest_rate: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    #[serde(rename = "openedDate")]
    pub opened_date: Option<String>,
    #[serde(rename = "lastUpdate")]
    pub last_update: Option<String>,
}

fn unknown_type() -> AccountType {
    AccountType::Unknown
}

impl Account {
    pub fn display_name(&self) -> String {
        match (self.name.as_deref(), self.number.as_deref()) {
            (Some(name), Some(number)) => format!("{} ({})", name, number),
            (Some(name), None) => name.to_string(),
            (None, Some(number)) => number.to_string(),
            (None, None) => self.id.clone(),
        }
    }
}
