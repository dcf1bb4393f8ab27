use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, require_email, require_name, ValidationError};

/// Body of `POST /api/customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub address: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("First name", &self.first_name)?;
        require_name("Last name", &self.last_name)?;
        require("Address", &self.address)?;
        require_email(&self.email)
    }
}

/// Customer profile as returned by the customer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "registerDate", default)]
    pub register_date: Option<NaiveDate>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => self.email.clone().unwrap_or_default(),
        }
    }
}
