use keyring::Entry;
use tracing::{debug, warn};

use super::store::{StoreError, TokenStore};

const SERVICE_NAME: &str = "bankline";

/// Token slot kept in the OS keychain, one entry per backend origin.
pub struct KeyringTokenStore {
    origin: String,
}

impl KeyringTokenStore {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    fn entry(&self) -> Result<Entry, StoreError> {
        Ok(Entry::new(SERVICE_NAME, &self.origin)?)
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Option<String> {
        let result = self.entry().and_then(|entry| Ok(entry.get_password()?));
        match result {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(StoreError::Keyring(keyring::Error::NoEntry)) => None,
            Err(e) => {
                warn!(error = %e, origin = %self.origin, "Failed to read token from keychain");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.entry()?.set_password(token)?;
        debug!(origin = %self.origin, "Session token stored in keychain");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
