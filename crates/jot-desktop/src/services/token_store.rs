//! API token persistence using the OS keyring.

use jot_core::util::normalize_text_option;
use jot_core::{Error, Result};
use keyring::Entry;

const KEYRING_SERVICE_NAME: &str = "jot";
const KEYRING_TOKEN_USERNAME: &str = "api_token";

/// Bearer token store backed by the OS keyring (`keyring` crate).
///
/// The token is provisioned out of band; the app only ever reads it.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service_name: String,
    username: String,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_TOKEN_USERNAME.to_string(),
        }
    }
}

impl TokenStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    /// Read the stored API token, if one exists.
    pub fn load_token(&self) -> Result<Option<String>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(normalize_text_option(Some(raw))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}
