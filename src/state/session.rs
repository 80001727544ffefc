use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, ValidationError};
use crate::storage::KeyValueStore;

/// Shown when no usable name is stored.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// The persisted account record. Its presence is the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
}

/// Session persistence over a [`KeyValueStore`].
/// Credentials are never checked; there is no backend to check them against.
pub struct SessionStore<S> {
    store: S,
    key: String,
    min_password_len: usize,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, key: impl Into<String>, min_password_len: usize) -> Self {
        Self {
            store,
            key: key.into(),
            min_password_len,
        }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// True iff a record exists under the session key, parsable or not.
    pub fn is_logged_in(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.is_some(),
            Err(e) => {
                warn!("Session lookup failed, treating as logged out: {}", e);
                false
            }
        }
    }

    /// The stored record, or None when absent or unparsable.
    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = self.store.get(&self.key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Stored user record is unreadable: {}", e);
                None
            }
        }
    }

    pub fn display_name(&self) -> String {
        self.current_user()
            .map(|user| user.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
    }

    /// Log in with any non-empty credentials; the name comes from the email.
    pub fn login(&self, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        let record = UserRecord {
            email: email.to_string(),
            name: name_from_email(email),
        };
        self.persist(&record)?;
        info!("Logged in as {}", record.name);
        Ok(record)
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserRecord, AppError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        if password.chars().count() < self.min_password_len {
            return Err(ValidationError::PasswordTooShort {
                min: self.min_password_len,
            }
            .into());
        }

        let record = UserRecord {
            email: email.to_string(),
            name: name.to_string(),
        };
        self.persist(&record)?;
        info!("Signed up {}", record.name);
        Ok(record)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.store.remove(&self.key)?;
        info!("Logged out");
        Ok(())
    }

    fn persist(&self, record: &UserRecord) -> Result<(), AppError> {
        let json = serde_json::to_string(record)?;
        self.store.set(&self.key, &json)?;
        debug!("Persisted session record under '{}'", self.key);
        Ok(())
    }
}

/// Local part of the email with its first character upper-cased.
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
