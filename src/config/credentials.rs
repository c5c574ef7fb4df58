use crate::ConfigError;
use std::fmt;

/// Environment variable holding the account email
pub const EMAIL_VAR: &str = "FANTASYDATA_EMAIL";

/// Environment variable holding the account password
pub const PASSWORD_VAR: &str = "FANTASYDATA_PASSWORD";

/// Login credentials for the provider account
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reads credentials from `FANTASYDATA_EMAIL` and `FANTASYDATA_PASSWORD`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through an arbitrary key lookup
    ///
    /// Unset and empty values are both reported as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingCredential(key.to_string()))
        };

        Ok(Self {
            email: read(EMAIL_VAR)?,
            password: read(PASSWORD_VAR)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
