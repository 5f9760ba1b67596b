use serde::Deserialize;

/// Configuration for a `PostgresLockStore`.
///
/// The recognized credential options override whatever the DSN embeds,
/// so secrets can live outside the connection string.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    /// Connection string, e.g. `postgres://host:5432/app`.
    pub dsn: String,

    /// Connect identity; overrides the DSN user when set.
    #[serde(default)]
    pub db_username: Option<String>,

    /// Connect secret; overrides the DSN password when set.
    #[serde(default)]
    pub db_password: Option<String>,
}

impl PostgresConfig {
    /// Create a configuration from a DSN with no credential overrides.
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            db_username: None,
            db_password: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.db_username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.db_password = Some(password.into());
        self
    }
}
