//! Application configuration loaded from environment variables.

use std::env;

use chirp_infra::database::DatabaseConfig;

/// Minimum master key length accepted by `Key::derive_from`.
pub const MIN_SESSION_KEY_LEN: usize = 32;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub session: SessionConfig,
}

/// Session cookie settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// Master key material; `None` means an ephemeral key is generated.
    pub key: Option<Vec<u8>>,
    pub cookie_secure: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            session: SessionConfig::from_env(),
        }
    }
}

impl SessionConfig {
    fn from_env() -> Self {
        Self {
            key: env::var("SESSION_KEY").ok().and_then(session_key),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| flag_enabled(&v))
                .unwrap_or(true),
        }
    }
}

fn session_key(raw: String) -> Option<Vec<u8>> {
    if raw.len() < MIN_SESSION_KEY_LEN {
        tracing::warn!(
            "SESSION_KEY is shorter than {} bytes; ignoring it",
            MIN_SESSION_KEY_LEN
        );
        return None;
    }
    Some(raw.into_bytes())
}

fn flag_enabled(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_session_key_is_ignored() {
        assert!(session_key("too-short".to_string()).is_none());

        let raw = "k".repeat(MIN_SESSION_KEY_LEN);
        assert_eq!(session_key(raw.clone()), Some(raw.into_bytes()));
    }

    #[test]
    fn cookie_secure_flag() {
        assert!(flag_enabled("1"));
        assert!(flag_enabled("true"));
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled("FALSE"));
    }

    #[test]
    fn debug_redacts_session_key() {
        let config = SessionConfig {
            key: Some(b"super-secret-master-key-material!".to_vec()),
            cookie_secure: true,
        };

        let printed = format!("{config:?}");
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("super-secret"));
    }
}
