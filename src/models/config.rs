use std::time::Duration;

/// Default listening port when PORT is not set.
pub const DEFAULT_PORT: u16 = 3048;

/// Default timeout for fetching the remote image.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Process configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (PORT, default 3048)
    pub port: u16,

    /// Remote image fetch timeout (FETCH_TIMEOUT_SECS, default 10)
    pub fetch_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => match raw.parse() {
                Ok(port) => port,
                Err(e) => {
                    tracing::warn!(value = %raw, %e, "Invalid PORT, using default");
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let fetch_timeout_secs = match lookup("FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.parse() {
                Ok(secs) => secs,
                Err(e) => {
                    tracing::warn!(value = %raw, %e, "Invalid FETCH_TIMEOUT_SECS, using default");
                    DEFAULT_FETCH_TIMEOUT_SECS
                }
            },
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Self {
            port,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}
