use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings read from the environment after `.env` loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub contact_submit_delay: Duration,
    pub blog_default_author: String,
    pub max_page_sessions: usize,
    pub page_session_idle: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            contact_submit_delay: Duration::from_millis(2000),
            blog_default_author: "Likhil".to_string(),
            max_page_sessions: 256,
            page_session_idle: Duration::from_secs(30 * 60),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or blank keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: read("HOST").unwrap_or(defaults.host),
            port: parse_number(&read, "PORT")?.unwrap_or(defaults.port),
            contact_submit_delay: parse_number(&read, "CONTACT_SUBMIT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.contact_submit_delay),
            blog_default_author: read("BLOG_DEFAULT_AUTHOR")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.blog_default_author),
            max_page_sessions: parse_number(&read, "MAX_PAGE_SESSIONS")?
                .unwrap_or(defaults.max_page_sessions),
            page_session_idle: parse_number(&read, "PAGE_SESSION_IDLE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.page_session_idle),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: FromStr>(
    read: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    read(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { key, value })
        })
        .transpose()
}
