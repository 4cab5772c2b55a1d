//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// JWT expiration in hours.
    pub jwt_expiration_hours: u64,
    /// Summarization service endpoint. Summaries fail soft when unset.
    pub summarizer_url: Option<String>,
    /// Bearer token for the summarization service.
    pub summarizer_api_key: Option<String>,
    /// Email of an admin account to seed at startup.
    pub admin_email: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("SHEPHERD_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("SHEPHERD_JWT_SECRET is required"))?;

        Ok(Self {
            host: env::var("SHEPHERD_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SHEPHERD_SERVER_PORT")
                .unwrap_or_else(|_| "8710".to_string())
                .parse()
                .unwrap_or(8710),
            jwt_secret,
            jwt_expiration_hours: env::var("SHEPHERD_JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .unwrap_or(24),
            summarizer_url: env::var("SHEPHERD_SUMMARIZER_URL").ok(),
            summarizer_api_key: env::var("SHEPHERD_SUMMARIZER_API_KEY").ok(),
            admin_email: env::var("SHEPHERD_ADMIN_EMAIL").ok(),
            log_level: env::var("SHEPHERD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true if a summarization service is configured.
    pub fn summarizer_configured(&self) -> bool {
        self.summarizer_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_with_secret_set() {
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::set_var("SHEPHERD_JWT_SECRET", "test-secret-long-enough-for-tests");
            env::remove_var("SHEPHERD_SERVER_PORT");
            env::remove_var("SHEPHERD_SUMMARIZER_URL");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8710);
        assert_eq!(config.jwt_expiration_hours, 24);
        assert!(!config.summarizer_configured());
    }
}
