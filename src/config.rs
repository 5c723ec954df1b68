//! Runtime configuration from environment variables
//!
//! All settings have working defaults except the Groq credential. A missing
//! credential does not stop startup; the frontend and topic list stay
//! reachable and only debate requests fail.

use std::env;
use std::path::PathBuf;

use crate::llm::groq::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Default bind host
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
const DEFAULT_PORT: u16 = 8001;

/// Default location of the prebuilt frontend bundle
const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Groq API key; `None` leaves the server up but unable to debate
    pub groq_api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub frontend_dist: PathBuf,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            groq_api_key: env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            frontend_dist: env::var("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FRONTEND_DIST)),
        }
    }

    /// Address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8001,
            groq_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            frontend_dist: PathBuf::from("frontend/dist"),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8001");
    }
}
