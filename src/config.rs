use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // GitHub search
    pub github_token: String,
    pub github_graphql_url: String,
    pub search_repository: String,
    pub comments_per_discussion: u32,
    pub http_timeout: Duration,

    // Board
    pub revalidate: Duration,
    pub hide_empty_posts: bool,
    pub site_name: String,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // GitHub search
            github_token: required_env("GITHUB_TOKEN")?,
            github_graphql_url: env_or_default(
                "GITHUB_GRAPHQL_URL",
                "https://api.github.com/graphql",
            ),
            search_repository: env_or_default("SEARCH_REPOSITORY", "vercel/next.js"),
            comments_per_discussion: parse_env_u32("COMMENTS_PER_DISCUSSION", 50)?,
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),

            // Board
            revalidate: Duration::from_secs(parse_env_u64("REVALIDATE_SECS", 60)?),
            hide_empty_posts: parse_env_bool("HIDE_EMPTY_POSTS", false)?,
            site_name: env_or_default("SITE_NAME", "Next.js job board"),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Configuration with defaults and a dummy token, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            github_token: "test-token".to_string(),
            github_graphql_url: "http://127.0.0.1:9/graphql".to_string(),
            search_repository: "vercel/next.js".to_string(),
            comments_per_discussion: 50,
            http_timeout: Duration::from_secs(5),
            revalidate: Duration::from_secs(60),
            hide_empty_posts: false,
            site_name: "Next.js job board".to_string(),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "GITHUB_TOKEN".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        // GitHub caps connection page sizes at 100.
        if !(1..=100).contains(&self.comments_per_discussion) {
            return Err(ConfigError::InvalidValue {
                name: "COMMENTS_PER_DISCUSSION".to_string(),
                message: "must be between 1 and 100".to_string(),
            });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let repo_parts: Vec<&str> = self.search_repository.split('/').collect();
        if repo_parts.len() != 2 || repo_parts.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::InvalidValue {
                name: "SEARCH_REPOSITORY".to_string(),
                message: format!("must be 'owner/name', got '{}'", self.search_repository),
            });
        }
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}
