//! Tests for loading configuration from the environment.

use std::time::Duration;

use hiring_board::config::{Config, ConfigError};
use serial_test::serial;

const VARS: &[&str] = &[
    "GITHUB_TOKEN",
    "GITHUB_GRAPHQL_URL",
    "SEARCH_REPOSITORY",
    "COMMENTS_PER_DISCUSSION",
    "HTTP_TIMEOUT_SECS",
    "REVALIDATE_SECS",
    "HIDE_EMPTY_POSTS",
    "SITE_NAME",
    "WEB_HOST",
    "WEB_PORT",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    std::env::set_var("GITHUB_TOKEN", "ghp_example");

    let config = Config::from_env().unwrap();
    assert_eq!(config.github_token, "ghp_example");
    assert_eq!(config.github_graphql_url, "https://api.github.com/graphql");
    assert_eq!(config.search_repository, "vercel/next.js");
    assert_eq!(config.comments_per_discussion, 50);
    assert_eq!(config.http_timeout, Duration::from_secs(30));
    assert_eq!(config.revalidate, Duration::from_secs(60));
    assert!(!config.hide_empty_posts);
    assert_eq!(config.site_name, "Next.js job board");
    assert_eq!(config.web_host, "0.0.0.0");
    assert_eq!(config.web_port, 8080);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    std::env::set_var("GITHUB_TOKEN", "ghp_example");
    std::env::set_var("SEARCH_REPOSITORY", "rust-lang/rust");
    std::env::set_var("COMMENTS_PER_DISCUSSION", "100");
    std::env::set_var("REVALIDATE_SECS", "300");
    std::env::set_var("HIDE_EMPTY_POSTS", "yes");
    std::env::set_var("WEB_PORT", "3000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.search_repository, "rust-lang/rust");
    assert_eq!(config.comments_per_discussion, 100);
    assert_eq!(config.revalidate, Duration::from_secs(300));
    assert!(config.hide_empty_posts);
    assert_eq!(config.web_port, 3000);

    clear_env();
}

#[test]
#[serial]
fn test_missing_token() {
    clear_env();

    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::MissingEnvVar(ref name)) if name == "GITHUB_TOKEN"
    ));

    std::env::set_var("GITHUB_TOKEN", "");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::MissingEnvVar(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_numbers_and_flags() {
    clear_env();
    std::env::set_var("GITHUB_TOKEN", "ghp_example");

    std::env::set_var("WEB_PORT", "eighty");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::ParseInt { ref name, .. }) if name == "WEB_PORT"
    ));
    std::env::remove_var("WEB_PORT");

    std::env::set_var("HIDE_EMPTY_POSTS", "maybe");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::ParseBool { ref name, .. }) if name == "HIDE_EMPTY_POSTS"
    ));

    clear_env();
}
