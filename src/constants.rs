//! Shared constants used across the application.

/// User agent string sent with GitHub API requests.
pub const USER_AGENT: &str = concat!("hiring-board/", env!("CARGO_PKG_VERSION"));

/// `Cache-Control` value for API responses.
pub const API_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
