//! Hiring board library.
//!
//! Mirrors the monthly "Who's hiring?" discussions of a GitHub repository
//! into per-month job boards: month validity and navigation, comment to
//! job-post extraction, the GitHub search client and the web UI.

pub mod components;
pub mod config;
pub mod constants;
pub mod date;
pub mod github;
pub mod posts;
pub mod web;
