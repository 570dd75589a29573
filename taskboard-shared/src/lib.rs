//! # Taskboard Shared Library
//!
//! This crate contains the data layer used by the Taskboard API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and schema bootstrap
//! - `models`: Database models and their CRUD operations
//! - `slug`: URL-safe slug derivation for usernames

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
