//! # Taskboard API Server Library
//!
//! This library provides the HTTP layer of the Taskboard service: a small
//! CRUD API over User and Task records where every task belongs to exactly
//! one user.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
