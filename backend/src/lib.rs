//! # Movie Catalog Backend
//!
//! An in-memory movie catalog exposed as a REST API.
//!
//! ## Features
//!
//! - **CRUD**: create, fetch, replace, and delete movies
//! - **Search**: case-insensitive substring search over title, description,
//!   artists, and genres
//! - **Pagination**: page/limit slicing with lenient parameter handling
//! - **HTTP API**: axum endpoints returning a uniform JSON envelope
//!
//! ## Architecture
//!
//! - [`api`]: Public types (identifiers, movie records, search filter)
//! - [`models`]: Movie validation and pagination
//! - [`db`]: Repository pattern, in-memory catalog, service layer
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
