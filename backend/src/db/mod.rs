//! Database module for catalog storage.
//!
//! This module provides abstractions for catalog operations via the Repository
//! pattern, so the storage backend can be swapped without touching the HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Payload validation                                   │
//! │  - Pagination                                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use movie_catalog::db::{services, RepositoryFactory};
//! use movie_catalog::api::PageRequest;
//!
//! let repo = RepositoryFactory::create_local();
//! let page = services::list_movies(repo.as_ref(), PageRequest::default()).await?;
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

// ==================== Service Layer ====================

pub use services::{
    create_movie, delete_movie, get_movie, health_check, list_movies, search_movies, update_movie,
};

// ==================== Repository Pattern Exports ====================

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, MovieRepository, RepositoryError, RepositoryResult};
