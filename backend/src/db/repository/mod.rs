//! Repository trait definitions.
//!
//! - `error`: error type shared by every repository implementation
//! - `movie`: the movie catalog trait

pub mod error;
pub mod movie;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use movie::MovieRepository;
