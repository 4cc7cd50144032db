//! Movie repository trait for catalog operations.
//!
//! This trait defines the storage operations behind the movie API: listing,
//! lookup, search, and the three mutations. Pagination is applied above this
//! layer, in the service functions.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Movie, MovieDraft, MovieId, SearchFilter};

/// Repository trait for movie catalog operations.
///
/// The catalog is an ordered sequence: `list_movies` and `search_movies`
/// return records in insertion order, and `update_movie` keeps a record at
/// its position.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust, and each
/// call must be atomic with respect to every other call.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Check that the repository is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Return every movie in catalog order.
    async fn list_movies(&self) -> RepositoryResult<Vec<Movie>>;

    /// Look up a movie by identifier.
    ///
    /// # Returns
    /// * `Ok(Some(Movie))` - An owned copy of the stored record
    /// * `Ok(None)` - No record has this identifier
    async fn get_movie(&self, id: MovieId) -> RepositoryResult<Option<Movie>>;

    /// Return the movies matching `filter`, in catalog order.
    async fn search_movies(&self, filter: &SearchFilter) -> RepositoryResult<Vec<Movie>>;

    /// Append a new movie under the next identifier.
    ///
    /// Any identifier carried by `draft` is ignored.
    ///
    /// # Returns
    /// * `Ok(Movie)` - The stored record with its assigned identifier
    async fn create_movie(&self, draft: MovieDraft) -> RepositoryResult<Movie>;

    /// Replace every field of the movie identified by `id`.
    ///
    /// When `draft.id` names a different identifier, the record is moved to it.
    ///
    /// # Errors
    /// * `NotFound` - No record has identifier `id`
    /// * `Conflict` - `draft.id` differs from `id` and is held by another record
    async fn update_movie(&self, id: MovieId, draft: MovieDraft) -> RepositoryResult<Movie>;

    /// Remove the movie identified by `id` and return it.
    ///
    /// # Errors
    /// * `NotFound` - No record has identifier `id`
    async fn delete_movie(&self, id: MovieId) -> RepositoryResult<Movie>;

    /// Number of movies in the catalog.
    async fn count(&self) -> RepositoryResult<usize>;
}
