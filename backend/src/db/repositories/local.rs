//! In-memory movie repository.
//!
//! The catalog is a `Vec<Movie>` kept in insertion order plus the last
//! identifier handed out. Both live behind a single `RwLock`, and every
//! operation holds the lock for its whole check-then-mutate sequence, so
//! concurrent requests can neither race on the counter nor observe a
//! half-applied update.

use std::collections::HashSet;

use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::api::{Movie, MovieDraft, MovieId, SearchFilter};
use crate::db::repository::{ErrorContext, MovieRepository, RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
struct CatalogState {
    movies: Vec<Movie>,
    /// Highest identifier ever assigned or held. Never decreases.
    last_id: i64,
}

impl CatalogState {
    fn position(&self, id: MovieId) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }
}

/// In-memory implementation of [`MovieRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<CatalogState>,
}

impl LocalRepository {
    /// Create an empty catalog. The first movie created gets identifier 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `movies`, in the given order.
    ///
    /// The identifier counter starts at the largest seeded identifier.
    ///
    /// # Errors
    /// Returns a `ConfigurationError` when an identifier is not positive or
    /// appears more than once.
    pub fn with_movies(movies: Vec<Movie>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if movie.id.value() < 1 {
                return Err(RepositoryError::configuration_with_context(
                    format!("Seed movie has non-positive id {}", movie.id),
                    ErrorContext::new("seed_catalog").with_entity("movie"),
                ));
            }
            if !seen.insert(movie.id) {
                return Err(RepositoryError::configuration_with_context(
                    format!("Seed catalog contains duplicate id {}", movie.id),
                    ErrorContext::new("seed_catalog")
                        .with_entity("movie")
                        .with_entity_id(movie.id),
                ));
            }
        }

        let last_id = movies.iter().map(|m| m.id.value()).max().unwrap_or(0);
        info!("Seeded catalog with {} movies (last id {})", movies.len(), last_id);

        Ok(Self {
            state: RwLock::new(CatalogState { movies, last_id }),
        })
    }

    /// Highest identifier assigned so far.
    pub fn last_id(&self) -> MovieId {
        MovieId::new(self.state.read().last_id)
    }
}

fn not_found(operation: &str, id: MovieId) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("Movie {} not found", id),
        ErrorContext::new(operation)
            .with_entity("movie")
            .with_entity_id(id),
    )
}

#[async_trait]
impl MovieRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_movies(&self) -> RepositoryResult<Vec<Movie>> {
        let state = self.state.read();
        debug!("Listing {} movies", state.movies.len());
        Ok(state.movies.clone())
    }

    async fn get_movie(&self, id: MovieId) -> RepositoryResult<Option<Movie>> {
        let state = self.state.read();
        Ok(state.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn search_movies(&self, filter: &SearchFilter) -> RepositoryResult<Vec<Movie>> {
        if filter.is_empty() {
            debug!("Search without criteria");
            return Ok(Vec::new());
        }
        let state = self.state.read();
        let found: Vec<Movie> = state
            .movies
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        debug!("Search {:?} matched {} of {} movies", filter, found.len(), state.movies.len());
        Ok(found)
    }

    async fn create_movie(&self, draft: MovieDraft) -> RepositoryResult<Movie> {
        let mut state = self.state.write();
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            RepositoryError::InternalError {
                message: "Movie identifier space exhausted".to_string(),
                context: ErrorContext::new("create_movie").with_entity("movie"),
            }
        })?;

        let movie = Movie::from_draft(MovieId::new(next), draft);
        state.last_id = next;
        state.movies.push(movie.clone());

        info!("Created movie {} ({:?})", movie.id, movie.title);
        Ok(movie)
    }

    async fn update_movie(&self, id: MovieId, draft: MovieDraft) -> RepositoryResult<Movie> {
        let mut state = self.state.write();
        let index = state
            .position(id)
            .ok_or_else(|| not_found("update_movie", id))?;

        let new_id = draft.id.unwrap_or(id);
        if new_id != id && state.position(new_id).is_some() {
            warn!("Refusing to move movie {} onto existing id {}", id, new_id);
            return Err(RepositoryError::conflict_with_context(
                format!("Movie with id {} already exists", new_id),
                ErrorContext::new("update_movie")
                    .with_entity("movie")
                    .with_entity_id(id)
                    .with_details(format!("requested_id={}", new_id)),
            ));
        }

        state.movies[index].apply(new_id, draft);
        state.last_id = state.last_id.max(new_id.value());

        let updated = state.movies[index].clone();
        info!("Updated movie {} (now id {})", id, updated.id);
        Ok(updated)
    }

    async fn delete_movie(&self, id: MovieId) -> RepositoryResult<Movie> {
        let mut state = self.state.write();
        let index = state
            .position(id)
            .ok_or_else(|| not_found("delete_movie", id))?;

        let removed = state.movies.remove(index);
        info!("Deleted movie {}", id);
        Ok(removed)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.state.read().movies.len())
    }
}
