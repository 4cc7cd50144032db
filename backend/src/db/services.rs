//! Service layer for catalog operations.
//!
//! These functions work with any [`MovieRepository`] and are what the HTTP
//! handlers call. They validate payloads before the repository is touched,
//! apply pagination, and tag every error with the operation that failed.

use super::repository::{MovieRepository, RepositoryResult};
use crate::api::{Movie, MovieId, MoviePayload, Page, PageRequest, SearchFilter};
use crate::models::pagination::paginate;

/// Check that the repository is reachable.
pub async fn health_check(repo: &dyn MovieRepository) -> RepositoryResult<bool> {
    repo.health_check()
        .await
        .map_err(|e| e.with_operation("health_check"))
}

/// One page of the full catalog.
pub async fn list_movies(
    repo: &dyn MovieRepository,
    request: PageRequest,
) -> RepositoryResult<Page<Movie>> {
    let movies = repo
        .list_movies()
        .await
        .map_err(|e| e.with_operation("list_movies"))?;
    Ok(paginate(movies, request))
}

/// One page of the movies matching `filter`.
///
/// `count` in the returned page is the number of matches, not the catalog size.
pub async fn search_movies(
    repo: &dyn MovieRepository,
    filter: &SearchFilter,
    request: PageRequest,
) -> RepositoryResult<Page<Movie>> {
    let movies = repo
        .search_movies(filter)
        .await
        .map_err(|e| e.with_operation("search_movies"))?;
    Ok(paginate(movies, request))
}

/// Fetch a single movie, or `None` if it does not exist.
pub async fn get_movie(repo: &dyn MovieRepository, id: MovieId) -> RepositoryResult<Option<Movie>> {
    repo.get_movie(id)
        .await
        .map_err(|e| e.with_operation("get_movie"))
}

/// Validate `payload` and store it as a new movie.
pub async fn create_movie(
    repo: &dyn MovieRepository,
    payload: MoviePayload,
) -> RepositoryResult<Movie> {
    let draft = payload
        .validate()
        .map_err(|e| e.with_operation("create_movie"))?;
    repo.create_movie(draft)
        .await
        .map_err(|e| e.with_operation("create_movie"))
}

/// Validate `payload` and replace the movie identified by `id` with it.
pub async fn update_movie(
    repo: &dyn MovieRepository,
    id: MovieId,
    payload: MoviePayload,
) -> RepositoryResult<Movie> {
    let draft = payload
        .validate()
        .map_err(|e| e.with_operation("update_movie").with_entity_id(id))?;
    repo.update_movie(id, draft)
        .await
        .map_err(|e| e.with_operation("update_movie"))
}

/// Remove the movie identified by `id`.
pub async fn delete_movie(repo: &dyn MovieRepository, id: MovieId) -> RepositoryResult<Movie> {
    repo.delete_movie(id)
        .await
        .map_err(|e| e.with_operation("delete_movie"))
}
