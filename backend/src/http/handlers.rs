//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`] for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ApiResponse, HealthResponse, Movie, MovieId, MoviePayload, PaginationQuery, SearchQuery,
};
use super::error::{AppError, INVALID_ID, NOT_FOUND};
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

fn parse_id(raw: &str) -> Result<MovieId, AppError> {
    raw.trim()
        .parse::<i64>()
        .map(MovieId::new)
        .map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let repository = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };
    let movies = state.repository.count().await.unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository,
        movies,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// =============================================================================
// Movie CRUD
// =============================================================================

/// GET /movies?page=&limit=
///
/// List the catalog one page at a time.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> HandlerResult<Vec<Movie>> {
    let query = PaginationQuery::from_pairs(&params);
    let page = services::list_movies(state.repository.as_ref(), query.page_request()).await?;
    Ok(Json(ApiResponse::paginated("Movies found", page)))
}

/// GET /movies/search?title=&description=&artist=&genre=&page=&limit=
///
/// Case-insensitive substring search; a movie matches if any given field matches.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> HandlerResult<Vec<Movie>> {
    let query = SearchQuery::from_pairs(&params);
    let filter = query.filter();
    let page =
        services::search_movies(state.repository.as_ref(), &filter, query.page_request()).await?;
    tracing::debug!(matches = page.count, "search completed");
    Ok(Json(ApiResponse::paginated("Movies found", page)))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Movie> {
    let id = parse_id(&id)?;
    let movie = services::get_movie(state.repository.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(ApiResponse::ok("Movie found", movie)))
}

/// POST /movies
///
/// Create a movie. The identifier is assigned by the catalog; any `id` in the
/// body is ignored.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Movie>>), AppError> {
    let Json(payload) = payload?;
    let movie = services::create_movie(state.repository.as_ref(), payload).await?;
    tracing::info!(id = %movie.id, "movie created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok("Movie created", movie))))
}

/// PUT /movies/{id}
///
/// Replace every field of a movie. A different `id` in the body moves the
/// record to that identifier, unless another movie already holds it.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> HandlerResult<Movie> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let movie = services::update_movie(state.repository.as_ref(), id, payload).await?;
    tracing::info!(id = %id, new_id = %movie.id, "movie updated");
    Ok(Json(ApiResponse::ok("Movie updated", movie)))
}

/// DELETE /movies/{id}
///
/// An identifier that is not a number cannot name any movie, so it is
/// reported as not found.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Movie> {
    let id = parse_id(&id).map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))?;
    let movie = services::delete_movie(state.repository.as_ref(), id).await?;
    tracing::info!(id = %id, "movie deleted");
    Ok(Json(ApiResponse::ok("Movie deleted", movie)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), MovieId::new(12));
        assert_eq!(parse_id(" 3 ").unwrap(), MovieId::new(3));
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
    }
}
