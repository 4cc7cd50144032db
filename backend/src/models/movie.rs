//! Movie records and the payload used to create or replace them.

use serde::{Deserialize, Serialize};

use crate::api::MovieId;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

/// A movie stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: i64,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

impl Movie {
    /// Build a stored record from a validated draft and the identifier it was assigned.
    pub fn from_draft(id: MovieId, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            duration: draft.duration,
            artists: draft.artists,
            genres: draft.genres,
        }
    }

    /// Overwrite every field with the contents of `draft`, keeping `id`.
    ///
    /// The record stays where it is in the catalog; only field values change.
    pub fn apply(&mut self, id: MovieId, draft: MovieDraft) {
        self.id = id;
        self.title = draft.title;
        self.description = draft.description;
        self.duration = draft.duration;
        self.artists = draft.artists;
        self.genres = draft.genres;
    }

    /// Artists joined the way search compares them.
    pub fn joined_artists(&self) -> String {
        self.artists.join(", ")
    }

    /// Genres joined the way search compares them.
    pub fn joined_genres(&self) -> String {
        self.genres.join(", ")
    }

    /// Check that a record loaded from outside the API (e.g. a seed file) is well formed.
    pub fn validate(&self) -> RepositoryResult<()> {
        if self.id.value() < 1 {
            return Err(invalid("id", "must be a positive integer").with_entity_id(self.id));
        }
        MoviePayload::from(self.clone())
            .validate()
            .map(|_| ())
            .map_err(|e| e.with_entity_id(self.id))
    }
}

/// Request body for creating or replacing a movie.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by [`MoviePayload::validate`] with the name of the field, instead
/// of surfacing as a JSON decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub artists: Option<Vec<String>>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// A payload that passed validation. All fields are present and well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    /// Requested identifier. Ignored on create; on replace it may move the record.
    pub id: Option<MovieId>,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

impl MoviePayload {
    /// Validate required fields and convert into a [`MovieDraft`].
    ///
    /// # Errors
    /// Returns a `ValidationError` naming the first offending field when:
    /// - `title` or `description` is missing or empty
    /// - `duration` is missing or less than 1
    /// - `artists` or `genres` is missing or empty
    /// - `id` is present but not positive
    pub fn validate(self) -> RepositoryResult<MovieDraft> {
        if let Some(id) = self.id {
            if id.value() < 1 {
                return Err(invalid("id", "must be a positive integer"));
            }
        }

        let title = required_text("title", self.title)?;
        let description = required_text("description", self.description)?;

        let duration = self.duration.ok_or_else(|| invalid("duration", "is required"))?;
        if duration < 1 {
            return Err(invalid("duration", "must be at least 1 minute"));
        }

        let artists = required_list("artists", self.artists)?;
        let genres = required_list("genres", self.genres)?;

        Ok(MovieDraft {
            id: self.id,
            title,
            description,
            duration,
            artists,
            genres,
        })
    }
}

impl From<Movie> for MoviePayload {
    fn from(movie: Movie) -> Self {
        Self {
            id: Some(movie.id),
            title: Some(movie.title),
            description: Some(movie.description),
            duration: Some(movie.duration),
            artists: Some(movie.artists),
            genres: Some(movie.genres),
        }
    }
}

fn invalid(field: &str, reason: &str) -> RepositoryError {
    RepositoryError::validation_with_context(
        format!("field '{}' {}", field, reason),
        ErrorContext::default().with_entity("movie").with_details(field),
    )
}

fn required_text(field: &str, value: Option<String>) -> RepositoryResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        Some(_) => Err(invalid(field, "must not be empty")),
        None => Err(invalid(field, "is required")),
    }
}

fn required_list(field: &str, value: Option<Vec<String>>) -> RepositoryResult<Vec<String>> {
    match value {
        Some(list) if !list.is_empty() => Ok(list),
        Some(_) => Err(invalid(field, "must contain at least one entry")),
        None => Err(invalid(field, "is required")),
    }
}
