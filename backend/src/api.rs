//! Public API surface for the catalog backend.
//!
//! This file consolidates the types exchanged with the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::movie::Movie;
pub use crate::models::movie::MovieDraft;
pub use crate::models::movie::MoviePayload;
pub use crate::models::pagination::Page;
pub use crate::models::pagination::PageRequest;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Movie identifier (catalog primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl MovieId {
    pub fn new(value: i64) -> Self {
        MovieId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        MovieId(value)
    }
}

/// Search criteria for the catalog.
///
/// Each non-empty field is matched case-insensitively as a substring of the
/// corresponding movie field; artists and genres are matched against the
/// list joined with `", "`. A movie matches when any provided field matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchFilter {
    /// Whether `movie` satisfies at least one of the provided criteria.
    pub fn matches(&self, movie: &Movie) -> bool {
        field_contains(&self.title, &movie.title)
            || field_contains(&self.description, &movie.description)
            || field_contains(&self.artist, &movie.joined_artists())
            || field_contains(&self.genre, &movie.joined_genres())
    }

    /// True when no criterion is set, in which case nothing matches.
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.description, &self.artist, &self.genre]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}

fn field_contains(needle: &Option<String>, haystack: &str) -> bool {
    match needle.as_deref() {
        Some(needle) if !needle.is_empty() => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: MovieId::new(2),
            title: "Mission: Impossible - The Final Reckoning".to_string(),
            description: "Our lives are the sum of our choices.".to_string(),
            duration: 169,
            artists: vec!["Tom Cruise".to_string(), "Ving Rhames".to_string()],
            genres: vec!["Action".to_string(), "Thriller".to_string()],
        }
    }

    #[test]
    fn test_movie_id_roundtrip() {
        let id = MovieId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_filter_title_case_insensitive() {
        let filter = SearchFilter {
            title: Some("MISSION".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&movie()));
    }

    #[test]
    fn test_filter_matches_across_joined_list() {
        let filter = SearchFilter {
            artist: Some("cruise, ving".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&movie()));
    }

    #[test]
    fn test_filter_or_semantics() {
        let filter = SearchFilter {
            title: Some("bloodlines".to_string()),
            genre: Some("thrill".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&movie()));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = SearchFilter {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert!(!filter.matches(&movie()));
        assert!(!SearchFilter::default().matches(&movie()));
    }
}
