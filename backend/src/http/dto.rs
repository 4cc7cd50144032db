//! Data Transfer Objects for the HTTP API.
//!
//! Every response is wrapped in [`ApiResponse`]:
//! `{message, success, data?, page?, limit?, count?}`.

use serde::{Deserialize, Serialize};

pub use crate::api::{Movie, MovieId, MoviePayload, Page, PageRequest, SearchFilter};

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable summary of the outcome
    pub message: String,
    /// Whether the request succeeded
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Detail for failed requests (e.g. which field was invalid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: Some(data),
            page: None,
            limit: None,
            count: None,
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful response carrying one page of results.
    pub fn paginated(message: impl Into<String>, page: Page<T>) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: Some(page.items),
            page: Some(page.page),
            limit: Some(page.limit),
            count: Some(page.count),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Failed response.
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            data: None,
            page: None,
            limit: None,
            count: None,
            error,
        }
    }
}

/// Query parameters for the list endpoint.
///
/// Values are kept as text: a non-numeric `page` or `limit` falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PaginationQuery {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            limit: first_value(pairs, "limit"),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl SearchQuery {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            title: first_value(pairs, "title"),
            description: first_value(pairs, "description"),
            artist: first_value(pairs, "artist"),
            genre: first_value(pairs, "genre"),
            page: first_value(pairs, "page"),
            limit: first_value(pairs, "limit"),
        }
    }

    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            title: self.title.clone(),
            description: self.description.clone(),
            artist: self.artist.clone(),
            genre: self.genre.clone(),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Catalog repository status (`ok` when it answers its health check)
    pub repository: String,
    /// Number of movies currently in the catalog
    pub movies: usize,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_envelope_shape() {
        let page = Page {
            items: vec![1, 2],
            page: 1,
            limit: 2,
            count: 5,
        };
        let value = serde_json::to_value(ApiResponse::paginated("Movies found", page)).unwrap();
        assert_eq!(value["message"], "Movies found");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert_eq!(value["count"], 5);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::failure("Movie not found", None)).unwrap();
        assert_eq!(value, serde_json::json!({"message": "Movie not found", "success": false}));
    }

    #[test]
    fn test_search_query_to_filter() {
        let query = SearchQuery {
            genre: Some("horror".to_string()),
            limit: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(query.filter().genre.as_deref(), Some("horror"));
        assert_eq!(query.page_request(), PageRequest::default());
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let query = SearchQuery::from_pairs(&pairs(&[
            ("title", "mission"),
            ("page", "2"),
            ("title", "destination"),
            ("page", "5"),
            ("unknown", "x"),
        ]));
        assert_eq!(query.title.as_deref(), Some("mission"));
        assert_eq!(query.page.as_deref(), Some("2"));
        assert!(query.genre.is_none());

        let query = PaginationQuery::from_pairs(&pairs(&[("limit", "3"), ("limit", "abc")]));
        assert_eq!(query.page_request(), PageRequest::new(1, 3));
    }
}
