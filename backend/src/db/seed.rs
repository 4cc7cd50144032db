//! Catalog contents loaded at startup.

use std::fs;
use std::path::Path;

use crate::api::{Movie, MovieId};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

/// The two movies the catalog starts with when no seed file is configured.
pub fn builtin_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: MovieId::new(1),
            title: "Final Destination: Bloodlines".to_string(),
            description: "Plagued by a recurring violent nightmare, a college student returns home to find the one person who can break the cycle and save her family from the horrific fate that inevitably awaits them.".to_string(),
            duration: 90,
            artists: vec![
                "Kaitlyn Santa Juana".to_string(),
                "Teo Briones".to_string(),
                "Rya Kihlstedt".to_string(),
            ],
            genres: vec!["Horror".to_string(), "Splatter Horror".to_string()],
        },
        Movie {
            id: MovieId::new(2),
            title: "Mission: Impossible - The Final Reckoning".to_string(),
            description: "Our lives are the sum of our choices. Tom Cruise is Ethan Hunt in Mission: Impossible - The Final Reckoning.".to_string(),
            duration: 169,
            artists: vec![
                "Tom Cruise".to_string(),
                "Haylett Atwell".to_string(),
                "Ving Rhames".to_string(),
            ],
            genres: vec![
                "Action".to_string(),
                "Adeventure".to_string(),
                "Thriller".to_string(),
            ],
        },
    ]
}

/// Parse a JSON array of movies and validate every record.
pub fn parse_movies(json: &str) -> RepositoryResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(json).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to parse seed catalog: {}", e),
            ErrorContext::new("load_seed").with_entity("catalog"),
        )
    })?;

    for movie in &movies {
        movie.validate().map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Invalid seed movie: {}", e.message()),
                e.context().clone().with_details("seed"),
            )
        })?;
    }

    Ok(movies)
}

/// Read and validate a seed catalog file.
pub fn load_movies<P: AsRef<Path>>(path: P) -> RepositoryResult<Vec<Movie>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to read seed file {}: {}", path.display(), e),
            ErrorContext::new("load_seed").with_entity("catalog"),
        )
    })?;
    log::info!("Loading seed catalog from {}", path.display());
    parse_movies(&content)
}
