//! Repository factory for dependency injection.
//!
//! This module creates repository instances from runtime configuration. The
//! returned `Arc<dyn MovieRepository>` is handed to the HTTP state; nothing
//! in the crate holds a global catalog.

use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{MovieRepository, RepositoryResult};
use super::seed;
use crate::api::Movie;
use crate::config::{CatalogSettings, SeedKind};

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use movie_catalog::config::AppConfig;
/// use movie_catalog::db::RepositoryFactory;
///
/// let config = AppConfig::load()?;
/// let repo = RepositoryFactory::from_config(&config.catalog)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn MovieRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository holding `movies`.
    ///
    /// # Errors
    /// Fails with `ConfigurationError` on duplicate or non-positive identifiers.
    pub fn create_seeded(movies: Vec<Movie>) -> RepositoryResult<Arc<dyn MovieRepository>> {
        let repo = LocalRepository::with_movies(movies)?;
        Ok(Arc::new(repo))
    }

    /// Create a repository according to the `[catalog]` settings.
    ///
    /// A configured `seed_file` wins over `seed`.
    pub fn from_config(settings: &CatalogSettings) -> RepositoryResult<Arc<dyn MovieRepository>> {
        let movies = match (&settings.seed_file, settings.seed) {
            (Some(path), _) => seed::load_movies(path)?,
            (None, SeedKind::Builtin) => seed::builtin_movies(),
            (None, SeedKind::Empty) => Vec::new(),
        };
        Self::create_seeded(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepositoryError;
    use std::io::Write;

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_from_config_builtin() {
        let repo = RepositoryFactory::from_config(&CatalogSettings::default()).unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_from_config_empty() {
        let settings = CatalogSettings {
            seed: SeedKind::Empty,
            seed_file: None,
        };
        let repo = RepositoryFactory::from_config(&settings).unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_from_config_seed_file_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let one = vec![seed::builtin_movies().remove(0)];
        file.write_all(serde_json::to_string(&one).unwrap().as_bytes())
            .unwrap();

        let settings = CatalogSettings {
            seed: SeedKind::Empty,
            seed_file: Some(file.path().to_path_buf()),
        };
        let repo = RepositoryFactory::from_config(&settings).unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[test]
    fn test_create_seeded_rejects_duplicates() {
        let mut movies = seed::builtin_movies();
        movies[1].id = movies[0].id;
        let result = RepositoryFactory::create_seeded(movies);
        assert!(matches!(result, Err(RepositoryError::ConfigurationError { .. })));
    }
}
