use movie_catalog::api::{MovieId, MoviePayload, PageRequest, SearchFilter};
use movie_catalog::db::repositories::LocalRepository;
use movie_catalog::db::repository::RepositoryError;
use movie_catalog::db::seed::builtin_movies;
use movie_catalog::db::services::{
    create_movie, delete_movie, get_movie, health_check, list_movies, search_movies, update_movie,
};

fn seeded() -> LocalRepository {
    LocalRepository::with_movies(builtin_movies()).unwrap()
}

fn payload(title: &str) -> MoviePayload {
    MoviePayload {
        id: None,
        title: Some(title.to_string()),
        description: Some(format!("{} description", title)),
        duration: Some(110),
        artists: Some(vec!["Cast Member".to_string()]),
        genres: Some(vec!["Comedy".to_string()]),
    }
}

#[tokio::test]
async fn test_health_check() {
    let repo = seeded();
    assert!(health_check(&repo).await.unwrap());
}

#[tokio::test]
async fn test_list_movies_default_page() {
    let repo = seeded();
    let page = list_movies(&repo, PageRequest::default()).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.count, 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
}

#[tokio::test]
async fn test_list_movies_second_page() {
    let repo = seeded();
    for i in 0..5 {
        create_movie(&repo, payload(&format!("extra {}", i)))
            .await
            .unwrap();
    }

    let page = list_movies(&repo, PageRequest::new(2, 3)).await.unwrap();
    let ids: Vec<i64> = page.items.iter().map(|m| m.id.value()).collect();
    assert_eq!(ids, vec![4, 5, 6]);
    assert_eq!(page.count, 7);
}

#[tokio::test]
async fn test_search_title_mission_returns_only_second_movie() {
    let repo = seeded();
    let filter = SearchFilter {
        title: Some("mission".to_string()),
        ..Default::default()
    };
    let page = search_movies(&repo, &filter, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].id, MovieId::new(2));
}

#[tokio::test]
async fn test_search_count_is_match_count() {
    let repo = seeded();
    let filter = SearchFilter {
        description: Some("the".to_string()),
        ..Default::default()
    };
    let page = search_movies(&repo, &filter, PageRequest::new(1, 1))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.count, 2);
}

#[tokio::test]
async fn test_create_missing_duration_is_validation_error() {
    let repo = seeded();
    let mut incomplete = payload("No Duration");
    incomplete.duration = None;

    let err = create_movie(&repo, incomplete).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("create_movie"));

    // Nothing was stored
    let page = list_movies(&repo, PageRequest::default()).await.unwrap();
    assert_eq!(page.count, 2);
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let repo = seeded();
    let created = create_movie(&repo, payload("Third")).await.unwrap();
    assert_eq!(created.id, MovieId::new(3));
    assert_eq!(
        get_movie(&repo, MovieId::new(3)).await.unwrap().unwrap().title,
        "Third"
    );
}

#[tokio::test]
async fn test_update_conflict() {
    let repo = seeded();
    let mut moved = payload("Moved");
    moved.id = Some(MovieId::new(2));

    let err = update_movie(&repo, MovieId::new(1), moved).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));

    let first = get_movie(&repo, MovieId::new(1)).await.unwrap().unwrap();
    let second = get_movie(&repo, MovieId::new(2)).await.unwrap().unwrap();
    assert_eq!(first, builtin_movies()[0]);
    assert_eq!(second, builtin_movies()[1]);
}

#[tokio::test]
async fn test_update_invalid_payload_reports_target() {
    let repo = seeded();
    let mut invalid = payload("Bad");
    invalid.artists = Some(vec![]);

    let err = update_movie(&repo, MovieId::new(1), invalid).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().entity_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let repo = seeded();
    let err = update_movie(&repo, MovieId::new(42), payload("Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_then_lookup() {
    let repo = seeded();
    delete_movie(&repo, MovieId::new(1)).await.unwrap();
    assert!(get_movie(&repo, MovieId::new(1)).await.unwrap().is_none());

    let err = delete_movie(&repo, MovieId::new(1)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("delete_movie"));
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let repo = seeded();
    let err = delete_movie(&repo, MovieId::new(99)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}
