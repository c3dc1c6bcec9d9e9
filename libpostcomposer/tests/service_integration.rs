//! Integration tests for ComposerService
//!
//! Tests the service layer as a whole against an on-disk database.

use libpostcomposer::config::{DatabaseConfig, ServerConfig, ShellConfig};
use libpostcomposer::service::ComposerService;
use libpostcomposer::types::NewUser;
use libpostcomposer::{ComposerError, Config, MediaFilter, MediaItem, MediaType};
use tempfile::TempDir;

/// Setup test service with temporary database
async fn setup_test_service() -> (ComposerService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let config = Config {
        database: DatabaseConfig {
            path: db_path.to_str().unwrap().to_string(),
        },
        server: ServerConfig::default(),
        shell: ShellConfig::default(),
        identity: None,
    };

    let service = ComposerService::from_config(&config).await.unwrap();

    (service, temp_dir)
}

#[tokio::test]
async fn test_users_persist_across_service_instances() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("persist.db");
    let config = Config {
        database: DatabaseConfig {
            path: db_path.to_str().unwrap().to_string(),
        },
        ..Config::default_config()
    };

    {
        let service = ComposerService::from_config(&config).await.unwrap();
        service
            .users()
            .create_user(NewUser {
                email: Some("persist@example.com".to_string()),
                ..NewUser::default()
            })
            .await
            .unwrap();
    }

    let service = ComposerService::from_config(&config).await.unwrap();
    let users = service.users().list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "persist@example.com");
}

#[tokio::test]
async fn test_create_then_list_workflow() {
    let (service, _temp_dir) = setup_test_service().await;

    let created = service
        .users()
        .create_user(NewUser {
            email: Some("a@b.com".to_string()),
            name: Some("A".to_string()),
            ..NewUser::default()
        })
        .await
        .unwrap();

    let listed = service.users().list_users().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_duplicate_email_is_a_server_side_failure() {
    let (service, _temp_dir) = setup_test_service().await;
    let input = NewUser {
        email: Some("dup@example.com".to_string()),
        ..NewUser::default()
    };

    service.users().create_user(input.clone()).await.unwrap();
    let err = service.users().create_user(input).await.unwrap_err();

    assert!(matches!(err, ComposerError::Database(_)));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn test_catalog_loaded_from_store_applies_composition_rule() {
    let (service, _temp_dir) = setup_test_service().await;

    for (name, media_type) in [
        ("team-photo.jpg", MediaType::Image),
        ("team-intro.mp4", MediaType::Video),
        ("logo.png", MediaType::Image),
    ] {
        service
            .media()
            .add(MediaItem::new(
                name.to_string(),
                media_type,
                4096,
                format!("https://cdn.example.com/{}", name),
            ))
            .await
            .unwrap();
    }

    let catalog = service.media().load_catalog().await.unwrap();
    assert_eq!(catalog.len(), 3);

    let names = |items: Vec<&MediaItem>| -> Vec<String> {
        items.into_iter().map(|item| item.name.clone()).collect()
    };

    assert_eq!(
        names(catalog.displayed("TEAM", MediaFilter::Image)),
        vec!["team-photo.jpg"]
    );
    assert_eq!(
        names(catalog.displayed("", MediaFilter::Image)),
        vec!["team-photo.jpg", "logo.png"]
    );
}
