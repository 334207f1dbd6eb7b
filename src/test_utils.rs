//! Test utilities for the Album API
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Set,
};

use crate::{
    config::Config,
    db::{
        entities::{album, track},
        run_migrations,
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing.
/// The pool is pinned to one connection: every SQLite in-memory connection
/// is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    run_migrations(&db).await.expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 8000,
        api_prefix: "/api".to_string(),
        database_max_connections: 1,
        database_connect_timeout_secs: 8,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test album in the database
pub async fn create_test_album(db: &DatabaseConnection, title: &str) -> album::Model {
    let album = album::ActiveModel {
        title: Set(title.to_string()),
        genre: Set(Some("Rock".to_string())),
        picture: Set(Some("cover.jpg".to_string())),
        artist: Set(Some("Test Artist".to_string())),
        ..Default::default()
    };

    album.insert(db).await.expect("Failed to insert test album")
}

/// Create a test track attached to `album_id`
pub async fn create_test_track(
    db: &DatabaseConnection,
    album_id: i32,
    title: &str,
) -> track::Model {
    let track = track::ActiveModel {
        title: Set(title.to_string()),
        youtube_url: Set(None),
        id_album: Set(album_id),
        ..Default::default()
    };

    track.insert(db).await.expect("Failed to insert test track")
}

/// Make the store silently skip every insert into `albums`, so an INSERT
/// succeeds with zero affected rows.
pub async fn decline_album_inserts(db: &DatabaseConnection) {
    db.execute_unprepared(
        "CREATE TRIGGER decline_album_inserts BEFORE INSERT ON albums \
         BEGIN SELECT RAISE(IGNORE); END",
    )
    .await
    .expect("Failed to install insert trigger");
}
