use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::db::repositories::AlbumRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub albums: AlbumRepository,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            albums: AlbumRepository::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}
