pub mod albums;
pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .route("/albums/:id/tracks", get(albums::list_album_tracks))
}
