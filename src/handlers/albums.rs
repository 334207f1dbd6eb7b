use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::{
    db::{
        entities::{album, track},
        repositories::{AlbumChanges, NewAlbum},
    },
    error::{AppError, Result},
    state::AppState,
};

pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<album::Model>>> {
    let albums = state.albums.read_all().await?;
    Ok(Json(albums))
}

pub async fn get_album(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<album::Model>> {
    let Path(id) = id?;

    state
        .albums
        .read_one(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// 404s when the album itself is missing, so an empty array always means
/// "album exists, no tracks".
pub async fn list_album_tracks(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<track::Model>>> {
    let Path(id) = id?;

    if state.albums.read_one(id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let tracks = state.albums.read_tracks_for_album(id).await?;
    Ok(Json(tracks))
}

pub async fn create_album(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewAlbum>, JsonRejection>,
) -> Result<(StatusCode, Json<album::Model>)> {
    let Json(new_album) = payload?;

    let outcome = state.albums.insert_one(new_album).await?;
    let id = match outcome.last_insert_id {
        Some(id) if outcome.rows_affected > 0 => id,
        _ => return Err(AppError::BadRequest("insert affected no rows".to_string())),
    };

    let created = state
        .albums
        .read_one(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("album {} missing right after insert", id)))?;

    tracing::debug!(album_id = created.id, "Album created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_album(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<AlbumChanges>, JsonRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    let Json(changes) = payload?;

    if state.albums.edit_one(id, changes).await? == 0 {
        return Err(AppError::NotFound);
    }

    tracing::debug!(album_id = id, "Album updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_album(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;

    if state.albums.remove_one(id).await? == 0 {
        return Err(AppError::NotFound);
    }

    tracing::debug!(album_id = id, "Album deleted");
    Ok(StatusCode::NO_CONTENT)
}
