use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Deserialize;

use crate::db::entities::{album, track};
use crate::error::Result;

/// Fields accepted when creating an album. `id` is always generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub genre: Option<String>,
    pub picture: Option<String>,
    pub artist: Option<String>,
}

impl NewAlbum {
    fn into_active_model(self) -> album::ActiveModel {
        album::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            genre: Set(self.genre),
            picture: Set(self.picture),
            artist: Set(self.artist),
        }
    }
}

/// Allowlist of columns an update may touch. Anything else in the request
/// body, `id` included, is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlbumChanges {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub picture: Option<String>,
    pub artist: Option<String>,
}

impl AlbumChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.picture.is_none()
            && self.artist.is_none()
    }

    fn into_active_model(self) -> album::ActiveModel {
        let mut active = album::ActiveModel::default();
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(genre) = self.genre {
            active.genre = Set(Some(genre));
        }
        if let Some(picture) = self.picture {
            active.picture = Set(Some(picture));
        }
        if let Some(artist) = self.artist {
            active.artist = Set(Some(artist));
        }
        active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub last_insert_id: Option<i32>,
    pub rows_affected: u64,
}

#[derive(Clone)]
pub struct AlbumRepository {
    db: DatabaseConnection,
}

impl AlbumRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn read_all(&self) -> Result<Vec<album::Model>> {
        Ok(album::Entity::find()
            .order_by_asc(album::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn read_one(&self, id: i32) -> Result<Option<album::Model>> {
        Ok(album::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Tracks joined to their album. Empty when the album has no tracks or
    /// does not exist; callers that care about the difference check the album.
    pub async fn read_tracks_for_album(&self, id: i32) -> Result<Vec<track::Model>> {
        Ok(track::Entity::find()
            .join(JoinType::InnerJoin, track::Relation::Album.def())
            .filter(album::Column::Id.eq(id))
            .order_by_asc(track::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn insert_one(&self, album: NewAlbum) -> Result<InsertOutcome> {
        match album::Entity::insert(album.into_active_model())
            .exec(&self.db)
            .await
        {
            Ok(inserted) => Ok(InsertOutcome {
                last_insert_id: Some(inserted.last_insert_id),
                rows_affected: 1,
            }),
            Err(DbErr::RecordNotInserted) => Ok(InsertOutcome {
                last_insert_id: None,
                rows_affected: 0,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the number of rows matched by `id`. With no allowlisted
    /// changes no UPDATE is issued and the count is just whether the row exists.
    pub async fn edit_one(&self, id: i32, changes: AlbumChanges) -> Result<u64> {
        if changes.is_empty() {
            return Ok(album::Entity::find_by_id(id).count(&self.db).await?);
        }

        let result = album::Entity::update_many()
            .set(changes.into_active_model())
            .filter(album::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn remove_one(&self, id: i32) -> Result<u64> {
        let result = album::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
