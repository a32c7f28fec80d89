use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A released album. `rank` is the album's place in its year's Top Ten
/// (1-10) or honorable mentions (11-20); at most one album holds a given
/// rank within a year.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// Four-digit year, stored as text and matched literally.
    pub year: String,
    pub release_date: Option<Date>,
    pub listened: bool,
    pub priority: bool,
    pub original_rating: Option<i32>,
    pub re_rating: Option<i32>,
    pub rank: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::album_artist::Entity")]
    AlbumArtist,
    #[sea_orm(has_many = "super::song::Entity")]
    Song,
    #[sea_orm(has_many = "super::artist_album_ranking_entry::Entity")]
    RankingEntry,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_artist::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_artist::Relation::Album.def().rev())
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl Related<super::artist_album_ranking_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RankingEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
