use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::album_artist::Entity")]
    AlbumArtist,
    #[sea_orm(has_many = "super::song_artist::Entity")]
    SongArtist,
    #[sea_orm(has_one = "super::artist_album_ranking::Entity")]
    AlbumRanking,
}

impl Related<super::album::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_artist::Relation::Album.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_artist::Relation::Artist.def().rev())
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_artist::Relation::Song.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::song_artist::Relation::Artist.def().rev())
    }
}

impl Related<super::artist_album_ranking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlbumRanking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
