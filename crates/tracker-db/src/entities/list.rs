use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which yearly list a `lists` row is. Every kind shares the same columns;
/// the kind only decides what the list's entries mean.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Governs which albums of the year are presented as its Top Ten
    #[sea_orm(string_value = "top_ten_albums")]
    TopTenAlbums,
    #[sea_orm(string_value = "obsessions")]
    Obsessions,
    #[sea_orm(string_value = "spotify_top_100")]
    SpotifyTop100,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: ListKind,
    pub title: String,
    pub published: bool,
    /// Unique per kind
    pub year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::list_song::Entity")]
    ListSong,
}

impl Related<super::list_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListSong.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
