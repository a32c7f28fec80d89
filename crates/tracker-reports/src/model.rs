//! Working-set types: the slice of the store a report needs, already
//! materialised in memory. Reports fold over these; they never see entities.

use serde::Serialize;
use uuid::Uuid;

pub use tracker_db::entities::list::ListKind;

use crate::year::Year;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtistRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRecord {
    pub id: Uuid,
    pub title: String,
    pub year: Year,
    pub listened: bool,
    pub rank: Option<i32>,
    /// Sorted by name
    pub artists: Vec<ArtistRef>,
}

/// Header of a yearly list, without its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub id: Uuid,
    pub kind: ListKind,
    pub title: String,
    pub year: Year,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongEntry {
    pub ordering: i32,
    pub song_id: Uuid,
    pub title: String,
    /// Sorted by name; may be empty
    pub artists: Vec<ArtistRef>,
}

/// An Obsessions or Spotify Top 100 list with its entries in `ordering`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongList {
    #[serde(flatten)]
    pub list: ListSummary,
    pub entries: Vec<SongEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAlbum {
    pub rank: i32,
    pub album_id: Uuid,
    pub title: String,
    pub year: Year,
    pub notes: Option<String>,
}

/// An artist's curated album ranking, entries ordered by `rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRanking {
    pub id: Uuid,
    pub artist: ArtistRef,
    pub published: bool,
    pub entries: Vec<RankedAlbum>,
}
