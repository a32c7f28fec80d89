//! List resolution: find a published list by kind and key, with its
//! ordered members.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::error::{ReportError, Result};
use crate::model::{AlbumRanking, AlbumRecord, ListKind, ListSummary, SongList};
use crate::ranking::visible_ranking;
use crate::store;
use crate::year::Year;

/// What to resolve. Yearly lists are keyed by year, album rankings by
/// artist id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Yearly(ListKind),
    ArtistAlbumRanking,
}

/// A published Top Ten list and every album of its year. Which of them
/// make the Top Ten is decided by `ranking::partition_albums_by_rank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTenList {
    pub list: ListSummary,
    pub albums: Vec<AlbumRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedList {
    TopTenAlbums(TopTenList),
    Songs(SongList),
    ArtistAlbumRanking(AlbumRanking),
}

pub fn parse_artist_id(key: &str) -> Result<Uuid> {
    Uuid::parse_str(key)
        .map_err(|_| ReportError::InvalidArgument(format!("{key:?} is not a valid artist id")))
}

fn label(kind: ListKind) -> &'static str {
    match kind {
        ListKind::TopTenAlbums => "top ten albums",
        ListKind::Obsessions => "obsessions",
        ListKind::SpotifyTop100 => "spotify top 100",
    }
}

fn missing(kind: ListKind, year: &Year) -> ReportError {
    tracing::debug!(kind = label(kind), %year, "no published list");
    ReportError::NotFound(format!("{} list for {year}", label(kind)))
}

/// Resolve `key` for `list_type`. A malformed key is `InvalidArgument`;
/// an absent or unpublished list is `NotFound`.
pub async fn resolve_list<C: ConnectionTrait>(
    conn: &C,
    list_type: ListType,
    key: &str,
) -> Result<ResolvedList> {
    match list_type {
        ListType::Yearly(ListKind::TopTenAlbums) => {
            let year = Year::parse(key)?;
            resolve_top_ten(conn, &year)
                .await
                .map(ResolvedList::TopTenAlbums)
        }
        ListType::Yearly(kind) => {
            let year = Year::parse(key)?;
            resolve_song_list(conn, kind, &year)
                .await
                .map(ResolvedList::Songs)
        }
        ListType::ArtistAlbumRanking => {
            let artist_id = parse_artist_id(key)?;
            resolve_artist_ranking(conn, artist_id)
                .await
                .map(ResolvedList::ArtistAlbumRanking)
        }
    }
}

pub async fn resolve_top_ten<C: ConnectionTrait>(conn: &C, year: &Year) -> Result<TopTenList> {
    let list = store::find_published_list(conn, ListKind::TopTenAlbums, year)
        .await?
        .ok_or_else(|| missing(ListKind::TopTenAlbums, year))?;
    let albums = store::albums_for_year(conn, year).await?;

    Ok(TopTenList { list, albums })
}

/// Resolve an Obsessions or Spotify Top 100 list with its entries in order.
pub async fn resolve_song_list<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
    year: &Year,
) -> Result<SongList> {
    if kind == ListKind::TopTenAlbums {
        return Err(ReportError::InvalidArgument(
            "top ten albums lists have no song entries".to_string(),
        ));
    }

    let list = store::find_published_list(conn, kind, year)
        .await?
        .ok_or_else(|| missing(kind, year))?;
    let mut lists = store::load_song_lists(conn, vec![list]).await?;

    lists
        .pop()
        .ok_or_else(|| ReportError::NotFound(format!("{} list for {year}", label(kind))))
}

/// The artist's ranking, or `None` if it is missing or unpublished.
pub async fn artist_published_ranking<C: ConnectionTrait>(
    conn: &C,
    artist_id: Uuid,
) -> Result<Option<AlbumRanking>> {
    let Some(artist) = store::find_artist(conn, artist_id).await? else {
        return Ok(None);
    };
    Ok(visible_ranking(store::artist_ranking(conn, &artist).await?))
}

pub async fn resolve_artist_ranking<C: ConnectionTrait>(
    conn: &C,
    artist_id: Uuid,
) -> Result<AlbumRanking> {
    artist_published_ranking(conn, artist_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(%artist_id, "no published album ranking");
            ReportError::NotFound(format!("album ranking for artist {artist_id}"))
        })
}
