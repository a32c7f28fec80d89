//! Report entry points. Each parses its key, opens one read snapshot, loads
//! the working set, and folds it. Nothing is cached: every call recomputes
//! from the store.

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};
use serde::Serialize;

use crate::aggregate::{
    aggregate_obsessions, aggregate_spotify_trends, artist_obsession_summary, ObsessionStats,
    ObsessionSummary, SpotifyTrends,
};
use crate::error::{ReportError, Result};
use crate::model::{AlbumRanking, ArtistRef, ListKind, ListSummary, SongList};
use crate::ranking::{artist_album_bucket, partition_albums_by_rank, AlbumBuckets, RankPartition};
use crate::resolve::{
    artist_published_ranking, parse_artist_id, resolve_list, resolve_song_list, resolve_top_ten,
    ListType, ResolvedList,
};
use crate::snapshot::begin_read;
use crate::store;
use crate::year::Year;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTenReport {
    pub list: ListSummary,
    #[serde(flatten)]
    pub partition: RankPartition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistReport {
    pub artist: ArtistRef,
    pub album_ranking: Option<AlbumRanking>,
    pub albums: AlbumBuckets,
    pub obsessions: ObsessionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub top_tens: Vec<ListSummary>,
    pub obsessions: Vec<ListSummary>,
    pub spotify_top_100: Vec<ListSummary>,
}

/// A report and the navigation read from the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    pub report: T,
    pub navigation: Navigation,
}

/// Resolve any list kind by its raw key within one snapshot.
pub async fn resolve(
    db: &DatabaseConnection,
    list_type: ListType,
    key: &str,
) -> Result<ResolvedList> {
    let txn = begin_read(db).await?;
    let resolved = resolve_list(&txn, list_type, key).await?;
    txn.commit().await?;
    Ok(resolved)
}

async fn top_ten_in<C: ConnectionTrait>(conn: &C, year: &Year) -> Result<TopTenReport> {
    let resolved = resolve_top_ten(conn, year).await?;
    let partition = partition_albums_by_rank(year, resolved.albums)?;
    tracing::debug!(
        %year,
        top_ten = partition.top_ten.len(),
        honorable_mentions = partition.honorable_mentions.len(),
        "built top ten report"
    );

    Ok(TopTenReport {
        list: resolved.list,
        partition,
    })
}

async fn published_song_lists<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
) -> Result<Vec<SongList>> {
    let lists = store::published_lists(conn, kind).await?;
    store::load_song_lists(conn, lists).await
}

async fn obsession_stats_in<C: ConnectionTrait>(conn: &C) -> Result<ObsessionStats> {
    let lists = published_song_lists(conn, ListKind::Obsessions).await?;
    let stats = aggregate_obsessions(&lists);
    tracing::debug!(
        lists = lists.len(),
        artists = stats.by_song_count.len(),
        "aggregated obsessions"
    );
    Ok(stats)
}

async fn spotify_trends_in<C: ConnectionTrait>(conn: &C) -> Result<SpotifyTrends> {
    let lists = published_song_lists(conn, ListKind::SpotifyTop100).await?;
    let trends = aggregate_spotify_trends(&lists);
    tracing::debug!(years = trends.years.len(), "aggregated spotify trends");
    Ok(trends)
}

async fn artist_report_in<C: ConnectionTrait>(conn: &C, artist_id: Uuid) -> Result<ArtistReport> {
    let artist = store::find_artist(conn, artist_id)
        .await?
        .ok_or_else(|| ReportError::NotFound(format!("artist {artist_id}")))?;
    let album_ranking = artist_published_ranking(conn, artist_id).await?;
    let albums = store::artist_albums(conn, artist_id).await?;
    let top_ten_years = store::published_years(conn, ListKind::TopTenAlbums).await?;
    let obsession_lists = published_song_lists(conn, ListKind::Obsessions).await?;

    Ok(ArtistReport {
        albums: artist_album_bucket(albums, &top_ten_years),
        obsessions: artist_obsession_summary(artist_id, &obsession_lists),
        artist,
        album_ranking,
    })
}

async fn navigation_in<C: ConnectionTrait>(conn: &C) -> Result<Navigation> {
    Ok(Navigation {
        top_tens: store::published_lists(conn, ListKind::TopTenAlbums).await?,
        obsessions: store::published_lists(conn, ListKind::Obsessions).await?,
        spotify_top_100: store::published_lists(conn, ListKind::SpotifyTop100).await?,
    })
}

/// Add the navigation to `report` and release the snapshot.
async fn paged<T>(txn: DatabaseTransaction, report: T) -> Result<Paged<T>> {
    let navigation = navigation_in(&txn).await?;
    txn.commit().await?;
    Ok(Paged { report, navigation })
}

pub async fn top_ten_report(db: &DatabaseConnection, year: &str) -> Result<TopTenReport> {
    Ok(top_ten_page(db, year).await?.report)
}

pub async fn top_ten_page(db: &DatabaseConnection, year: &str) -> Result<Paged<TopTenReport>> {
    let year = Year::parse(year)?;

    let txn = begin_read(db).await?;
    let report = top_ten_in(&txn, &year).await?;
    paged(txn, report).await
}

pub async fn song_list_report(
    db: &DatabaseConnection,
    kind: ListKind,
    year: &str,
) -> Result<SongList> {
    Ok(song_list_page(db, kind, year).await?.report)
}

pub async fn song_list_page(
    db: &DatabaseConnection,
    kind: ListKind,
    year: &str,
) -> Result<Paged<SongList>> {
    let year = Year::parse(year)?;

    let txn = begin_read(db).await?;
    let list = resolve_song_list(&txn, kind, &year).await?;
    paged(txn, list).await
}

pub async fn obsession_stats(db: &DatabaseConnection) -> Result<ObsessionStats> {
    Ok(obsession_stats_page(db).await?.report)
}

pub async fn obsession_stats_page(db: &DatabaseConnection) -> Result<Paged<ObsessionStats>> {
    let txn = begin_read(db).await?;
    let stats = obsession_stats_in(&txn).await?;
    paged(txn, stats).await
}

pub async fn spotify_trends(db: &DatabaseConnection) -> Result<SpotifyTrends> {
    Ok(spotify_trends_page(db).await?.report)
}

pub async fn spotify_trends_page(db: &DatabaseConnection) -> Result<Paged<SpotifyTrends>> {
    let txn = begin_read(db).await?;
    let trends = spotify_trends_in(&txn).await?;
    paged(txn, trends).await
}

pub async fn artist_report(db: &DatabaseConnection, id: &str) -> Result<ArtistReport> {
    Ok(artist_page(db, id).await?.report)
}

pub async fn artist_page(db: &DatabaseConnection, id: &str) -> Result<Paged<ArtistReport>> {
    let artist_id = parse_artist_id(id)?;

    let txn = begin_read(db).await?;
    let report = artist_report_in(&txn, artist_id).await?;
    paged(txn, report).await
}

pub async fn navigation(db: &DatabaseConnection) -> Result<Navigation> {
    let txn = begin_read(db).await?;
    let navigation = navigation_in(&txn).await?;
    txn.commit().await?;
    Ok(navigation)
}

/// The published Top Ten list with the latest year.
pub async fn most_recent_top_ten(db: &DatabaseConnection) -> Result<ListSummary> {
    let txn = begin_read(db).await?;
    let latest = store::latest_published_list(&txn, ListKind::TopTenAlbums).await?;
    txn.commit().await?;

    latest.ok_or_else(|| ReportError::NotFound("no published top ten albums list".to_string()))
}
