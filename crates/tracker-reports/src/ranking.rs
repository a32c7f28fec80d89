//! Ranking projection: splitting ranked albums into Top Ten and honorable
//! mentions, per year and per artist.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::error::{ReportError, Result};
use crate::model::{AlbumRanking, AlbumRecord};
use crate::year::Year;

/// Highest rank that still counts as Top Ten
pub const TOP_TEN_CUTOFF: i32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankPartition {
    /// Ranks 1-10, ascending
    pub top_ten: Vec<AlbumRecord>,
    /// Ranks above 10, ascending
    pub honorable_mentions: Vec<AlbumRecord>,
    /// No rank, ordered by title
    pub unranked: Vec<AlbumRecord>,
}

/// Partition the albums of `year` by rank. Albums from other years are
/// ignored.
///
/// Fails with `InvalidArgument` if two albums of the year share a rank,
/// since rank is a competition ranking that is unique within a year.
pub fn partition_albums_by_rank(
    year: &Year,
    albums: impl IntoIterator<Item = AlbumRecord>,
) -> Result<RankPartition> {
    let mut partition = RankPartition::default();
    let mut holders: HashMap<i32, String> = HashMap::new();

    for album in albums.into_iter().filter(|a| &a.year == year) {
        let Some(rank) = album.rank else {
            partition.unranked.push(album);
            continue;
        };
        if let Some(existing) = holders.insert(rank, album.title.clone()) {
            return Err(ReportError::InvalidArgument(format!(
                "rank {rank} in {year} is held by both {existing:?} and {:?}",
                album.title
            )));
        }
        if rank <= TOP_TEN_CUTOFF {
            partition.top_ten.push(album);
        } else {
            partition.honorable_mentions.push(album);
        }
    }

    partition.top_ten.sort_by_key(|a| a.rank);
    partition.honorable_mentions.sort_by_key(|a| a.rank);
    partition.unranked.sort_by(|a, b| a.title.cmp(&b.title));

    Ok(partition)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlbumBuckets {
    /// Ranks 1-10, by (year, rank)
    pub charted: Vec<AlbumRecord>,
    /// Ranks above 10, by (year, rank)
    pub honorable_mention: Vec<AlbumRecord>,
    /// Unranked, by (year, title)
    pub other: Vec<AlbumRecord>,
}

/// Bucket an artist's listened albums, keeping only years that have a
/// published Top Ten list.
pub fn artist_album_bucket(
    albums: impl IntoIterator<Item = AlbumRecord>,
    published_years: &BTreeSet<Year>,
) -> AlbumBuckets {
    let mut buckets = AlbumBuckets::default();

    for album in albums
        .into_iter()
        .filter(|a| a.listened && published_years.contains(&a.year))
    {
        match album.rank {
            Some(rank) if rank <= TOP_TEN_CUTOFF => buckets.charted.push(album),
            Some(_) => buckets.honorable_mention.push(album),
            None => buckets.other.push(album),
        }
    }

    buckets
        .charted
        .sort_by(|a, b| (&a.year, a.rank).cmp(&(&b.year, b.rank)));
    buckets
        .honorable_mention
        .sort_by(|a, b| (&a.year, a.rank).cmp(&(&b.year, b.rank)));
    buckets
        .other
        .sort_by(|a, b| (&a.year, &a.title).cmp(&(&b.year, &b.title)));

    buckets
}

/// The ranking as the public sees it: `None` unless it exists and is
/// published, entries ordered by rank.
pub fn visible_ranking(ranking: Option<AlbumRanking>) -> Option<AlbumRanking> {
    let mut ranking = ranking.filter(|r| r.published)?;
    ranking.entries.sort_by_key(|e| e.rank);
    Some(ranking)
}
