//! Aggregation engine: statistics computed over published song lists.
//!
//! Every function here is a pure fold over lists that were already loaded.
//! Lists with `published == false` never contribute, even when passed in.

mod obsessions;
mod spotify;

pub use obsessions::{
    aggregate_obsessions, artist_obsession_summary, ArtistSongCount, ArtistYearCount,
    ObsessionStats, ObsessionSummary, YearSongCount,
};
pub use spotify::{aggregate_spotify_trends, ArtistTrend, SpotifyTrends, YearTrend, YearsClub};

use std::cmp::Ordering;
use uuid::Uuid;

use crate::model::SongList;

fn published(lists: &[SongList]) -> impl Iterator<Item = &SongList> {
    lists.iter().filter(|l| l.list.published)
}

/// Count descending, then name ascending. The id keeps artists who share a
/// name in a stable order.
fn by_count_then_name<N: Ord>(a: (N, &str, Uuid), b: (N, &str, Uuid)) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.cmp(b.1))
        .then_with(|| a.2.cmp(&b.2))
}
