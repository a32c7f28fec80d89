use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::aggregate::ObsessionSummary;
use tracker_reports::model::{AlbumRanking, AlbumRecord};
use tracker_reports::service::{self, ArtistReport};
use uuid::Uuid;

use super::error::{report_error, ApiError};
use super::{page, Page};

#[derive(Debug, Serialize)]
pub struct RankedAlbumRow {
    pub title: String,
    pub year: String,
    pub rank: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AlbumRankingView {
    pub albums: Vec<RankedAlbumRow>,
}

impl From<AlbumRanking> for AlbumRankingView {
    fn from(ranking: AlbumRanking) -> Self {
        Self {
            albums: ranking
                .entries
                .into_iter()
                .map(|e| RankedAlbumRow {
                    title: e.title,
                    year: e.year.to_string(),
                    rank: e.rank,
                    notes: e.notes,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlbumRow {
    pub id: Uuid,
    pub title: String,
    pub year: String,
    pub rank: Option<i32>,
}

impl From<AlbumRecord> for AlbumRow {
    fn from(a: AlbumRecord) -> Self {
        Self {
            id: a.id,
            title: a.title,
            year: a.year.to_string(),
            rank: a.rank,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistAlbums {
    pub charted: Vec<AlbumRow>,
    pub honorable_mentions: Vec<AlbumRow>,
    pub other_albums: Vec<AlbumRow>,
}

#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub artist_name: String,
    pub artist_id: Uuid,
    pub album_ranking: Option<AlbumRankingView>,
    pub albums: ArtistAlbums,
    pub obsessions: ObsessionSummary,
}

fn rows(albums: Vec<AlbumRecord>) -> Vec<AlbumRow> {
    albums.into_iter().map(AlbumRow::from).collect()
}

impl From<ArtistReport> for ArtistPage {
    fn from(report: ArtistReport) -> Self {
        Self {
            artist_name: report.artist.name,
            artist_id: report.artist.id,
            album_ranking: report.album_ranking.map(AlbumRankingView::from),
            albums: ArtistAlbums {
                charted: rows(report.albums.charted),
                honorable_mentions: rows(report.albums.honorable_mention),
                other_albums: rows(report.albums.other),
            },
            obsessions: report.obsessions,
        }
    }
}

/// GET /api/artists/{id}
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Page<ArtistPage>>, ApiError> {
    let paged = service::artist_page(&state.db, &id)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_reports::aggregate::YearSongCount;
    use tracker_reports::model::{ArtistRef, RankedAlbum};
    use tracker_reports::ranking::AlbumBuckets;
    use tracker_reports::Year;

    #[test]
    fn artist_page_shape() {
        let artist = ArtistRef {
            id: Uuid::new_v4(),
            name: "Big Thief".into(),
        };
        let year = Year::parse("2022").unwrap();
        let record = AlbumRecord {
            id: Uuid::new_v4(),
            title: "Dragon New Warm Mountain".into(),
            year: year.clone(),
            listened: true,
            rank: Some(2),
            artists: vec![artist.clone()],
        };
        let report = ArtistReport {
            album_ranking: Some(AlbumRanking {
                id: Uuid::new_v4(),
                artist: artist.clone(),
                published: true,
                entries: vec![RankedAlbum {
                    rank: 1,
                    album_id: record.id,
                    title: record.title.clone(),
                    year: year.clone(),
                    notes: Some("sprawling".into()),
                }],
            }),
            albums: AlbumBuckets {
                charted: vec![record],
                ..Default::default()
            },
            obsessions: ObsessionSummary {
                song_count: 1,
                list_count: 1,
                lists: vec![YearSongCount {
                    year,
                    song_count: 1,
                }],
            },
            artist,
        };

        let json = serde_json::to_value(ArtistPage::from(report)).unwrap();

        assert_eq!(json["artist_name"], "Big Thief");
        assert_eq!(json["album_ranking"]["albums"][0]["notes"], "sprawling");
        assert_eq!(json["albums"]["charted"][0]["rank"], 2);
        assert_eq!(json["albums"]["other_albums"], serde_json::json!([]));
        assert_eq!(json["obsessions"]["lists"][0]["year"], "2022");
    }
}
