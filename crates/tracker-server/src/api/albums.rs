use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::model::AlbumRecord;
use tracker_reports::service::{self, TopTenReport};

use super::error::{report_error, ApiError};
use super::{artist_links, page, ArtistLink, Page};

#[derive(Debug, Serialize)]
pub struct TopTenAlbum {
    pub rank: Option<i32>,
    pub title: String,
    pub artists: Vec<ArtistLink>,
}

impl From<AlbumRecord> for TopTenAlbum {
    fn from(a: AlbumRecord) -> Self {
        Self {
            rank: a.rank,
            artists: artist_links(&a.artists),
            title: a.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HonorableMention {
    pub title: String,
    pub artists: Vec<ArtistLink>,
}

#[derive(Debug, Serialize)]
pub struct TopTenPage {
    pub title: String,
    pub year: String,
    pub top_ten: Vec<TopTenAlbum>,
    pub honorable_mentions: Vec<HonorableMention>,
}

impl From<TopTenReport> for TopTenPage {
    fn from(report: TopTenReport) -> Self {
        let partition = report.partition;
        Self {
            title: report.list.title,
            year: report.list.year.to_string(),
            top_ten: partition.top_ten.into_iter().map(TopTenAlbum::from).collect(),
            honorable_mentions: partition
                .honorable_mentions
                .into_iter()
                .map(|a| HonorableMention {
                    artists: artist_links(&a.artists),
                    title: a.title,
                })
                .collect(),
        }
    }
}

/// GET /api/albums/{year}
pub async fn get_top_ten(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Json<Page<TopTenPage>>, ApiError> {
    let paged = service::top_ten_page(&state.db, &year)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_reports::model::{ArtistRef, ListSummary};
    use tracker_reports::ranking::RankPartition;
    use tracker_reports::{ListKind, Year};
    use uuid::Uuid;

    fn album(title: &str, rank: Option<i32>) -> AlbumRecord {
        AlbumRecord {
            id: Uuid::new_v4(),
            title: title.into(),
            year: Year::parse("2020").unwrap(),
            listened: true,
            rank,
            artists: vec![ArtistRef {
                id: Uuid::new_v4(),
                name: "Phoebe Bridgers".into(),
            }],
        }
    }

    #[test]
    fn page_keeps_ranks_for_the_top_ten_only() {
        let report = TopTenReport {
            list: ListSummary {
                id: Uuid::new_v4(),
                kind: ListKind::TopTenAlbums,
                title: "Best of 2020".into(),
                year: Year::parse("2020").unwrap(),
                published: true,
            },
            partition: RankPartition {
                top_ten: vec![album("Punisher", Some(1))],
                honorable_mentions: vec![album("Women in Music Pt. III", Some(11))],
                unranked: vec![album("Untitled", None)],
            },
        };

        let page = TopTenPage::from(report);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["title"], "Best of 2020");
        assert_eq!(json["year"], "2020");
        assert_eq!(json["top_ten"][0]["rank"], 1);
        assert_eq!(json["top_ten"][0]["artists"][0]["name"], "Phoebe Bridgers");
        assert_eq!(json["honorable_mentions"][0]["title"], "Women in Music Pt. III");
        assert!(json["honorable_mentions"][0].get("rank").is_none());
        assert!(json.get("unranked").is_none());
    }
}
