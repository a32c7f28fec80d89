use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::aggregate::ObsessionStats;
use tracker_reports::service;
use tracker_reports::ListKind;
use uuid::Uuid;

use super::error::{report_error, ApiError};
use super::{page, Page, SongListPage};

#[derive(Debug, Serialize)]
pub struct ArtistSongs {
    pub name: String,
    pub id: Uuid,
    pub songs: u64,
}

#[derive(Debug, Serialize)]
pub struct ArtistYears {
    pub name: String,
    pub id: Uuid,
    pub years: u64,
}

#[derive(Debug, Serialize)]
pub struct ObsessionStatsPage {
    pub by_songs: Vec<ArtistSongs>,
    pub by_years: Vec<ArtistYears>,
}

impl From<ObsessionStats> for ObsessionStatsPage {
    fn from(stats: ObsessionStats) -> Self {
        Self {
            by_songs: stats
                .by_song_count
                .into_iter()
                .map(|a| ArtistSongs {
                    name: a.name,
                    id: a.id,
                    songs: a.songs,
                })
                .collect(),
            by_years: stats
                .by_year_count
                .into_iter()
                .map(|a| ArtistYears {
                    name: a.name,
                    id: a.id,
                    years: a.years,
                })
                .collect(),
        }
    }
}

/// GET /api/obsessions/{year}
pub async fn get_obsessions(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Json<Page<SongListPage>>, ApiError> {
    let paged = service::song_list_page(&state.db, ListKind::Obsessions, &year)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}

/// GET /api/obsessions/stats
pub async fn get_obsession_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Page<ObsessionStatsPage>>, ApiError> {
    let paged = service::obsession_stats_page(&state.db)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}
