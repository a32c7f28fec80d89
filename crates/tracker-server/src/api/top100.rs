use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::aggregate::{ArtistTrend, SpotifyTrends};
use tracker_reports::service;
use tracker_reports::ListKind;

use super::error::{report_error, ApiError};
use super::{page, ArtistLink, Page, SongListPage};

#[derive(Debug, Serialize)]
pub struct YearData {
    pub year: String,
    pub is_first_year: bool,
    pub total_artists: usize,
    pub artists: Vec<ArtistTrend>,
}

#[derive(Debug, Serialize)]
pub struct YearsGroup {
    pub num_years: usize,
    pub artists: Vec<ArtistLink>,
}

#[derive(Debug, Serialize)]
pub struct SpotifyStatsPage {
    pub years_data: Vec<YearData>,
    pub years_groups: Vec<YearsGroup>,
}

impl From<SpotifyTrends> for SpotifyStatsPage {
    fn from(trends: SpotifyTrends) -> Self {
        Self {
            years_data: trends
                .years
                .into_iter()
                .map(|y| YearData {
                    year: y.year.to_string(),
                    is_first_year: y.is_first_year,
                    total_artists: y.total_artists,
                    artists: y.artists,
                })
                .collect(),
            years_groups: trends
                .years_clubs
                .into_iter()
                .map(|c| YearsGroup {
                    num_years: c.num_years,
                    artists: c.artists.iter().map(ArtistLink::from).collect(),
                })
                .collect(),
        }
    }
}

/// GET /api/top-100/{year}
pub async fn get_spotify_list(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Json<Page<SongListPage>>, ApiError> {
    let paged = service::song_list_page(&state.db, ListKind::SpotifyTop100, &year)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}

/// GET /api/top-100/stats
pub async fn get_spotify_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Page<SpotifyStatsPage>>, ApiError> {
    let paged = service::spotify_trends_page(&state.db)
        .await
        .map_err(report_error)?;
    Ok(page(paged))
}
