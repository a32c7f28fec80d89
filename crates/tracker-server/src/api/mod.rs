//! JSON pages. Each handler runs one report and wraps it, together with the
//! navigation links, into a view model shaped for the front end.

pub mod albums;
pub mod artists;
pub mod error;
pub mod navigation;
pub mod obsessions;
pub mod top100;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::model::{ArtistRef, SongList};
use tracker_reports::service::Paged;
use uuid::Uuid;

use navigation::NavigationResponse;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/navigation", get(navigation::get_navigation))
        .route("/albums/{year}", get(albums::get_top_ten))
        .route("/obsessions/stats", get(obsessions::get_obsession_stats))
        .route("/obsessions/{year}", get(obsessions::get_obsessions))
        .route("/top-100/stats", get(top100::get_spotify_stats))
        .route("/top-100/{year}", get(top100::get_spotify_list))
        .route("/artists/{id}", get(artists::get_artist))
}

/// A page body plus the navigation every page carries.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    #[serde(flatten)]
    pub body: T,
    pub navigation: NavigationResponse,
}

/// Render a report and the navigation read alongside it.
pub fn page<R, T: From<R>>(paged: Paged<R>) -> Json<Page<T>> {
    Json(Page {
        body: T::from(paged.report),
        navigation: paged.navigation.into(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistLink {
    pub id: Uuid,
    pub name: String,
    pub href: String,
}

impl From<&ArtistRef> for ArtistLink {
    fn from(a: &ArtistRef) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            href: format!("/api/artists/{}", a.id),
        }
    }
}

pub fn artist_links(artists: &[ArtistRef]) -> Vec<ArtistLink> {
    artists.iter().map(ArtistLink::from).collect()
}

#[derive(Debug, Serialize)]
pub struct SongRow {
    pub ordering: i32,
    pub title: String,
    pub artists: Vec<ArtistLink>,
}

/// An Obsessions or Spotify Top 100 list page.
#[derive(Debug, Serialize)]
pub struct SongListPage {
    pub title: String,
    pub year: String,
    pub songs: Vec<SongRow>,
}

impl From<SongList> for SongListPage {
    fn from(list: SongList) -> Self {
        Self {
            title: list.list.title,
            year: list.list.year.to_string(),
            songs: list
                .entries
                .into_iter()
                .map(|e| SongRow {
                    ordering: e.ordering,
                    artists: artist_links(&e.artists),
                    title: e.title,
                })
                .collect(),
        }
    }
}
