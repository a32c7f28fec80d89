use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracker_db::AppState;
use tracker_reports::model::ListSummary;
use tracker_reports::service::{self, Navigation};

use super::error::{report_error, ApiError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub year: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationResponse {
    pub top_tens: Vec<NavLink>,
    pub obsessions: Vec<NavLink>,
    pub spotify_top_100: Vec<NavLink>,
}

fn year_links(lists: &[ListSummary], prefix: &str) -> Vec<NavLink> {
    lists
        .iter()
        .map(|l| NavLink {
            title: l.title.clone(),
            year: l.year.to_string(),
            href: format!("{prefix}/{}", l.year),
        })
        .collect()
}

fn with_stats(mut links: Vec<NavLink>, prefix: &str, title: &str) -> Vec<NavLink> {
    links.push(NavLink {
        title: title.to_string(),
        year: "stats".to_string(),
        href: format!("{prefix}/stats"),
    });
    links
}

impl From<Navigation> for NavigationResponse {
    fn from(nav: Navigation) -> Self {
        Self {
            top_tens: year_links(&nav.top_tens, "/api/albums"),
            obsessions: with_stats(
                year_links(&nav.obsessions, "/api/obsessions"),
                "/api/obsessions",
                "Obsession Stats",
            ),
            spotify_top_100: with_stats(
                year_links(&nav.spotify_top_100, "/api/top-100"),
                "/api/top-100",
                "Spotify Top 100 Stats",
            ),
        }
    }
}

/// GET /api/navigation
pub async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let nav = service::navigation(&state.db).await.map_err(report_error)?;
    Ok(Json(nav.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_reports::{ListKind, Year};
    use uuid::Uuid;

    fn summary(kind: ListKind, year: &str) -> ListSummary {
        ListSummary {
            id: Uuid::new_v4(),
            kind,
            title: format!("{year} list"),
            year: Year::parse(year).unwrap(),
            published: true,
        }
    }

    #[test]
    fn stats_links_close_song_list_sections() {
        let nav = Navigation {
            top_tens: vec![
                summary(ListKind::TopTenAlbums, "2019"),
                summary(ListKind::TopTenAlbums, "2020"),
            ],
            obsessions: vec![summary(ListKind::Obsessions, "2021")],
            spotify_top_100: vec![],
        };
        let response = NavigationResponse::from(nav);

        let hrefs: Vec<&str> = response.top_tens.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/api/albums/2019", "/api/albums/2020"]);

        let obsessions: Vec<(&str, &str, &str)> = response
            .obsessions
            .iter()
            .map(|l| (l.title.as_str(), l.year.as_str(), l.href.as_str()))
            .collect();
        assert_eq!(
            obsessions,
            [
                ("2021 list", "2021", "/api/obsessions/2021"),
                ("Obsession Stats", "stats", "/api/obsessions/stats"),
            ]
        );

        // The stats link stays even with no published lists
        assert_eq!(
            response.spotify_top_100,
            [NavLink {
                title: "Spotify Top 100 Stats".into(),
                year: "stats".into(),
                href: "/api/top-100/stats".into(),
            }]
        );
    }
}
