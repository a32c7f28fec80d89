use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use uuid::Uuid;

use super::{by_count_then_name, published};
use crate::model::{ArtistRef, SongList};
use crate::year::Year;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistTrend {
    pub name: String,
    pub id: Uuid,
    pub current_count: u64,
    /// Count in the preceding processed year, 0 if absent there
    pub previous_count: u64,
    /// `current_count - previous_count`; absent for the first year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTrend {
    pub year: Year,
    pub is_first_year: bool,
    /// Distinct artists credited on this year's list
    pub total_artists: usize,
    pub artists: Vec<ArtistTrend>,
}

/// Artists that appear in exactly `num_years` of the published lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearsClub {
    pub num_years: usize,
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpotifyTrends {
    pub years: Vec<YearTrend>,
    pub years_clubs: Vec<YearsClub>,
}

/// Year-over-year artist counts across the published Spotify Top 100 lists.
///
/// Lists are processed in ascending year. An artist credited on three songs
/// of one list counts three for that year. Clubs are emitted for every
/// year count from 2 to the number of published lists, empty or not.
pub fn aggregate_spotify_trends(lists: &[SongList]) -> SpotifyTrends {
    let mut ordered: Vec<&SongList> = published(lists).collect();
    ordered.sort_by(|a, b| a.list.year.cmp(&b.list.year));

    let mut years = Vec::with_capacity(ordered.len());
    let mut previous: HashMap<Uuid, u64> = HashMap::new();
    let mut appearances: HashMap<Uuid, (&str, BTreeSet<&Year>)> = HashMap::new();

    for (index, list) in ordered.iter().copied().enumerate() {
        let mut counts: HashMap<Uuid, (&str, u64)> = HashMap::new();
        for entry in &list.entries {
            for artist in &entry.artists {
                counts.entry(artist.id).or_insert((artist.name.as_str(), 0)).1 += 1;
                appearances
                    .entry(artist.id)
                    .or_insert_with(|| (artist.name.as_str(), BTreeSet::new()))
                    .1
                    .insert(&list.list.year);
            }
        }

        let is_first_year = index == 0;
        let mut artists: Vec<ArtistTrend> = counts
            .iter()
            .map(|(id, (name, current_count))| {
                let previous_count = previous.get(id).copied().unwrap_or(0);
                ArtistTrend {
                    name: name.to_string(),
                    id: *id,
                    current_count: *current_count,
                    previous_count,
                    change: (!is_first_year)
                        .then(|| *current_count as i64 - previous_count as i64),
                }
            })
            .collect();
        artists.sort_by(|a, b| {
            by_count_then_name(
                (a.current_count, a.name.as_str(), a.id),
                (b.current_count, b.name.as_str(), b.id),
            )
        });

        years.push(YearTrend {
            year: list.list.year.clone(),
            is_first_year,
            total_artists: counts.len(),
            artists,
        });

        previous = counts
            .into_iter()
            .map(|(id, (_, count))| (id, count))
            .collect();
    }

    SpotifyTrends {
        years,
        years_clubs: years_clubs(appearances, ordered.len()),
    }
}

fn years_clubs(
    appearances: HashMap<Uuid, (&str, BTreeSet<&Year>)>,
    total_lists: usize,
) -> Vec<YearsClub> {
    let mut clubs: BTreeMap<usize, Vec<ArtistRef>> =
        (2..=total_lists).map(|n| (n, Vec::new())).collect();

    // One-year artists have no club
    for (id, (name, years)) in appearances {
        if let Some(club) = clubs.get_mut(&years.len()) {
            club.push(ArtistRef {
                id,
                name: name.to_string(),
            });
        }
    }

    clubs
        .into_iter()
        .map(|(num_years, mut artists)| {
            artists.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
            YearsClub { num_years, artists }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{artist, list, song};
    use crate::model::{ListKind::SpotifyTop100, SongEntry};

    fn songs_by(artist: &ArtistRef, n: usize) -> Vec<SongEntry> {
        (0..n)
            .map(|i| song(&format!("{} #{i}", artist.name), &[artist]))
            .collect()
    }

    fn trend<'a>(trends: &'a SpotifyTrends, year: &str, artist: &ArtistRef) -> &'a ArtistTrend {
        trends
            .years
            .iter()
            .find(|y| y.year.as_str() == year)
            .and_then(|y| y.artists.iter().find(|a| a.id == artist.id))
            .unwrap()
    }

    #[test]
    fn consecutive_years_report_change() {
        let x = artist("X");
        let y1 = songs_by(&x, 3);
        let y2 = songs_by(&x, 5);
        let lists = vec![
            list(SpotifyTop100, "2019", true, &y1.iter().collect::<Vec<_>>()),
            list(SpotifyTop100, "2020", true, &y2.iter().collect::<Vec<_>>()),
        ];

        let trends = aggregate_spotify_trends(&lists);

        let first = trend(&trends, "2019", &x);
        assert_eq!(first.current_count, 3);
        assert_eq!(first.previous_count, 0);
        assert_eq!(first.change, None);

        let second = trend(&trends, "2020", &x);
        assert_eq!(second.current_count, 5);
        assert_eq!(second.previous_count, 3);
        assert_eq!(second.change, Some(2));
    }

    #[test]
    fn processes_years_in_ascending_order() {
        let x = artist("X");
        let a = song("A", &[&x]);
        let lists = vec![
            list(SpotifyTop100, "2022", true, &[&a]),
            list(SpotifyTop100, "2020", true, &[&a]),
            list(SpotifyTop100, "2021", true, &[&a]),
        ];

        let trends = aggregate_spotify_trends(&lists);
        let years: Vec<&str> = trends.years.iter().map(|y| y.year.as_str()).collect();
        assert_eq!(years, ["2020", "2021", "2022"]);
        assert!(trends.years[0].is_first_year);
        assert!(!trends.years[1].is_first_year);
    }

    #[test]
    fn previous_count_only_looks_one_processed_year_back() {
        let x = artist("X");
        let filler = artist("Filler");
        let two = songs_by(&x, 2);
        let gap = song("gap", &[&filler]);
        let one = song("back", &[&x]);
        let lists = vec![
            list(SpotifyTop100, "2019", true, &two.iter().collect::<Vec<_>>()),
            list(SpotifyTop100, "2020", true, &[&gap]),
            list(SpotifyTop100, "2021", true, &[&one]),
        ];

        let trends = aggregate_spotify_trends(&lists);
        let back = trend(&trends, "2021", &x);
        assert_eq!(back.previous_count, 0);
        assert_eq!(back.change, Some(1));

        // 2020 lists only artists present in 2020
        assert_eq!(trends.years[1].artists.len(), 1);
        assert_eq!(trends.years[1].total_artists, 1);
    }

    #[test]
    fn unpublished_years_are_skipped_entirely() {
        let x = artist("X");
        let three = songs_by(&x, 3);
        let one = song("one", &[&x]);
        let lists = vec![
            list(SpotifyTop100, "2019", true, &[&one]),
            list(SpotifyTop100, "2020", false, &three.iter().collect::<Vec<_>>()),
            list(SpotifyTop100, "2021", true, &[&one]),
        ];

        let trends = aggregate_spotify_trends(&lists);
        assert_eq!(trends.years.len(), 2);
        let latest = trend(&trends, "2021", &x);
        assert_eq!(latest.previous_count, 1);
        assert_eq!(latest.change, Some(0));
        assert_eq!(trends.years_clubs.len(), 1);
        assert_eq!(trends.years_clubs[0].num_years, 2);
    }

    #[test]
    fn artists_sorted_by_count_then_name() {
        let b = artist("B");
        let a = artist("A");
        let c = artist("C");
        let mut entries = songs_by(&c, 2);
        entries.extend(songs_by(&b, 1));
        entries.extend(songs_by(&a, 1));
        let lists = vec![list(SpotifyTop100, "2020", true, &entries.iter().collect::<Vec<_>>())];

        let trends = aggregate_spotify_trends(&lists);
        let names: Vec<&str> = trends.years[0]
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(trends.years[0].total_artists, 3);
    }

    #[test]
    fn years_clubs_group_by_distinct_years() {
        let every = artist("Every");
        let twice = artist("Twice");
        let also_twice = artist("Also Twice");
        let once = artist("Once");
        let e = song("e", &[&every]);
        let t = song("t", &[&twice]);
        let at = song("at", &[&also_twice]);
        let o = song("o", &[&once]);
        let lists = vec![
            list(SpotifyTop100, "2019", true, &[&e, &t, &at]),
            list(SpotifyTop100, "2020", true, &[&e, &o]),
            list(SpotifyTop100, "2021", true, &[&e, &t, &at]),
        ];

        let trends = aggregate_spotify_trends(&lists);
        let clubs: Vec<(usize, Vec<&str>)> = trends
            .years_clubs
            .iter()
            .map(|c| (c.num_years, c.artists.iter().map(|a| a.name.as_str()).collect()))
            .collect();
        assert_eq!(
            clubs,
            vec![(2, vec!["Also Twice", "Twice"]), (3, vec!["Every"])]
        );
    }

    #[test]
    fn years_clubs_include_empty_groups() {
        let x = artist("X");
        let a = song("a", &[&x]);
        let b = song("b", &[&artist("Y")]);
        let lists = vec![
            list(SpotifyTop100, "2019", true, &[&a]),
            list(SpotifyTop100, "2020", true, &[&b]),
            list(SpotifyTop100, "2021", true, &[&a]),
            list(SpotifyTop100, "2022", true, &[&b]),
        ];

        let trends = aggregate_spotify_trends(&lists);
        let sizes: Vec<(usize, usize)> = trends
            .years_clubs
            .iter()
            .map(|c| (c.num_years, c.artists.len()))
            .collect();
        assert_eq!(sizes, [(2, 2), (3, 0), (4, 0)]);
    }

    #[test]
    fn no_published_lists_is_empty_not_an_error() {
        assert_eq!(aggregate_spotify_trends(&[]), SpotifyTrends::default());

        let x = artist("X");
        let a = song("a", &[&x]);
        let hidden = vec![list(SpotifyTop100, "2020", false, &[&a])];
        assert_eq!(aggregate_spotify_trends(&hidden), SpotifyTrends::default());
    }

    #[test]
    fn single_year_has_no_clubs() {
        let x = artist("X");
        let a = song("a", &[&x]);
        let trends = aggregate_spotify_trends(&[list(SpotifyTop100, "2020", true, &[&a])]);
        assert_eq!(trends.years.len(), 1);
        assert!(trends.years_clubs.is_empty());
    }

    #[test]
    fn first_year_omits_change_when_serialized() {
        let x = artist("X");
        let a = song("a", &[&x]);
        let trends = aggregate_spotify_trends(&[list(SpotifyTop100, "2020", true, &[&a])]);
        let json = serde_json::to_value(&trends).unwrap();
        let entry = &json["years"][0]["artists"][0];
        assert_eq!(entry["current_count"], 1);
        assert!(entry.get("change").is_none());
    }
}
