use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

use super::{by_count_then_name, published};
use crate::model::SongList;
use crate::year::Year;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSongCount {
    pub name: String,
    pub id: Uuid,
    /// Distinct songs across all published lists
    pub songs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistYearCount {
    pub name: String,
    pub id: Uuid,
    /// Distinct published lists, i.e. distinct years
    pub years: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObsessionStats {
    pub by_song_count: Vec<ArtistSongCount>,
    pub by_year_count: Vec<ArtistYearCount>,
}

#[derive(Default)]
struct Tally<'a> {
    name: &'a str,
    songs: HashSet<Uuid>,
    lists: HashSet<Uuid>,
}

/// Per-artist song and year counts over every published Obsessions list.
///
/// Each entry is expanded over its song's artists: a song with two artists
/// counts once for each, a song with none counts for nobody.
pub fn aggregate_obsessions(lists: &[SongList]) -> ObsessionStats {
    let mut tallies: HashMap<Uuid, Tally<'_>> = HashMap::new();

    for list in published(lists) {
        for entry in &list.entries {
            for artist in &entry.artists {
                let tally = tallies.entry(artist.id).or_default();
                tally.name = &artist.name;
                tally.songs.insert(entry.song_id);
                tally.lists.insert(list.list.id);
            }
        }
    }

    let mut by_song_count: Vec<ArtistSongCount> = tallies
        .iter()
        .map(|(id, t)| ArtistSongCount {
            name: t.name.to_string(),
            id: *id,
            songs: t.songs.len() as u64,
        })
        .collect();
    by_song_count.sort_by(|a, b| {
        by_count_then_name(
            (a.songs, a.name.as_str(), a.id),
            (b.songs, b.name.as_str(), b.id),
        )
    });

    let mut by_year_count: Vec<ArtistYearCount> = tallies
        .iter()
        .map(|(id, t)| ArtistYearCount {
            name: t.name.to_string(),
            id: *id,
            years: t.lists.len() as u64,
        })
        .collect();
    by_year_count.sort_by(|a, b| {
        by_count_then_name(
            (a.years, a.name.as_str(), a.id),
            (b.years, b.name.as_str(), b.id),
        )
    });

    ObsessionStats {
        by_song_count,
        by_year_count,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSongCount {
    pub year: Year,
    pub song_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObsessionSummary {
    pub song_count: u64,
    pub list_count: u64,
    /// Ascending by year; only years where the artist appears
    pub lists: Vec<YearSongCount>,
}

/// One artist's footprint on the published Obsessions lists.
pub fn artist_obsession_summary(artist_id: Uuid, lists: &[SongList]) -> ObsessionSummary {
    let mut songs = HashSet::new();
    let mut per_year: BTreeMap<&Year, u64> = BTreeMap::new();

    for list in published(lists) {
        let credited = list
            .entries
            .iter()
            .filter(|e| e.artists.iter().any(|a| a.id == artist_id));
        for entry in credited {
            songs.insert(entry.song_id);
            *per_year.entry(&list.list.year).or_default() += 1;
        }
    }

    ObsessionSummary {
        song_count: songs.len() as u64,
        list_count: per_year.len() as u64,
        lists: per_year
            .into_iter()
            .map(|(year, song_count)| YearSongCount {
                year: year.clone(),
                song_count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{artist, list, song};
    use crate::model::ListKind::Obsessions;

    #[test]
    fn two_year_scenario() {
        let x = artist("X");
        let y = artist("Y");
        let a = song("A", &[&x]);
        let b = song("B", &[&x]);
        let c = song("C", &[&y]);
        let lists = vec![
            list(Obsessions, "2020", true, &[&a]),
            list(Obsessions, "2021", true, &[&b, &c]),
        ];

        let stats = aggregate_obsessions(&lists);

        assert_eq!(
            stats.by_song_count,
            vec![
                ArtistSongCount {
                    name: "X".into(),
                    id: x.id,
                    songs: 2,
                },
                ArtistSongCount {
                    name: "Y".into(),
                    id: y.id,
                    songs: 1,
                },
            ]
        );
        assert_eq!(
            stats.by_year_count,
            vec![
                ArtistYearCount {
                    name: "X".into(),
                    id: x.id,
                    years: 2,
                },
                ArtistYearCount {
                    name: "Y".into(),
                    id: y.id,
                    years: 1,
                },
            ]
        );
    }

    #[test]
    fn counts_distinct_songs_not_appearances() {
        let x = artist("X");
        let a = song("A", &[&x]);
        let lists = vec![
            list(Obsessions, "2020", true, &[&a]),
            list(Obsessions, "2021", true, &[&a]),
            list(Obsessions, "2022", true, &[&a]),
        ];

        let stats = aggregate_obsessions(&lists);
        assert_eq!(stats.by_song_count.len(), 1);
        assert_eq!(stats.by_song_count[0].songs, 1);
        assert_eq!(stats.by_year_count[0].years, 3);
    }

    #[test]
    fn expands_over_every_credited_artist() {
        let x = artist("X");
        let y = artist("Y");
        let duet = song("Duet", &[&x, &y]);
        let nobody = song("Instrumental", &[]);
        let lists = vec![list(Obsessions, "2020", true, &[&duet, &nobody])];

        let stats = aggregate_obsessions(&lists);
        let names: Vec<&str> = stats.by_song_count.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["X", "Y"]);
        assert!(stats.by_song_count.iter().all(|r| r.songs == 1));
    }

    #[test]
    fn ties_break_by_name() {
        let zed = artist("Zed");
        let abe = artist("Abe");
        let mia = artist("Mia");
        let s1 = song("1", &[&zed]);
        let s2 = song("2", &[&abe]);
        let s3 = song("3", &[&mia]);
        let s4 = song("4", &[&mia]);
        let lists = vec![list(Obsessions, "2020", true, &[&s1, &s2, &s3, &s4])];

        let stats = aggregate_obsessions(&lists);
        let names: Vec<&str> = stats.by_song_count.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Mia", "Abe", "Zed"]);
    }

    #[test]
    fn unpublished_lists_are_excluded() {
        let x = artist("X");
        let y = artist("Y");
        let a = song("A", &[&x]);
        let b = song("B", &[&y]);
        let mut lists = vec![
            list(Obsessions, "2020", true, &[&a]),
            list(Obsessions, "2021", true, &[&a, &b]),
        ];
        assert_eq!(aggregate_obsessions(&lists).by_song_count.len(), 2);

        // Y only ever appeared on 2021
        lists[1].list.published = false;
        let once = aggregate_obsessions(&lists);
        lists[1].list.published = false;
        let twice = aggregate_obsessions(&lists);

        assert_eq!(once, twice);
        assert_eq!(once.by_song_count.len(), 1);
        assert_eq!(once.by_song_count[0].id, x.id);
        assert_eq!(once.by_year_count[0].years, 1);
    }

    #[test]
    fn no_lists_no_stats() {
        assert_eq!(aggregate_obsessions(&[]), ObsessionStats::default());
    }

    #[test]
    fn summary_breaks_down_by_year() {
        let x = artist("X");
        let y = artist("Y");
        let a = song("A", &[&x]);
        let b = song("B", &[&x, &y]);
        let c = song("C", &[&y]);
        let lists = vec![
            list(Obsessions, "2021", true, &[&a, &b, &c]),
            list(Obsessions, "2019", true, &[&a]),
            list(Obsessions, "2020", false, &[&b]),
        ];

        let summary = artist_obsession_summary(x.id, &lists);
        assert_eq!(summary.song_count, 2);
        assert_eq!(summary.list_count, 2);
        let years: Vec<(&str, u64)> = summary
            .lists
            .iter()
            .map(|l| (l.year.as_str(), l.song_count))
            .collect();
        assert_eq!(years, [("2019", 1), ("2021", 2)]);
    }

    #[test]
    fn summary_for_absent_artist_is_empty() {
        let x = artist("X");
        let a = song("A", &[&x]);
        let lists = vec![list(Obsessions, "2020", true, &[&a])];

        assert_eq!(
            artist_obsession_summary(Uuid::new_v4(), &lists),
            ObsessionSummary::default()
        );
    }
}
