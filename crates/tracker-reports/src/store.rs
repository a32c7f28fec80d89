//! Loaders that materialise a report's working set from the store.
//!
//! Every loader is generic over [`ConnectionTrait`] so a report can run all
//! of them inside one read transaction. Nothing here writes.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use tracker_db::entities::{
    album, album_artist, artist, artist_album_ranking, artist_album_ranking_entry, list,
    list_song, song, song_artist,
};

use crate::error::Result;
use crate::model::{
    AlbumRanking, AlbumRecord, ArtistRef, ListKind, ListSummary, RankedAlbum, SongEntry, SongList,
};
use crate::year::Year;

/// Years are checked on insert, so a malformed one means the row predates
/// the constraint. It is skipped rather than failing the whole report.
fn stored_year(raw: String, row: Uuid) -> Option<Year> {
    match Year::try_from(raw) {
        Ok(year) => Some(year),
        Err(e) => {
            tracing::warn!(%row, "skipping row with a malformed year: {e}");
            None
        }
    }
}

fn summary(model: list::Model) -> Option<ListSummary> {
    Some(ListSummary {
        year: stored_year(model.year, model.id)?,
        id: model.id,
        kind: model.kind,
        title: model.title,
        published: model.published,
    })
}

pub async fn find_artist<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<ArtistRef>> {
    Ok(artist::Entity::find_by_id(id)
        .one(conn)
        .await?
        .map(|a| ArtistRef {
            id: a.id,
            name: a.name,
        }))
}

async fn artists_by_id<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, ArtistRef>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(artist::Entity::find()
        .filter(artist::Column::Id.is_in(ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|a| {
            (
                a.id,
                ArtistRef {
                    id: a.id,
                    name: a.name,
                },
            )
        })
        .collect())
}

/// Group `(owner, artist)` join rows into name-sorted artist lists per owner.
fn credits(
    pairs: impl IntoIterator<Item = (Uuid, Uuid)>,
    artists: &HashMap<Uuid, ArtistRef>,
) -> HashMap<Uuid, Vec<ArtistRef>> {
    let mut by_owner: HashMap<Uuid, Vec<ArtistRef>> = HashMap::new();
    for (owner, artist_id) in pairs {
        if let Some(artist) = artists.get(&artist_id) {
            by_owner.entry(owner).or_default().push(artist.clone());
        }
    }
    for credited in by_owner.values_mut() {
        credited.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
    }
    by_owner
}

async fn song_credits<C: ConnectionTrait>(
    conn: &C,
    song_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<ArtistRef>>> {
    if song_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = song_artist::Entity::find()
        .filter(song_artist::Column::SongId.is_in(song_ids.to_vec()))
        .all(conn)
        .await?;
    let artists = artists_by_id(conn, rows.iter().map(|r| r.artist_id).collect()).await?;

    Ok(credits(rows.into_iter().map(|r| (r.song_id, r.artist_id)), &artists))
}

async fn album_credits<C: ConnectionTrait>(
    conn: &C,
    album_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<ArtistRef>>> {
    if album_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = album_artist::Entity::find()
        .filter(album_artist::Column::AlbumId.is_in(album_ids.to_vec()))
        .all(conn)
        .await?;
    let artists = artists_by_id(conn, rows.iter().map(|r| r.artist_id).collect()).await?;

    Ok(credits(rows.into_iter().map(|r| (r.album_id, r.artist_id)), &artists))
}

async fn album_records<C: ConnectionTrait>(
    conn: &C,
    models: Vec<album::Model>,
) -> Result<Vec<AlbumRecord>> {
    let ids: Vec<Uuid> = models.iter().map(|a| a.id).collect();
    let mut credited = album_credits(conn, &ids).await?;

    Ok(models
        .into_iter()
        .filter_map(|a| {
            Some(AlbumRecord {
                year: stored_year(a.year, a.id)?,
                artists: credited.remove(&a.id).unwrap_or_default(),
                id: a.id,
                title: a.title,
                listened: a.listened,
                rank: a.rank,
            })
        })
        .collect())
}

/// The published list of `kind` for `year`, if any. Unpublished and missing
/// lists are indistinguishable.
pub async fn find_published_list<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
    year: &Year,
) -> Result<Option<ListSummary>> {
    Ok(list::Entity::find()
        .filter(list::Column::Kind.eq(kind))
        .filter(list::Column::Year.eq(year.as_str()))
        .filter(list::Column::Published.eq(true))
        .one(conn)
        .await?
        .and_then(summary))
}

/// Published lists of `kind`, ascending by year.
pub async fn published_lists<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
) -> Result<Vec<ListSummary>> {
    Ok(list::Entity::find()
        .filter(list::Column::Kind.eq(kind))
        .filter(list::Column::Published.eq(true))
        .order_by_asc(list::Column::Year)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(summary)
        .collect())
}

pub async fn latest_published_list<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
) -> Result<Option<ListSummary>> {
    Ok(list::Entity::find()
        .filter(list::Column::Kind.eq(kind))
        .filter(list::Column::Published.eq(true))
        .order_by_desc(list::Column::Year)
        .all(conn)
        .await?
        .into_iter()
        .find_map(summary))
}

pub async fn published_years<C: ConnectionTrait>(
    conn: &C,
    kind: ListKind,
) -> Result<BTreeSet<Year>> {
    Ok(published_lists(conn, kind)
        .await?
        .into_iter()
        .map(|l| l.year)
        .collect())
}

/// Attach each list's entries, in `ordering`, with their songs' artists.
pub async fn load_song_lists<C: ConnectionTrait>(
    conn: &C,
    lists: Vec<ListSummary>,
) -> Result<Vec<SongList>> {
    if lists.is_empty() {
        return Ok(Vec::new());
    }
    let list_ids: Vec<Uuid> = lists.iter().map(|l| l.id).collect();

    let rows = list_song::Entity::find()
        .filter(list_song::Column::ListId.is_in(list_ids))
        .order_by_asc(list_song::Column::ListId)
        .order_by_asc(list_song::Column::Ordering)
        .all(conn)
        .await?;

    let mut song_ids: Vec<Uuid> = rows.iter().map(|r| r.song_id).collect();
    song_ids.sort();
    song_ids.dedup();

    let titles: HashMap<Uuid, String> = if song_ids.is_empty() {
        HashMap::new()
    } else {
        song::Entity::find()
            .filter(song::Column::Id.is_in(song_ids.clone()))
            .all(conn)
            .await?
            .into_iter()
            .map(|s| (s.id, s.title))
            .collect()
    };
    let credited = song_credits(conn, &song_ids).await?;

    let mut entries: HashMap<Uuid, Vec<SongEntry>> = HashMap::new();
    for row in rows {
        let Some(title) = titles.get(&row.song_id) else {
            tracing::warn!(song_id = %row.song_id, list_id = %row.list_id, "list entry points at a missing song");
            continue;
        };
        entries.entry(row.list_id).or_default().push(SongEntry {
            ordering: row.ordering,
            song_id: row.song_id,
            title: title.clone(),
            artists: credited.get(&row.song_id).cloned().unwrap_or_default(),
        });
    }

    Ok(lists
        .into_iter()
        .map(|list| {
            let mut entries = entries.remove(&list.id).unwrap_or_default();
            entries.sort_by_key(|e| e.ordering);
            SongList { list, entries }
        })
        .collect())
}

/// Every album released in `year`, ranked or not.
pub async fn albums_for_year<C: ConnectionTrait>(conn: &C, year: &Year) -> Result<Vec<AlbumRecord>> {
    let models = album::Entity::find()
        .filter(album::Column::Year.eq(year.as_str()))
        .order_by_asc(album::Column::Title)
        .all(conn)
        .await?;
    album_records(conn, models).await
}

/// Every album the artist is credited on.
pub async fn artist_albums<C: ConnectionTrait>(
    conn: &C,
    artist_id: Uuid,
) -> Result<Vec<AlbumRecord>> {
    let models = album::Entity::find()
        .inner_join(artist::Entity)
        .filter(artist::Column::Id.eq(artist_id))
        .order_by_asc(album::Column::Year)
        .order_by_asc(album::Column::Title)
        .all(conn)
        .await?;
    album_records(conn, models).await
}

/// The artist's ranking whether published or not; callers decide visibility.
pub async fn artist_ranking<C: ConnectionTrait>(
    conn: &C,
    artist: &ArtistRef,
) -> Result<Option<AlbumRanking>> {
    let Some(ranking) = artist_album_ranking::Entity::find()
        .filter(artist_album_ranking::Column::ArtistId.eq(artist.id))
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let rows = artist_album_ranking_entry::Entity::find()
        .filter(artist_album_ranking_entry::Column::RankingId.eq(ranking.id))
        .order_by_asc(artist_album_ranking_entry::Column::Rank)
        .find_also_related(album::Entity)
        .all(conn)
        .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (entry, album) in rows {
        let Some(album) = album else {
            tracing::warn!(entry_id = %entry.id, "ranking entry points at a missing album");
            continue;
        };
        let Some(year) = stored_year(album.year, album.id) else {
            continue;
        };
        entries.push(RankedAlbum {
            rank: entry.rank,
            album_id: album.id,
            title: album.title,
            year,
            notes: entry.notes,
        });
    }

    Ok(Some(AlbumRanking {
        id: ranking.id,
        artist: artist.clone(),
        published: ranking.published,
        entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str) -> ArtistRef {
        ArtistRef {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    #[test]
    fn credits_group_and_sort_by_name() {
        let zed = artist("Zed");
        let abe = artist("Abe");
        let song = Uuid::new_v4();
        let lookup: HashMap<Uuid, ArtistRef> =
            [(zed.id, zed.clone()), (abe.id, abe.clone())].into();

        let grouped = credits([(song, zed.id), (song, abe.id)], &lookup);
        assert_eq!(grouped[&song], vec![abe, zed]);
    }

    #[test]
    fn malformed_stored_list_year_is_skipped() {
        let row = |year: &str| list::Model {
            id: Uuid::new_v4(),
            kind: ListKind::Obsessions,
            title: format!("Obsessions {year}"),
            published: true,
            year: year.into(),
        };

        assert_eq!(
            summary(row("2020")).map(|l| l.year.to_string()),
            Some("2020".to_string())
        );
        for bad in ["1850", "abcd", "20"] {
            assert!(summary(row(bad)).is_none(), "{bad}");
        }
    }

    #[test]
    fn credits_skip_unknown_artists() {
        let song = Uuid::new_v4();
        let grouped = credits([(song, Uuid::new_v4())], &HashMap::new());
        assert!(grouped.is_empty());
    }
}
