pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_artists;
mod m20250101_000002_create_albums;
mod m20250101_000003_create_album_artists;
mod m20250101_000004_create_songs;
mod m20250101_000005_create_song_artists;
mod m20250101_000006_create_lists;
mod m20250101_000007_create_list_songs;
mod m20250101_000008_create_artist_album_rankings;
mod m20250101_000009_create_artist_album_ranking_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_artists::Migration),
            Box::new(m20250101_000002_create_albums::Migration),
            Box::new(m20250101_000003_create_album_artists::Migration),
            Box::new(m20250101_000004_create_songs::Migration),
            Box::new(m20250101_000005_create_song_artists::Migration),
            Box::new(m20250101_000006_create_lists::Migration),
            Box::new(m20250101_000007_create_list_songs::Migration),
            Box::new(m20250101_000008_create_artist_album_rankings::Migration),
            Box::new(m20250101_000009_create_artist_album_ranking_entries::Migration),
        ]
    }
}

/// CHECK for a year column: four characters, 1900-2100 both as text and as
/// an integer, so "19x0" and "1950abc" are rejected on backends that ignore
/// the varchar length.
pub(crate) fn valid_year(column: &'static str) -> SimpleExpr {
    Expr::cust(format!("length({column}) = 4"))
        .and(Expr::col(Alias::new(column)).between("1900", "2100"))
        .and(
            Expr::expr(Func::cast_as(
                Expr::col(Alias::new(column)),
                Alias::new("integer"),
            ))
            .between(1900, 2100),
        )
}
