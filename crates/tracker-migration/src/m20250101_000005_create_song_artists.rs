use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_artists::Artists;
use super::m20250101_000004_create_songs::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SongArtists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SongArtists::SongId).uuid().not_null())
                    .col(ColumnDef::new(SongArtists::ArtistId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(SongArtists::SongId)
                            .col(SongArtists::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_artists_song_id")
                            .from(SongArtists::Table, SongArtists::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_artists_artist_id")
                            .from(SongArtists::Table, SongArtists::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_song_artists_artist_id")
                    .table(SongArtists::Table)
                    .col(SongArtists::ArtistId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SongArtists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SongArtists {
    Table,
    SongId,
    ArtistId,
}
