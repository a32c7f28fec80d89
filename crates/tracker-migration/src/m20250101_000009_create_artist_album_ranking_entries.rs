use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_albums::Albums;
use super::m20250101_000008_create_artist_album_rankings::ArtistAlbumRankings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistAlbumRankingEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistAlbumRankingEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankingEntries::RankingId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankingEntries::AlbumId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankingEntries::Rank)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistAlbumRankingEntries::Notes).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_entries_ranking_id")
                            .from(
                                ArtistAlbumRankingEntries::Table,
                                ArtistAlbumRankingEntries::RankingId,
                            )
                            .to(ArtistAlbumRankings::Table, ArtistAlbumRankings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_entries_album_id")
                            .from(
                                ArtistAlbumRankingEntries::Table,
                                ArtistAlbumRankingEntries::AlbumId,
                            )
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_ranking_entries_ranking_rank")
                    .table(ArtistAlbumRankingEntries::Table)
                    .col(ArtistAlbumRankingEntries::RankingId)
                    .col(ArtistAlbumRankingEntries::Rank)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_ranking_entries_ranking_album")
                    .table(ArtistAlbumRankingEntries::Table)
                    .col(ArtistAlbumRankingEntries::RankingId)
                    .col(ArtistAlbumRankingEntries::AlbumId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ArtistAlbumRankingEntries::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistAlbumRankingEntries {
    Table,
    Id,
    RankingId,
    AlbumId,
    Rank,
    Notes,
}
