use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_artists::Artists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistAlbumRankings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistAlbumRankings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankings::ArtistId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankings::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ArtistAlbumRankings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_album_rankings_artist_id")
                            .from(ArtistAlbumRankings::Table, ArtistAlbumRankings::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistAlbumRankings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistAlbumRankings {
    Table,
    Id,
    ArtistId,
    Published,
    CreatedAt,
    UpdatedAt,
}
