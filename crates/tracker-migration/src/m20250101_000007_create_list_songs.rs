use sea_orm_migration::prelude::*;

use super::m20250101_000004_create_songs::Songs;
use super::m20250101_000006_create_lists::Lists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListSongs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ListSongs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ListSongs::ListId).uuid().not_null())
                    .col(ColumnDef::new(ListSongs::SongId).uuid().not_null())
                    .col(ColumnDef::new(ListSongs::Ordering).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_songs_list_id")
                            .from(ListSongs::Table, ListSongs::ListId)
                            .to(Lists::Table, Lists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_songs_song_id")
                            .from(ListSongs::Table, ListSongs::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A position is used once per list, and a song appears once per list
        manager
            .create_index(
                Index::create()
                    .name("uq_list_songs_list_ordering")
                    .table(ListSongs::Table)
                    .col(ListSongs::ListId)
                    .col(ListSongs::Ordering)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_list_songs_list_song")
                    .table(ListSongs::Table)
                    .col(ListSongs::ListId)
                    .col(ListSongs::SongId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListSongs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListSongs {
    Table,
    Id,
    ListId,
    SongId,
    Ordering,
}
