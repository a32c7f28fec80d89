use sea_orm_migration::prelude::*;

/// Albums carry their own year and (optional) rank within that year.
/// The (year, rank) pair is unique; albums without a rank never collide.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Albums::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Albums::Title).string_len(250).not_null())
                    .col(
                        ColumnDef::new(Albums::Year)
                            .string_len(4)
                            .not_null()
                            .check(crate::valid_year("year")),
                    )
                    .col(ColumnDef::new(Albums::ReleaseDate).date().null())
                    .col(
                        ColumnDef::new(Albums::Listened)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Albums::Priority)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Albums::OriginalRating)
                            .integer()
                            .null()
                            .check(Expr::col(Albums::OriginalRating).between(1, 3)),
                    )
                    .col(
                        ColumnDef::new(Albums::ReRating)
                            .integer()
                            .null()
                            .check(Expr::col(Albums::ReRating).between(1, 3)),
                    )
                    .col(
                        ColumnDef::new(Albums::Rank)
                            .integer()
                            .null()
                            .check(Expr::col(Albums::Rank).between(1, 20)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_albums_year_rank")
                    .table(Albums::Table)
                    .col(Albums::Year)
                    .col(Albums::Rank)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_albums_year")
                    .table(Albums::Table)
                    .col(Albums::Year)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Albums {
    Table,
    Id,
    Title,
    Year,
    ReleaseDate,
    Listened,
    Priority,
    OriginalRating,
    ReRating,
    Rank,
}
