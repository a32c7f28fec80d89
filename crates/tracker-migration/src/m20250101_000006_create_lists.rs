use sea_orm_migration::prelude::*;

/// Top Ten, Obsessions and Spotify Top 100 lists share one table,
/// discriminated by `kind`. Each kind has at most one list per year.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lists::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lists::Kind).string_len(32).not_null())
                    .col(ColumnDef::new(Lists::Title).string_len(250).not_null())
                    .col(
                        ColumnDef::new(Lists::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Lists::Year)
                            .string_len(4)
                            .not_null()
                            .check(crate::valid_year("year")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_lists_kind_year")
                    .table(Lists::Table)
                    .col(Lists::Kind)
                    .col(Lists::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lists {
    Table,
    Id,
    Kind,
    Title,
    Published,
    Year,
}
