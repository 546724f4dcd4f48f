use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Itineraries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Itineraries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Itineraries::DepartureCity).string_len(191).not_null())
                    .col(ColumnDef::new(Itineraries::ArrivalCity).string_len(191).not_null())
                    .col(ColumnDef::new(Itineraries::DateDeparture).string_len(191).not_null())
                    .col(ColumnDef::new(Itineraries::TimeDeparture).string_len(191).not_null())
                    .col(
                        ColumnDef::new(Itineraries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Itineraries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Itineraries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Itineraries {
    Table,
    Id,
    DepartureCity,
    ArrivalCity,
    DateDeparture,
    TimeDeparture,
    CreatedAt,
    UpdatedAt,
}
