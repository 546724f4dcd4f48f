use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Flights are removed together with their itinerary
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Flights::DepartureCity).string_len(191).not_null())
                    .col(ColumnDef::new(Flights::ArrivalCity).string_len(191).not_null())
                    .col(ColumnDef::new(Flights::DateDeparture).string_len(191).not_null())
                    .col(ColumnDef::new(Flights::DateArrival).string_len(191).not_null())
                    .col(ColumnDef::new(Flights::ItineraryId).integer().not_null())
                    .col(
                        ColumnDef::new(Flights::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Flights::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_itinerary_id")
                            .from(Flights::Table, Flights::ItineraryId)
                            .to(Itineraries::Table, Itineraries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flights_itinerary_id")
                    .table(Flights::Table)
                    .col(Flights::ItineraryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Flights {
    Table,
    Id,
    DepartureCity,
    ArrivalCity,
    DateDeparture,
    DateArrival,
    ItineraryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Itineraries {
    Table,
    Id,
}
