use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // An itinerary with passengers cannot be deleted until they are removed
        manager
            .create_table(
                Table::create()
                    .table(Passengers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Passengers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Passengers::Name).string_len(191).not_null())
                    .col(ColumnDef::new(Passengers::IdNumber).string_len(191).not_null())
                    .col(ColumnDef::new(Passengers::PhoneNumber).string_len(191).not_null())
                    .col(ColumnDef::new(Passengers::ItineraryId).integer().not_null())
                    .col(
                        ColumnDef::new(Passengers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Passengers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passengers_itinerary_id")
                            .from(Passengers::Table, Passengers::ItineraryId)
                            .to(Itineraries::Table, Itineraries::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_passengers_itinerary_id")
                    .table(Passengers::Table)
                    .col(Passengers::ItineraryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passengers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Passengers {
    Table,
    Id,
    Name,
    IdNumber,
    PhoneNumber,
    ItineraryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Itineraries {
    Table,
    Id,
}
