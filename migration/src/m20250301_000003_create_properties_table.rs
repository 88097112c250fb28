use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::RegionId).integer().null())
                    .col(ColumnDef::new(Properties::ApprovedBy).integer().null())
                    .col(
                        ColumnDef::new(Properties::PropertyName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::PropertyCode)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::RoomNumber).string_len(20).null())
                    .col(ColumnDef::new(Properties::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Properties::Description).text().null())
                    .col(
                        ColumnDef::new(Properties::Area)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Bedrooms).integer().not_null())
                    .col(ColumnDef::new(Properties::Bathrooms).integer().not_null())
                    .col(ColumnDef::new(Properties::MaxTenants).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::RentPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::RentDeposit)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::PropertyFee)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Latitude)
                            .decimal_len(9, 6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Longitude)
                            .decimal_len(9, 6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Properties::LeaseType).integer().not_null())
                    .col(ColumnDef::new(Properties::LeaseTerm).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::AvailableDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Properties::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Properties::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_approved_by")
                            .from(Properties::Table, Properties::ApprovedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Codes stay reserved after soft delete.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_properties_code_unique
                ON properties (property_code);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_properties_live
                ON properties (created_at DESC)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_properties_updated_at
                BEFORE UPDATE ON properties
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_properties_updated_at ON properties;
                DROP INDEX IF EXISTS idx_properties_code_unique;
                DROP INDEX IF EXISTS idx_properties_live;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    RegionId,
    ApprovedBy,
    PropertyName,
    PropertyCode,
    RoomNumber,
    Address,
    Description,
    Area,
    Bedrooms,
    Bathrooms,
    MaxTenants,
    RentPrice,
    RentDeposit,
    PropertyFee,
    Latitude,
    Longitude,
    Status,
    LeaseType,
    LeaseTerm,
    AvailableDate,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
