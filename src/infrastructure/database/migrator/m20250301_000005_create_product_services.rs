//! Create product_services link table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_products::Products;
use super::m20250301_000002_create_services::Services;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductServices::ProductServiceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductServices::ProductId).integer().not_null())
                    .col(ColumnDef::new(ProductServices::ServiceId).integer().not_null())
                    .col(
                        ColumnDef::new(ProductServices::Units)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ProductServices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductServices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_services_product")
                            .from(ProductServices::Table, ProductServices::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_services_service")
                            .from(ProductServices::Table, ProductServices::ServiceId)
                            .to(Services::Table, Services::ServiceId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on product_id + service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_product_services_product_service")
                    .table(ProductServices::Table)
                    .col(ProductServices::ProductId)
                    .col(ProductServices::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProductServices {
    Table,
    ProductServiceId,
    ProductId,
    ServiceId,
    Units,
    CreatedAt,
    UpdatedAt,
}
