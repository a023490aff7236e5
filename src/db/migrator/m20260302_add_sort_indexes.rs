use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every list endpoint sorts newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_users_created_at")
                    .table(Users::Table)
                    .col(Users::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_items_created_at")
                    .table(CartItems::Table)
                    .col(CartItems::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category_created_at")
                    .table(Products::Table)
                    .col(Products::Category)
                    .col(Products::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_login_logs_timestamp")
                    .table(LoginLogs::Table)
                    .col(LoginLogs::Timestamp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_users_created_at",
            "idx_cart_items_created_at",
            "idx_products_category_created_at",
            "idx_login_logs_timestamp",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Category,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LoginLogs {
    Table,
    Timestamp,
}
