use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::FullName).string().not_null())
                    .col(ColumnDef::new(Accounts::Organization).string().not_null())
                    .col(ColumnDef::new(Accounts::Role).string().not_null())
                    .col(ColumnDef::new(Accounts::Status).string().not_null())
                    .col(ColumnDef::new(Accounts::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Accounts::PlanSelection).string().not_null())
                    // Nullable: legacy accounts predate the trial anchor.
                    .col(ColumnDef::new(Accounts::CreatedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Accounts::GenerationCount)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Accounts::GenerationCount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Accounts::ChatMessageCount)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Accounts::ChatMessageCount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Approval-queue listings filter by status.
        manager
            .create_index(
                Index::create()
                    .table(Accounts::Table)
                    .col(Accounts::Status)
                    .name("idx_accounts_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Email,
    FullName,
    Organization,
    Role,
    Status,
    IsActive,
    PlanSelection,
    CreatedAt,
    GenerationCount,
    ChatMessageCount,
    UpdatedAt,
}
