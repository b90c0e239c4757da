use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercise::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercise::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exercise::UserId).string().not_null())
                    .col(ColumnDef::new(Exercise::Description).text().not_null())
                    .col(
                        ColumnDef::new(Exercise::Duration)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Exercise::Date).date().not_null())
                    .col(
                        ColumnDef::new(Exercise::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 日志查询按 user_id + date 过滤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exercises_user_date")
                    .table(Exercise::Table)
                    .col(Exercise::UserId)
                    .col(Exercise::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_exercises_user_date").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Exercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Exercise {
    #[sea_orm(iden = "exercises")]
    Table,
    Id,
    UserId,
    Description,
    Duration,
    Date,
    CreatedAt,
}
