use sea_orm_migration::prelude::*;

/// Order Records (订单号兑换记录)
#[derive(DeriveIden)]
enum OrderRecords {
    Table,
    OrderNumber,
    HasPlayed,
    DrawResult,
    CreatedAt,
    PlayedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 订单号即主键（不自增），一条记录对应一次抽奖资格:
/// - has_played 默认 false，兑换时翻转为 true（仅一次）
/// - draw_result 仅在兑换时写入
/// - created_at 登记时间，played_at 兑换时间
///
/// 默认值使用 CURRENT_TIMESTAMP 以兼容 Postgres 与 SQLite（测试库）
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderRecords::OrderNumber)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderRecords::HasPlayed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OrderRecords::DrawResult)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OrderRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(OrderRecords::PlayedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 兑换状态查询索引（get-draw-results 按已兑换过滤）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_records_has_played")
                    .table(OrderRecords::Table)
                    .col(OrderRecords::HasPlayed)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(OrderRecords::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
