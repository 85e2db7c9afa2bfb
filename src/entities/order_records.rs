use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 订单号兑换记录实体
/// 说明:
/// - 订单号本身即主键（统一标识方案，不再另设自增 id）
/// - has_played false -> true 至多发生一次，draw_result 仅在兑换时写入
/// - created_at 登记时间；played_at 兑换时间，未兑换为 NULL
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "order_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_number: String,
    /// 是否已兑换
    pub has_played: bool,
    /// 抽奖结果（历史快照，兑换后不再变化）
    pub draw_result: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub played_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
