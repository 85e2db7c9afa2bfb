use crate::config::{CampaignConfig, PrizeConfig};
use crate::database::DbPool;
use crate::entities::order_record_entity as records;
use crate::error::{AppError, AppResult};
use crate::utils::draw_prize;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr, UpdateResult,
};

const MAX_ORDER_NUMBER_LEN: usize = 64;

/// 兑换服务：订单号登记 -> 校验 -> 一次性兑换
///
/// 订单号状态机:
/// [未登记] --register--> [已登记未兑换] --redeem--> [已兑换]
/// 已兑换为终态，没有回退路径。
#[derive(Clone)]
pub struct OrderService {
    pool: DbPool,
    prizes: Vec<PrizeConfig>,
}

impl OrderService {
    pub fn new(pool: DbPool, campaign: CampaignConfig) -> Self {
        Self {
            pool,
            prizes: campaign.prizes,
        }
    }

    /// 登记订单号（销售侧入口）
    /// 重复登记依赖主键唯一约束拦截，避免先查后插的竞态窗口
    pub async fn register(&self, order_number: &str) -> AppResult<records::Model> {
        let order_number = normalize_order_number(order_number)?;

        let model = records::ActiveModel {
            order_number: Set(order_number.clone()),
            has_played: Set(false),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        };

        match model.insert(&self.pool).await {
            Ok(m) => {
                log::info!("Registered order number {order_number}");
                Ok(m)
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists(
                    format!("Order number {order_number} is already registered"),
                )),
                _ => Err(e.into()),
            },
        }
    }

    /// 校验订单号是否可用，严格只读（不创建、不改状态）
    pub async fn check(&self, order_number: &str) -> AppResult<records::Model> {
        let order_number = normalize_order_number(order_number)?;

        let record = records::Entity::find_by_id(order_number.clone())
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "Order number does not exist. Please contact your sales representative."
                        .to_string(),
                )
            })?;

        if record.has_played {
            return Err(AppError::AlreadyUsed(
                "This order number has already been used.".to_string(),
            ));
        }

        Ok(record)
    }

    /// 兑换：写入抽奖结果并翻转 has_played
    ///
    /// 核心不变量（至多一次兑换）由一条条件更新保证:
    /// UPDATE ... SET has_played = true ... WHERE order_number = ? AND has_played = false
    /// rows_affected == 0 再回读区分「不存在」与「已兑换」。
    /// 并发兑换同一订单号时恰好一个请求命中更新。
    pub async fn redeem(&self, order_number: &str, draw_result: &str) -> AppResult<records::Model> {
        let order_number = normalize_order_number(order_number)?;
        if draw_result.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Draw result is required.".to_string(),
            ));
        }

        let update_result: UpdateResult = records::Entity::update_many()
            .col_expr(records::Column::HasPlayed, Expr::value(true))
            .col_expr(records::Column::DrawResult, Expr::value(draw_result.trim()))
            .col_expr(records::Column::PlayedAt, Expr::value(Utc::now()))
            .filter(records::Column::OrderNumber.eq(order_number.clone()))
            .filter(records::Column::HasPlayed.eq(false))
            .exec(&self.pool)
            .await?;

        if update_result.rows_affected == 0 {
            return match records::Entity::find_by_id(order_number.clone())
                .one(&self.pool)
                .await?
            {
                None => Err(AppError::NotFound(
                    "Order number does not exist.".to_string(),
                )),
                Some(_) => Err(AppError::AlreadyUsed(
                    "You have already used your chance.".to_string(),
                )),
            };
        }

        log::info!("Recorded draw result for order number {order_number}");

        records::Entity::find_by_id(order_number)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Order record vanished after redemption".to_string())
            })
    }

    /// 合并端点：服务端按配置权重抽取结果后立即兑换
    /// 兑换失败（不存在/已兑换）时不消耗任何东西，抽取结果直接丢弃
    pub async fn play(&self, order_number: &str) -> AppResult<records::Model> {
        let prize = draw_prize(&self.prizes)?.to_string();
        self.redeem(order_number, &prize).await
    }

    /// 全量记录（登记顺序）
    pub async fn list_records(&self) -> AppResult<Vec<records::Model>> {
        let list = records::Entity::find()
            .order_by_asc(records::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// 已兑换记录（兑换时间倒序）
    pub async fn list_results(&self) -> AppResult<Vec<records::Model>> {
        let list = records::Entity::find()
            .filter(records::Column::HasPlayed.eq(true))
            .order_by_desc(records::Column::PlayedAt)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// 连通性检查（/test-database）
    pub async fn ping(&self) -> AppResult<()> {
        self.pool.ping().await?;
        Ok(())
    }
}

/// 订单号规范化：去除首尾空白，拒绝空串与超长输入
fn normalize_order_number(order_number: &str) -> AppResult<String> {
    let trimmed = order_number.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            "Order number is required.".to_string(),
        ));
    }
    if trimmed.len() > MAX_ORDER_NUMBER_LEN {
        return Err(AppError::ValidationError(
            "Order number is too long.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
