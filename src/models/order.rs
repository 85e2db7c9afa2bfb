use crate::entities::order_record_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 请求/响应字段保持 camelCase，与历史客户端的线上格式一致

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderNumberRequest {
    pub order_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOrderNumberRequest {
    pub order_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDrawResultRequest {
    pub order_number: String,
    pub draw_result: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayLuckyDrawRequest {
    pub order_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecordResponse {
    pub order_number: String,
    pub has_played: bool,
    pub draw_result: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub played_at: Option<DateTime<Utc>>,
}

/// /play-lucky-draw 的结果载荷（只关心抽中了什么）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawOutcomeResponse {
    pub order_number: String,
    pub draw_result: String,
    pub played_at: Option<DateTime<Utc>>,
}

impl From<order_record_entity::Model> for OrderRecordResponse {
    fn from(m: order_record_entity::Model) -> Self {
        Self {
            order_number: m.order_number,
            has_played: m.has_played,
            draw_result: m.draw_result,
            created_at: m.created_at,
            played_at: m.played_at,
        }
    }
}

impl From<order_record_entity::Model> for DrawOutcomeResponse {
    fn from(m: order_record_entity::Model) -> Self {
        Self {
            order_number: m.order_number,
            draw_result: m.draw_result.unwrap_or_default(),
            played_at: m.played_at,
        }
    }
}
