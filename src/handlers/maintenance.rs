use crate::services::OrderService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/test-database",
    tag = "maintenance",
    responses(
        (status = 200, description = "数据库连通"),
        (status = 500, description = "数据库不可达")
    )
)]
/// 数据库连通性检查
pub async fn test_database(service: web::Data<OrderService>) -> Result<HttpResponse> {
    match service.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Database is connected!"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/keep-alive",
    tag = "maintenance",
    responses(
        (status = 200, description = "进程存活")
    )
)]
/// 保活探针（托管平台防休眠用）
pub async fn keep_alive() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "alive"
    })))
}

pub fn maintenance_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/test-database", web::get().to(test_database))
        .route("/keep-alive", web::get().to(keep_alive));
}
