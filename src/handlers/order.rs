use crate::error::AppError;
use crate::models::*;
use crate::services::OrderService;
use crate::utils::order_records_csv;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/add-order-number",
    tag = "order",
    request_body = AddOrderNumberRequest,
    security(
        ("sales_role" = [])
    ),
    responses(
        (status = 201, description = "登记成功", body = OrderRecordResponse),
        (status = 400, description = "订单号缺失或非法"),
        (status = 403, description = "缺少销售角色或授权被拒绝"),
        (status = 409, description = "订单号已登记")
    )
)]
/// 销售登记订单号，创建一条未兑换记录
pub async fn add_order_number(
    service: web::Data<OrderService>,
    body: web::Json<AddOrderNumberRequest>,
) -> Result<HttpResponse> {
    match service.register(&body.order_number).await {
        Ok(record) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": OrderRecordResponse::from(record)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/check-order-number",
    tag = "order",
    request_body = CheckOrderNumberRequest,
    responses(
        (status = 200, description = "订单号可用，可以抽奖"),
        (status = 400, description = "订单号缺失或已被使用"),
        (status = 404, description = "订单号不存在")
    )
)]
/// 顾客校验订单号（只读，不改变记录状态）
pub async fn check_order_number(
    service: web::Data<OrderService>,
    body: web::Json<CheckOrderNumberRequest>,
) -> Result<HttpResponse> {
    match service.check(&body.order_number).await {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Order number is valid. Proceed with the draw."
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/record-draw-result",
    tag = "order",
    request_body = RecordDrawResultRequest,
    responses(
        (status = 200, description = "抽奖结果记录成功", body = OrderRecordResponse),
        (status = 400, description = "字段缺失或订单号已被使用"),
        (status = 404, description = "订单号不存在")
    )
)]
/// 记录前端传入的抽奖结果并一次性核销订单号
pub async fn record_draw_result(
    service: web::Data<OrderService>,
    body: web::Json<RecordDrawResultRequest>,
) -> Result<HttpResponse> {
    match service.redeem(&body.order_number, &body.draw_result).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Draw result recorded successfully.",
            "data": OrderRecordResponse::from(record)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/play-lucky-draw",
    tag = "order",
    request_body = PlayLuckyDrawRequest,
    responses(
        (status = 200, description = "抽奖成功", body = DrawOutcomeResponse),
        (status = 400, description = "订单号缺失或已被使用"),
        (status = 404, description = "订单号不存在")
    )
)]
/// 合并端点：服务端抽取奖品并核销订单号
pub async fn play_lucky_draw(
    service: web::Data<OrderService>,
    body: web::Json<PlayLuckyDrawRequest>,
) -> Result<HttpResponse> {
    match service.play(&body.order_number).await {
        Ok(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": DrawOutcomeResponse::from(record)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/get-order-numbers",
    tag = "order",
    responses(
        (status = 200, description = "获取全部订单号记录", body = [OrderRecordResponse]),
        (status = 404, description = "暂无记录")
    )
)]
pub async fn get_order_numbers(service: web::Data<OrderService>) -> Result<HttpResponse> {
    match service.list_records().await {
        Ok(list) if list.is_empty() => {
            Ok(AppError::NotFound("No order numbers registered.".to_string()).error_response())
        }
        Ok(list) => {
            let data: Vec<OrderRecordResponse> = list.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/get-draw-results",
    tag = "order",
    responses(
        (status = 200, description = "获取已兑换记录（兑换时间倒序）", body = [OrderRecordResponse]),
        (status = 404, description = "暂无兑换记录")
    )
)]
pub async fn get_draw_results(service: web::Data<OrderService>) -> Result<HttpResponse> {
    match service.list_results().await {
        Ok(list) if list.is_empty() => {
            Ok(AppError::NotFound("No draw results recorded.".to_string()).error_response())
        }
        Ok(list) => {
            let data: Vec<OrderRecordResponse> = list.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/export-order-numbers",
    tag = "order",
    responses(
        (status = 200, description = "CSV 附件下载"),
        (status = 404, description = "暂无记录")
    )
)]
/// 导出全部记录为 CSV 附件
pub async fn export_order_numbers(service: web::Data<OrderService>) -> Result<HttpResponse> {
    match service.list_records().await {
        Ok(list) if list.is_empty() => {
            Ok(AppError::NotFound("No order numbers registered.".to_string()).error_response())
        }
        Ok(list) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .append_header((
                "Content-Disposition",
                "attachment; filename=\"order-numbers.csv\"",
            ))
            .body(order_records_csv(&list))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/add-order-number", web::post().to(add_order_number))
        .route("/check-order-number", web::post().to(check_order_number))
        .route("/record-draw-result", web::post().to(record_draw_result))
        .route("/play-lucky-draw", web::post().to(play_lucky_draw))
        .route("/get-order-numbers", web::get().to(get_order_numbers))
        .route("/get-draw-results", web::get().to(get_draw_results))
        .route(
            "/export-order-numbers",
            web::get().to(export_order_numbers),
        );
}
