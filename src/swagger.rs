use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "sales_role",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-role"))),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::order::add_order_number,
        handlers::order::check_order_number,
        handlers::order::record_draw_result,
        handlers::order::play_lucky_draw,
        handlers::order::get_order_numbers,
        handlers::order::get_draw_results,
        handlers::order::export_order_numbers,
        handlers::maintenance::test_database,
        handlers::maintenance::keep_alive,
    ),
    components(
        schemas(
            AddOrderNumberRequest,
            CheckOrderNumberRequest,
            RecordDrawResultRequest,
            PlayLuckyDrawRequest,
            OrderRecordResponse,
            DrawOutcomeResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "order", description = "Order number registration and redemption API"),
        (name = "maintenance", description = "Maintenance and connectivity API"),
    ),
    info(
        title = "Lucky Draw Backend API",
        version = "1.0.0",
        description = "Promotional lucky draw order number redemption REST API documentation",
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
