use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use lucky_draw_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::SalesAuthorizer,
    handlers,
    middlewares::{SalesAuthMiddleware, create_cors},
    services::OrderService,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置（凭据缺失时立即退出）
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接（进程内唯一长生命周期句柄）
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 创建服务
    let order_service = OrderService::new(pool.clone(), config.campaign.clone());
    let sales_authorizer = SalesAuthorizer::new(config.sales_auth.clone());

    if sales_authorizer.is_external() {
        log::info!("Sales registration guarded by external authorization service");
    } else {
        log::warn!("Sales registration guarded by x-role header assertion only");
    }

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(SalesAuthMiddleware::new(sales_authorizer.clone()))
            .app_data(web::Data::new(order_service.clone()))
            .configure(swagger_config)
            .configure(handlers::order_config)
            .configure(handlers::maintenance_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    // 服务器停止后显式关闭连接
    if let Err(e) = pool.close().await {
        log::error!("Failed to close database connection: {e}");
    }

    Ok(())
}
