//! 股票主题查询后端服务
//!
//! 根据股票代码从 Tushare Pro 拉取基本信息、公司信息、近一年日线和估值指标，
//! 整理为前端图表所需的 JSON，并提供前端静态页面

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::provider::MarketDataProvider;
use crate::services::tushare::TushareClient;

/// 应用程序入口
///
/// 加载配置后启动 HTTP 服务器，默认监听 0.0.0.0:5000
#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env 文件可选
    dotenv::dotenv().ok();

    let (config, load_message) = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件中的级别
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));
    log::info!("{}", load_message);

    if config.tushare.token.is_empty() {
        log::warn!("未设置 TUSHARE_TOKEN，Tushare 接口调用将会失败");
    }

    let client = TushareClient::new(&config.tushare)
        .map_err(|e| io::Error::other(format!("创建 Tushare 客户端失败: {}", e)))?;
    let provider: Arc<dyn MarketDataProvider> = Arc::new(client);
    let provider = web::Data::from(provider);

    let static_dir = config.static_dir.clone();
    let serve_static = Path::new(&static_dir).is_dir();
    if !serve_static {
        log::warn!("静态文件目录 {} 不存在，前端页面不可用", static_dir);
    }

    log::info!("启动股票查询服务，监听 {}", config.bind_addr());

    let mut server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())  // 请求日志
            .app_data(provider.clone())
            .configure(handlers::config);

        // 静态文件必须最后注册，避免覆盖接口路由
        if serve_static {
            app.service(handlers::frontend::frontend(&static_dir))
        } else {
            app
        }
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.bind_addr())?.run().await
}
