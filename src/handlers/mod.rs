pub mod frontend;
pub mod health;
pub mod stock;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, INTERNAL_ERROR_MESSAGE};

/// 注册路由，同一组接口同时挂在根路径和 /api 下
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .configure(health::config)
                .configure(stock::config),
        )
        .configure(health::config)
        .configure(stock::config);
}

/// 请求体无法解析时返回 500 和统一错误格式
fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::error!("解析请求体失败 {}: {}", req.path(), err);
    let response = HttpResponse::InternalServerError()
        .json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE));
    error::InternalError::from_response(err, response).into()
}
