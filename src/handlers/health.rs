//! 存活探针
//!
//! - GET /health
//! - GET /api/health

use actix_web::{web, HttpResponse, Responder};

use crate::models::ApiResponse;

/// 仅表示进程可响应请求，不探测 Tushare 连通性
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("ok"))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_under_both_prefixes() {
        let app = test::init_service(App::new().configure(crate::handlers::config)).await;

        for uri in ["/health", "/api/health"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, serde_json::json!({"success": true, "data": "ok"}));
        }
    }
}
