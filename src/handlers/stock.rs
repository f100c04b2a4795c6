//! 股票查询接口处理器
//!
//! - POST /query_stock
//! - POST /api/query_stock
//!
//! 业务失败统一以 HTTP 200 + `{"success": false, "error": ...}` 返回

use actix_web::{web, HttpResponse, Result};

use crate::models::{ApiResponse, QueryResult, StockQueryRequest};
use crate::services::provider::MarketDataProvider;
use crate::services::stock_service::{self, QueryError};

/// 查询股票基本信息、估值指标和近一年股价
pub async fn query_stock(
    provider: web::Data<dyn MarketDataProvider>,
    body: web::Json<StockQueryRequest>,
) -> Result<HttpResponse> {
    let stock_code = body.stock_code.as_deref();

    match stock_service::query_stock(provider.get_ref(), stock_code).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => {
            match &e {
                QueryError::Upstream(source) => {
                    log::error!(
                        "查询股票 {} 出错: {:?}",
                        stock_code.unwrap_or_default(),
                        source
                    );
                }
                _ => log::warn!("查询股票 {} 失败: {}", stock_code.unwrap_or_default(), e),
            }
            Ok(HttpResponse::Ok().json(ApiResponse::<QueryResult>::error(e.to_string())))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/query_stock", web::post().to(query_stock));
}
