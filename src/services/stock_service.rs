//! 股票查询服务
//!
//! 根据股票代码拉取基本信息、公司信息、近一年日线和每日指标，
//! 合并为前端图表使用的 [`QueryResult`]

use thiserror::Error;

use crate::models::{
    theme_for, CompanyProfile, PriceBar, PriceData, QueryResult, StockBasic, StockDetails,
    ValuationPoint,
};
use crate::services::provider::{DateWindow, MarketDataProvider};

/// 总市值单位换算：万元 -> 亿元
const TOTAL_MV_DIVISOR: f64 = 10000.0;

const UNKNOWN_INDUSTRY: &str = "未知行业";
const UNKNOWN: &str = "未知";
const NO_INTRODUCTION: &str = "暂无简介";
const NO_INFORMATION: &str = "暂无信息";

/// 查询错误，`Display` 即返回给前端的提示
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("股票代码不能为空")]
    EmptyStockCode,
    #[error("未找到该股票信息")]
    StockNotFound,
    #[error("未找到股价数据")]
    PriceNotFound,
    #[error("查询失败：{0}")]
    Upstream(#[from] anyhow::Error),
}

/// 查询股票，窗口为截至今天（北京时间）的近 365 天
pub async fn query_stock(
    provider: &dyn MarketDataProvider,
    stock_code: Option<&str>,
) -> Result<QueryResult, QueryError> {
    query_stock_in_window(provider, stock_code, &DateWindow::trailing_year()).await
}

/// 在指定日期窗口内查询股票
pub async fn query_stock_in_window(
    provider: &dyn MarketDataProvider,
    stock_code: Option<&str>,
    window: &DateWindow,
) -> Result<QueryResult, QueryError> {
    log::info!("查询股票: {}", stock_code.unwrap_or_default());

    let ts_code = stock_code
        .filter(|code| !code.is_empty())
        .ok_or(QueryError::EmptyStockCode)?;

    let basic = provider
        .stock_basic(ts_code)
        .await?
        .ok_or(QueryError::StockNotFound)?;

    let company = provider.stock_company(ts_code).await?;

    let prices = provider.daily(ts_code, window).await?;
    if prices.is_empty() {
        return Err(QueryError::PriceNotFound);
    }

    let valuations = provider.daily_basic(ts_code, window).await?;

    log::debug!(
        "{} 日线 {} 条，每日指标 {} 条 ({} - {})",
        ts_code,
        prices.len(),
        valuations.len(),
        window.start_date,
        window.end_date
    );

    Ok(build_result(basic, company, prices, valuations))
}

/// 合并各数据集为查询结果
///
/// 两个序列分别按交易日期升序排序；估值序列空值补 0，总市值换算为亿元；
/// 股价序列原样输出
pub fn build_result(
    basic: StockBasic,
    company: Option<CompanyProfile>,
    mut prices: Vec<PriceBar>,
    mut valuations: Vec<ValuationPoint>,
) -> QueryResult {
    prices.sort_by(|a, b| a.trade_date.cmp(&b.trade_date));
    valuations.sort_by(|a, b| a.trade_date.cmp(&b.trade_date));

    let theme = theme_for(basic.industry.as_deref()).clone();
    let company = company.unwrap_or_default();

    let stock_info = StockDetails {
        industry: basic
            .industry
            .filter(|industry| !industry.is_empty())
            .unwrap_or_else(|| UNKNOWN_INDUSTRY.to_string()),
        market: basic.market,
        list_date: basic.list_date.unwrap_or_else(|| UNKNOWN.to_string()),
        fullname: basic.fullname.unwrap_or_else(|| basic.name.clone()),
        name: basic.name,
        chairman: company.chairman.unwrap_or_else(|| UNKNOWN.to_string()),
        introduction: company
            .introduction
            .unwrap_or_else(|| NO_INTRODUCTION.to_string()),
        main_business: company
            .main_business
            .unwrap_or_else(|| NO_INFORMATION.to_string()),
        business_scope: company
            .business_scope
            .unwrap_or_else(|| NO_INFORMATION.to_string()),
        theme,
    };

    let price_data = PriceData {
        dates: prices.iter().map(|bar| bar.trade_date.clone()).collect(),
        open: prices.iter().map(|bar| bar.open).collect(),
        high: prices.iter().map(|bar| bar.high).collect(),
        low: prices.iter().map(|bar| bar.low).collect(),
        close: prices.iter().map(|bar| bar.close).collect(),
        vol: prices.iter().map(|bar| bar.vol).collect(),
    };

    QueryResult {
        stock_info,
        dates: valuations.iter().map(|v| v.trade_date.clone()).collect(),
        pe: valuations.iter().map(|v| v.pe.unwrap_or(0.0)).collect(),
        pb: valuations.iter().map(|v| v.pb.unwrap_or(0.0)).collect(),
        dv_ratio: valuations.iter().map(|v| v.dv_ratio.unwrap_or(0.0)).collect(),
        total_mv: valuations
            .iter()
            .map(|v| v.total_mv.unwrap_or(0.0) / TOTAL_MV_DIVISOR)
            .collect(),
        price_data,
    }
}
