//! 股票数据模型
//!
//! 数据源侧的原始记录（基本信息、公司信息、日线、每日指标）以及
//! 返回给前端的图表数据结构

use serde::{Deserialize, Serialize};

use super::theme::IndustryTheme;

/// 股票查询请求体
#[derive(Debug, Deserialize)]
pub struct StockQueryRequest {
    /// 股票代码（如 000001.SZ）
    pub stock_code: Option<String>,
}

/// 股票基本信息（stock_basic）
#[derive(Debug, Clone, PartialEq)]
pub struct StockBasic {
    /// 股票名称
    pub name: String,
    /// 所属行业
    pub industry: Option<String>,
    /// 市场类型（主板/创业板/科创板等）
    pub market: Option<String>,
    /// 上市日期（YYYYMMDD）
    pub list_date: Option<String>,
    /// 公司全称
    pub fullname: Option<String>,
}

/// 上市公司基本信息（stock_company）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyProfile {
    pub chairman: Option<String>,
    pub introduction: Option<String>,
    pub main_business: Option<String>,
    pub business_scope: Option<String>,
}

/// 日线行情（daily）
///
/// 数值字段原样透传，数据源返回 null 时输出也为 null
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    /// 交易日期（YYYYMMDD）
    pub trade_date: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    /// 成交量（手）
    pub vol: Option<f64>,
}

/// 每日指标（daily_basic）
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationPoint {
    /// 交易日期（YYYYMMDD）
    pub trade_date: String,
    /// 市盈率
    pub pe: Option<f64>,
    /// 市净率
    pub pb: Option<f64>,
    /// 股息率（%）
    pub dv_ratio: Option<f64>,
    /// 总市值（万元）
    pub total_mv: Option<f64>,
}

/// 股票详情（基本信息 + 公司信息 + 行业主题）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockDetails {
    pub name: String,
    pub industry: String,
    pub market: Option<String>,
    pub list_date: String,
    pub fullname: String,
    pub chairman: String,
    pub introduction: String,
    pub main_business: String,
    pub business_scope: String,
    pub theme: IndustryTheme,
}

/// 股价图表数据
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceData {
    pub dates: Vec<String>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub vol: Vec<Option<f64>>,
}

/// 股票查询结果
///
/// `dates` 等估值序列与 `price_data` 各自按日期升序排列，两者互不对齐
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    pub stock_info: StockDetails,
    pub dates: Vec<String>,
    pub pe: Vec<f64>,
    pub pb: Vec<f64>,
    pub dv_ratio: Vec<f64>,
    /// 总市值（亿元）
    pub total_mv: Vec<f64>,
    pub price_data: PriceData,
}
