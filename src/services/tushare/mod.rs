//! Tushare Pro 数据源
//!
//! 基于 HTTP JSON 接口实现 [`MarketDataProvider`](crate::services::provider::MarketDataProvider)

mod client;
mod table;

pub use client::TushareClient;
