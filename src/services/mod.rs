//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod provider;       // 行情数据源抽象
pub mod stock_service;  // 股票查询服务
pub mod tushare;        // Tushare Pro 数据源
