//! 行情数据源抽象
//!
//! 查询服务只依赖这里的四个能力，生产环境由 Tushare 客户端实现，
//! 测试中使用内存实现替代网络请求

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Asia::Shanghai;

use crate::models::{CompanyProfile, PriceBar, StockBasic, ValuationPoint};

/// 查询窗口天数（自然日）
pub const WINDOW_DAYS: i64 = 365;

/// 查询日期窗口，日期格式为 YYYYMMDD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start_date: String,
    pub end_date: String,
}

impl DateWindow {
    /// 以指定日期为结束日，向前推 365 个自然日
    pub fn ending_on(end: NaiveDate) -> Self {
        let start = end - Duration::days(WINDOW_DAYS);
        Self {
            start_date: start.format("%Y%m%d").to_string(),
            end_date: end.format("%Y%m%d").to_string(),
        }
    }

    /// 以当前北京时间日期为结束日
    pub fn trailing_year() -> Self {
        Self::ending_on(Utc::now().with_timezone(&Shanghai).date_naive())
    }
}

/// 行情数据源
///
/// 实现需支持并发调用
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 股票基本信息，无记录时返回 `None`
    async fn stock_basic(&self, ts_code: &str) -> Result<Option<StockBasic>>;

    /// 上市公司基本信息，无记录时返回 `None`
    async fn stock_company(&self, ts_code: &str) -> Result<Option<CompanyProfile>>;

    /// 日线行情
    async fn daily(&self, ts_code: &str, window: &DateWindow) -> Result<Vec<PriceBar>>;

    /// 每日指标（估值）
    async fn daily_basic(&self, ts_code: &str, window: &DateWindow) -> Result<Vec<ValuationPoint>>;
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use anyhow::bail;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 内存数据源，记录调用次数，可配置为全部失败
    #[derive(Default)]
    pub struct FakeProvider {
        pub basic: Option<StockBasic>,
        pub company: Option<CompanyProfile>,
        pub prices: Vec<PriceBar>,
        pub valuations: Vec<ValuationPoint>,
        pub fail_with: Option<String>,
        pub calls: AtomicUsize,
    }

    impl FakeProvider {
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record_call(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                bail!("{}", message);
            }
            Ok(())
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn stock_basic(&self, _ts_code: &str) -> Result<Option<StockBasic>> {
            self.record_call()?;
            Ok(self.basic.clone())
        }

        async fn stock_company(&self, _ts_code: &str) -> Result<Option<CompanyProfile>> {
            self.record_call()?;
            Ok(self.company.clone())
        }

        async fn daily(&self, _ts_code: &str, _window: &DateWindow) -> Result<Vec<PriceBar>> {
            self.record_call()?;
            Ok(self.prices.clone())
        }

        async fn daily_basic(&self, _ts_code: &str, _window: &DateWindow) -> Result<Vec<ValuationPoint>> {
            self.record_call()?;
            Ok(self.valuations.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spans_365_calendar_days() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let window = DateWindow::ending_on(end);
        // 2024 是闰年，365 天前是 2023-03-02
        assert_eq!(window.start_date, "20230302");
        assert_eq!(window.end_date, "20240301");
    }

    #[test]
    fn test_trailing_year_format() {
        let window = DateWindow::trailing_year();
        assert_eq!(window.start_date.len(), 8);
        assert_eq!(window.end_date.len(), 8);
        assert!(window.start_date < window.end_date);
        assert!(window.end_date.chars().all(|c| c.is_ascii_digit()));
    }
}
