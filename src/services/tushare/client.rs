//! Tushare Pro 客户端
//!
//! 对接 http://api.tushare.pro ，实现 stock_basic / stock_company / daily / daily_basic 四个接口

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::table::{TushareResponse, TushareTable};
use crate::config::TushareConfig;
use crate::models::{CompanyProfile, PriceBar, StockBasic, ValuationPoint};
use crate::services::provider::{DateWindow, MarketDataProvider};

const STOCK_BASIC_FIELDS: &str = "name,industry,market,list_date,fullname";
const STOCK_COMPANY_FIELDS: &str = "introduction,main_business,business_scope,chairman";
const DAILY_FIELDS: &str = "trade_date,open,high,low,close,vol";
const DAILY_BASIC_FIELDS: &str = "ts_code,trade_date,pe,pb,dv_ratio,total_mv";

/// 接口请求体
#[derive(Debug, Serialize)]
struct TushareRequest<'a> {
    api_name: &'a str,
    token: &'a str,
    params: BTreeMap<&'a str, &'a str>,
    fields: &'a str,
}

/// Tushare Pro 客户端
///
/// 内部的 `reqwest::Client` 可在请求间共享
pub struct TushareClient {
    /// HTTP 客户端
    client: Client,
    /// 接口地址
    api_url: String,
    /// 接口 token
    token: String,
}

impl TushareClient {
    /// 根据配置创建客户端
    pub fn new(config: &TushareConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
        })
    }

    /// 调用 Tushare 接口，返回数据表
    async fn query(&self, api_name: &str, params: &[(&str, &str)], fields: &str) -> Result<TushareTable> {
        let request = TushareRequest {
            api_name,
            token: &self.token,
            params: params.iter().copied().collect(),
            fields,
        };

        log::debug!("📡 请求 Tushare 接口 {} 参数: {:?}", api_name, request.params);

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("请求 Tushare 接口 {} 失败: {}", api_name, response.status()));
        }

        let body: TushareResponse = response.json().await?;
        let table = body.into_table(api_name)?;
        log::debug!("Tushare 接口 {} 返回 {} 行", api_name, table.items.len());
        Ok(table)
    }
}

#[async_trait]
impl MarketDataProvider for TushareClient {
    async fn stock_basic(&self, ts_code: &str) -> Result<Option<StockBasic>> {
        let table = self
            .query("stock_basic", &[("ts_code", ts_code)], STOCK_BASIC_FIELDS)
            .await?;
        parse_stock_basic(&table)
    }

    async fn stock_company(&self, ts_code: &str) -> Result<Option<CompanyProfile>> {
        let table = self
            .query("stock_company", &[("ts_code", ts_code)], STOCK_COMPANY_FIELDS)
            .await?;
        parse_stock_company(&table)
    }

    async fn daily(&self, ts_code: &str, window: &DateWindow) -> Result<Vec<PriceBar>> {
        let params = [
            ("ts_code", ts_code),
            ("start_date", window.start_date.as_str()),
            ("end_date", window.end_date.as_str()),
        ];
        let table = self.query("daily", &params, DAILY_FIELDS).await?;
        parse_daily(&table)
    }

    async fn daily_basic(&self, ts_code: &str, window: &DateWindow) -> Result<Vec<ValuationPoint>> {
        let params = [
            ("ts_code", ts_code),
            ("start_date", window.start_date.as_str()),
            ("end_date", window.end_date.as_str()),
        ];
        let table = self.query("daily_basic", &params, DAILY_BASIC_FIELDS).await?;
        parse_daily_basic(&table)
    }
}

/// 解析股票基本信息，取第一行
fn parse_stock_basic(table: &TushareTable) -> Result<Option<StockBasic>> {
    let Some(row) = table.first_row() else {
        return Ok(None);
    };

    Ok(Some(StockBasic {
        name: row.str("name")?,
        industry: row.opt_str("industry")?,
        market: row.opt_str("market")?,
        list_date: row.opt_str("list_date")?,
        fullname: row.opt_str("fullname")?,
    }))
}

/// 解析上市公司信息，取第一行
fn parse_stock_company(table: &TushareTable) -> Result<Option<CompanyProfile>> {
    let Some(row) = table.first_row() else {
        return Ok(None);
    };

    Ok(Some(CompanyProfile {
        chairman: row.opt_str("chairman")?,
        introduction: row.opt_str("introduction")?,
        main_business: row.opt_str("main_business")?,
        business_scope: row.opt_str("business_scope")?,
    }))
}

fn parse_daily(table: &TushareTable) -> Result<Vec<PriceBar>> {
    table
        .rows()
        .map(|row| {
            Ok(PriceBar {
                trade_date: row.str("trade_date")?,
                open: row.opt_f64("open")?,
                high: row.opt_f64("high")?,
                low: row.opt_f64("low")?,
                close: row.opt_f64("close")?,
                vol: row.opt_f64("vol")?,
            })
        })
        .collect()
}

fn parse_daily_basic(table: &TushareTable) -> Result<Vec<ValuationPoint>> {
    table
        .rows()
        .map(|row| {
            Ok(ValuationPoint {
                trade_date: row.str("trade_date")?,
                pe: row.opt_f64("pe")?,
                pb: row.opt_f64("pb")?,
                dv_ratio: row.opt_f64("dv_ratio")?,
                total_mv: row.opt_f64("total_mv")?,
            })
        })
        .collect()
}
