//! Tushare Pro 接口响应解析
//!
//! 响应格式:
//! `{"code": 0, "msg": "", "data": {"fields": ["trade_date", ...], "items": [["20240102", ...], ...]}}`

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;

/// 接口响应
#[derive(Debug, Deserialize)]
pub struct TushareResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<TushareTable>,
}

impl TushareResponse {
    /// 校验返回码并取出数据表
    pub fn into_table(self, api_name: &str) -> Result<TushareTable> {
        if self.code != 0 {
            return Err(anyhow!(
                "Tushare 接口 {} 返回错误 ({}): {}",
                api_name,
                self.code,
                self.msg.unwrap_or_default()
            ));
        }
        self.data
            .ok_or_else(|| anyhow!("Tushare 接口 {} 响应缺少 data", api_name))
    }
}

/// 表格数据（列名 + 行）
#[derive(Debug, Default, Deserialize)]
pub struct TushareTable {
    pub fields: Vec<String>,
    #[serde(default)]
    pub items: Vec<Vec<Value>>,
}

impl TushareTable {
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.items.iter().map(move |values| Row {
            fields: &self.fields,
            values,
        })
    }

    pub fn first_row(&self) -> Option<Row<'_>> {
        self.rows().next()
    }
}

/// 单行数据视图，按列名取值
pub struct Row<'a> {
    fields: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    fn value(&self, name: &str) -> Option<&'a Value> {
        let index = self.fields.iter().position(|f| f == name)?;
        self.values.get(index)
    }

    /// 字符串字段，列不存在或为 null 时返回 `None`
    pub fn opt_str(&self, name: &str) -> Result<Option<String>> {
        match self.value(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(anyhow!("字段 {} 类型错误: {}", name, other)),
        }
    }

    /// 必填字符串字段
    pub fn str(&self, name: &str) -> Result<String> {
        self.opt_str(name)?
            .ok_or_else(|| anyhow!("缺少字段 {}", name))
    }

    /// 数值字段，列不存在或为 null 时返回 `None`
    pub fn opt_f64(&self, name: &str) -> Result<Option<f64>> {
        match self.value(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| anyhow!("字段 {} 数值无效: {}", name, n)),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| anyhow!("字段 {} 数值无效: {}", name, s)),
            Some(other) => Err(anyhow!("字段 {} 类型错误: {}", name, other)),
        }
    }
}
