//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，环境变量可覆盖其中的关键项

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// Tushare 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TushareConfig {
    /// Tushare Pro 接口 token
    #[serde(default)]
    pub token: String,
    /// 接口地址
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Tushare 配置
    #[serde(default)]
    pub tushare: TushareConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 前端静态文件目录
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_api_url() -> String { "http://api.tushare.pro".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for TushareConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tushare: TushareConfig::default(),
            log: LogConfig::default(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值，最后应用环境变量覆盖
    ///
    /// 日志系统此时尚未初始化，加载过程的提示由调用方在初始化后输出
    pub fn load() -> (Self, String) {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        return (config.with_env_overrides(), format!("从 {} 加载配置成功", path));
                    }
                    Err(e) => {
                        return (
                            Self::default().with_env_overrides(),
                            format!("加载配置文件 {} 失败: {}，使用默认配置", path, e),
                        );
                    }
                }
            }
        }

        (Self::default().with_env_overrides(), "使用默认配置".to_string())
    }

    /// 应用环境变量覆盖: TUSHARE_TOKEN, HOST, PORT
    fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("TUSHARE_TOKEN").filter(|t| !t.is_empty()) {
            self.tushare.token = token;
        }
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        self
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 9000}, "tushare": {"token": "abc"}}"#).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.tushare.token, "abc");
        assert_eq!(config.tushare.api_url, "http://api.tushare.pro");
        assert_eq!(config.tushare.timeout_secs, 30);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default().apply_overrides(|key| match key {
            "TUSHARE_TOKEN" => Some("from-env".to_string()),
            "PORT" => Some("8081".to_string()),
            "HOST" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.tushare.token, "from-env");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let config = AppConfig::default().apply_overrides(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.server.port, 5000);
    }
}
