//! 通用 API 响应模型
//!
//! 定义统一的 API 响应格式，与前端约定：
//! - 成功: `{"success": true, "data": ...}`
//! - 失败: `{"success": false, "error": "..."}`

use serde::{Deserialize, Serialize};

/// 服务器内部错误时返回给前端的统一提示
pub const INTERNAL_ERROR_MESSAGE: &str = "服务器内部错误，请稍后重试";

/// 统一 API 响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据（成功时有值）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 错误信息（失败时有值）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 创建错误响应
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
