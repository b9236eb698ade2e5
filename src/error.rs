//! 错误处理模块
//!
//! 定义客户端中使用的错误类型。主通道与备用通道共用同一套错误分类。

use thiserror::Error;

/// 客户端错误类型
///
/// # 变体说明
///
/// * `Transport` - HTTP请求本身失败（DNS、连接、超时、非2xx状态）
/// * `ResponseShape` - 请求成功但响应体缺少 `translations[0].text`
/// * `InvalidConfig` - 配置无效，例如 `auth_key` 为空
/// * `MissingParameter` - 调用参数和默认配置都没有提供必需字段
/// * `ApiError` - 备用服务返回的错误代码
/// * `Alternative` - 备用服务的其他失败
/// * `Io` / `TomlDe` / `TomlSer` - 配置文件读写错误
#[derive(Debug, Error)]
pub enum DeeplError {
    /// HTTP请求错误
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// 响应结构不符合预期
    #[error("unexpected response shape (HTTP {status})")]
    ResponseShape {
        /// 收到的HTTP状态码
        status: u16,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// API响应错误
    #[error("API error {code}: {message}")]
    ApiError {
        /// 错误代码
        code: i32,
        /// 错误消息
        message: String,
    },
    #[error("alternative provider error: {0}")]
    Alternative(String),
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// 结果类型别名
///
/// 简化返回类型，使用 `DeeplError` 作为错误类型。
///
/// # 示例
///
/// ```rust
/// use deepl_client::{Result, DeeplError};
///
/// fn require_key(key: &str) -> Result<&str> {
///     if key.is_empty() {
///         return Err(DeeplError::InvalidConfig("auth_key is empty".to_string()));
///     }
///     Ok(key)
/// }
///
/// assert!(require_key("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, DeeplError>;
