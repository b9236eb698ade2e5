//! # DeepL Client
//!
//! 一个精简的 DeepL 翻译接口客户端：构造带查询参数的 GET 请求并返回解析后的结果。
//!
//! ## 主要特性
//!
//! - **参数合并**: 单次调用参数覆盖配置默认值，未设置的参数不会出现在请求中
//! - **备用服务**: 可选地先尝试 DeepLX 等备用服务，失败时自动回落到 DeepL 主接口
//! - **统一错误**: 传输错误与响应结构错误使用同一套错误类型
//! - **配置灵活**: 支持TOML配置文件和程序化配置
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use deepl_client::{ClientConfig, DeeplClient, TranslateParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig {
//!         tag_handling: Some("xml".to_string()),
//!         ..ClientConfig::new("your-auth-key")
//!     };
//!
//!     let client = DeeplClient::new(config)?;
//!     let result = client
//!         .translate_with("Hello, <b>world</b>!", &TranslateParams::target("DE").source_lang("EN"))
//!         .await?;
//!     println!("Translation: {}", result);
//!
//!     let usage = client.usage().await?;
//!     println!("Usage: {}", usage);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [deepl]
//! auth_key = "your-auth-key"
//! use_alternative_provider = true
//! target_lang = "DE"
//! host = "https://api.deepl.com"
//! alternative_api_url = "http://localhost:1188/translate"
//! ```

pub mod alternative;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use alternative::{AlternativeTranslator, DeepLXTranslator};
pub use client::{DeeplClient, API_VERSION};
pub use config::DeeplLibConfig;
pub use error::{DeeplError, Result};
pub use types::{
    AlternativeTranslation, ClientConfig, ResolvedParams, TranslateParams, TranslateResponse,
    Translation,
};
