//! 备用翻译服务模块
//!
//! 定义备用服务的接口，并提供基于 DeepLX 的默认实现。

use crate::error::{DeeplError, Result};
use crate::types::{AlternativeTranslation, DeepLXRequest, DeepLXResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// 备用翻译服务
///
/// 客户端在启用备用模式时先调用它。传入的语言代码已经转换为大写。
#[async_trait]
pub trait AlternativeTranslator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<AlternativeTranslation>;

    /// 服务名称，用于日志
    fn name(&self) -> &str;
}

/// 基于 DeepLX 的备用服务
///
/// # 示例
///
/// ```rust
/// use deepl_client::DeepLXTranslator;
///
/// let translator = DeepLXTranslator::new("http://localhost:1188/translate");
/// assert_eq!(translator.api_url(), "http://localhost:1188/translate");
/// ```
#[derive(Debug, Clone)]
pub struct DeepLXTranslator {
    client: Client,
    api_url: String,
}

impl DeepLXTranslator {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl AlternativeTranslator for DeepLXTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<AlternativeTranslation> {
        let request = DeepLXRequest {
            text: text.to_string(),
            source_lang: source_lang.unwrap_or("auto").to_string(),
            target_lang: target_lang.to_string(),
        };

        debug!("发送DeepLX翻译请求到: {}", self.api_url);
        let response = self
            .client
            .post(&self.api_url)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "无法读取错误信息".to_string());
            return Err(DeeplError::ApiError {
                code: i32::from(status.as_u16()),
                message: format!("DeepLX API请求失败: {} - {}", status, error_text),
            });
        }

        let response_text = response.text().await?;
        parse_deeplx_body(&response_text).map(|translation| AlternativeTranslation { translation })
    }

    fn name(&self) -> &str {
        "deeplx"
    }
}

fn parse_deeplx_body(body: &str) -> Result<String> {
    if let Ok(result) = serde_json::from_str::<DeepLXResponse>(body) {
        return if result.code != 200 {
            Err(DeeplError::ApiError {
                code: result.code,
                message: format!("DeepLX翻译失败，返回代码: {}", result.code),
            })
        } else if result.data.is_empty() {
            Err(DeeplError::Alternative("DeepLX返回了空的翻译结果".to_string()))
        } else {
            Ok(result.data)
        };
    }

    let json_value = serde_json::from_str::<serde_json::Value>(body)
        .map_err(|_| DeeplError::Alternative(format!("无法解析JSON响应: {}", body)))?;

    json_value
        .get("translation")
        .or_else(|| json_value.get("translated_text"))
        .or_else(|| json_value.get("result"))
        .or_else(|| json_value.get("data"))
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            DeeplError::Alternative(format!("无法从JSON响应中提取翻译结果: {}", body))
        })
}
