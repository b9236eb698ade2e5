//! DeepL 客户端核心模块
//!
//! 构造带查询参数的 GET 请求，解析响应，并在启用时先尝试备用服务。

use crate::alternative::{AlternativeTranslator, DeepLXTranslator};
use crate::error::{DeeplError, Result};
use crate::types::{ClientConfig, ResolvedParams, TranslateParams, TranslateResponse};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use urlencoding::encode;

/// DeepL API 版本路径
pub const API_VERSION: &str = "v1";

/// DeepL 客户端
///
/// 配置在构造后不可变，实例可以在多个任务间共享。
///
/// # 示例
///
/// ```rust,no_run
/// use deepl_client::{ClientConfig, DeeplClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DeeplClient::new(ClientConfig::new("your-auth-key"))?;
///
///     let result = client.translate("Hello, world!", "DE").await?;
///     println!("Translation: {}", result);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct DeeplClient {
    client: Client,
    config: ClientConfig,
    alternative: Option<Arc<dyn AlternativeTranslator>>,
    custom_alternative: bool,
}

impl DeeplClient {
    /// 创建新的客户端实例
    ///
    /// `auth_key` 为空时返回 `DeeplError::InvalidConfig`。启用备用模式时
    /// 使用 `alternative_api_url` 创建 DeepLX 备用服务。
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.auth_key.trim().is_empty() {
            return Err(DeeplError::InvalidConfig("auth_key must not be empty".to_string()));
        }

        let client = Client::new();
        let alternative = default_alternative(&client, &config);

        Ok(Self {
            client,
            config,
            alternative,
            custom_alternative: false,
        })
    }

    /// 替换底层 HTTP 客户端，超时等传输设置在这里配置
    ///
    /// 默认的 DeepLX 备用服务会随之改用同一个客户端；通过
    /// `with_alternative` 安装的备用服务保持不变。
    pub fn with_http_client(mut self, client: Client) -> Self {
        if !self.custom_alternative {
            self.alternative = default_alternative(&client, &self.config);
        }
        self.client = client;
        self
    }

    /// 安装自定义备用服务并启用备用模式
    pub fn with_alternative(mut self, alternative: Arc<dyn AlternativeTranslator>) -> Self {
        self.config.use_alternative_provider = true;
        self.alternative = Some(alternative);
        self.custom_alternative = true;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 翻译文本到目标语言，其余参数取配置默认值
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        self.translate_with(text, &TranslateParams::target(target_lang))
            .await
    }

    /// 使用单次调用参数翻译文本
    ///
    /// # 返回
    ///
    /// * `Ok(String)` - 第一条翻译结果
    /// * `Err(DeeplError)` - 传输失败、响应结构不符或缺少目标语言
    pub async fn translate_with(&self, text: &str, params: &TranslateParams) -> Result<String> {
        let resolved = params.resolve(&self.config);
        let target_lang = resolved
            .target_lang
            .as_deref()
            .ok_or(DeeplError::MissingParameter("target_lang"))?;

        if let Some(alternative) = self.fallback_provider() {
            // 备用服务的错误在这里被丢弃，随后总是走主接口
            let source_lang = resolved.source_lang.as_deref().map(str::to_uppercase);
            match alternative
                .translate(text, &target_lang.to_uppercase(), source_lang.as_deref())
                .await
            {
                Ok(result) => return Ok(result.translation),
                Err(e) => debug!(
                    "备用服务 {} 翻译失败，改用主接口: {}",
                    alternative.name(),
                    e
                ),
            }
        }

        self.translate_primary(text, &resolved).await
    }

    /// 查询账户用量，原样返回 JSON
    pub async fn usage(&self) -> Result<serde_json::Value> {
        debug!("查询用量: {}", self.endpoint("usage"));
        let response = self
            .client
            .get(self.usage_url())
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = read_body(response).await?;

        serde_json::from_str(&body).map_err(|_| DeeplError::ResponseShape { status })
    }

    fn fallback_provider(&self) -> Option<&Arc<dyn AlternativeTranslator>> {
        if self.config.use_alternative_provider {
            self.alternative.as_ref()
        } else {
            None
        }
    }

    async fn translate_primary(&self, text: &str, resolved: &ResolvedParams) -> Result<String> {
        debug!(
            "发送翻译请求到: {}，文本长度: {} 字符",
            self.endpoint("translate"),
            text.len()
        );

        let response = self
            .client
            .get(self.translate_url(text, resolved))
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = read_body(response).await?;

        serde_json::from_str::<TranslateResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.translations.into_iter().next())
            .map(|first| first.text)
            .filter(|text| !text.is_empty())
            .ok_or(DeeplError::ResponseShape { status })
    }

    fn endpoint(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.host.trim_end_matches('/'),
            API_VERSION,
            name
        )
    }

    pub(crate) fn translate_url(&self, text: &str, resolved: &ResolvedParams) -> String {
        let mut url = format!(
            "{}?auth_key={}&text={}",
            self.endpoint("translate"),
            encode(&self.config.auth_key),
            encode(text)
        );
        for (key, value) in resolved.query_pairs() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&encode(value));
        }
        url
    }

    pub(crate) fn usage_url(&self) -> String {
        format!(
            "{}?auth_key={}",
            self.endpoint("usage"),
            encode(&self.config.auth_key)
        )
    }
}

fn default_alternative(
    client: &Client,
    config: &ClientConfig,
) -> Option<Arc<dyn AlternativeTranslator>> {
    config.use_alternative_provider.then(|| {
        Arc::new(DeepLXTranslator::with_client(
            client.clone(),
            config.alternative_api_url.clone(),
        )) as Arc<dyn AlternativeTranslator>
    })
}

/// 请求 URL 带有 auth_key，包装前先去掉
fn transport(error: reqwest::Error) -> DeeplError {
    DeeplError::Transport(error.without_url())
}

async fn read_body(response: reqwest::Response) -> Result<String> {
    response
        .error_for_status()
        .map_err(transport)?
        .text()
        .await
        .map_err(transport)
}
