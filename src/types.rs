//! 类型定义模块
//!
//! 定义客户端配置、单次调用参数以及各个接口的请求/响应结构。

use serde::{Deserialize, Serialize};

/// DeepL 官方接口地址
pub const DEFAULT_HOST: &str = "https://api.deepl.com";

/// 默认的 DeepLX 备用接口地址
pub const DEFAULT_ALTERNATIVE_API_URL: &str = "http://localhost:1188/translate";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_alternative_api_url() -> String {
    DEFAULT_ALTERNATIVE_API_URL.to_string()
}

/// 客户端配置
///
/// 除 `auth_key` 外，其余语言/格式字段都是默认值，单次调用可以覆盖。
///
/// # 字段说明
///
/// * `auth_key` - DeepL 分配的认证密钥，必填
/// * `use_alternative_provider` - 是否先尝试备用服务
/// * `tag_handling` - 标签处理方式，例如 "xml"
/// * `split_sentences` - 是否先拆分句子
/// * `preserve_formatting` - 是否保留原有格式
/// * `target_lang` - 默认目标语言
/// * `source_lang` - 默认源语言
/// * `host` - 主接口地址
/// * `alternative_api_url` - 备用 DeepLX 接口地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// DeepL 认证密钥
    #[serde(default)]
    pub auth_key: String,
    /// 是否先尝试备用服务
    #[serde(default)]
    pub use_alternative_provider: bool,
    /// 默认的标签处理方式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_handling: Option<String>,
    /// 默认的句子拆分设置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_sentences: Option<String>,
    /// 默认的格式保留设置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_formatting: Option<String>,
    /// 默认目标语言
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    /// 默认源语言，未设置时由服务端自动检测
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    /// 主接口地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 备用 DeepLX 接口地址
    #[serde(default = "default_alternative_api_url")]
    pub alternative_api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_key: String::new(),
            use_alternative_provider: false,
            tag_handling: None,
            split_sentences: None,
            preserve_formatting: None,
            target_lang: None,
            source_lang: None,
            host: default_host(),
            alternative_api_url: default_alternative_api_url(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration holding only the auth key
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            ..Self::default()
        }
    }
}

/// 单次翻译调用的可选参数
///
/// 未设置的字段回落到 `ClientConfig` 中的同名默认值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslateParams {
    /// 目标语言
    pub target_lang: Option<String>,
    /// 源语言
    pub source_lang: Option<String>,
    /// 标签处理方式
    pub tag_handling: Option<String>,
    /// 句子拆分设置
    pub split_sentences: Option<String>,
    /// 格式保留设置
    pub preserve_formatting: Option<String>,
}

impl TranslateParams {
    /// 只指定目标语言的参数
    ///
    /// # 示例
    ///
    /// ```rust
    /// use deepl_client::TranslateParams;
    ///
    /// let params = TranslateParams::target("DE").source_lang("EN");
    /// assert_eq!(params.target_lang.as_deref(), Some("DE"));
    /// assert_eq!(params.tag_handling, None);
    /// ```
    pub fn target(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: Some(target_lang.into()),
            ..Self::default()
        }
    }

    /// 设置源语言
    pub fn source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    /// 设置标签处理方式，例如 "xml" 或 "html"
    pub fn tag_handling(mut self, tag_handling: impl Into<String>) -> Self {
        self.tag_handling = Some(tag_handling.into());
        self
    }

    /// 设置句子拆分方式，例如 "0"、"1" 或 "nonewlines"
    pub fn split_sentences(mut self, split_sentences: impl Into<String>) -> Self {
        self.split_sentences = Some(split_sentences.into());
        self
    }

    /// 设置是否保留格式，"0" 或 "1"
    pub fn preserve_formatting(mut self, preserve_formatting: impl Into<String>) -> Self {
        self.preserve_formatting = Some(preserve_formatting.into());
        self
    }

    /// 合并调用参数与配置默认值
    ///
    /// 每个字段取 `调用值 ?? 默认值 ?? 缺省`，空字符串视为缺省。
    pub fn resolve(&self, defaults: &ClientConfig) -> ResolvedParams {
        ResolvedParams {
            target_lang: merge(&self.target_lang, &defaults.target_lang),
            source_lang: merge(&self.source_lang, &defaults.source_lang),
            tag_handling: merge(&self.tag_handling, &defaults.tag_handling),
            split_sentences: merge(&self.split_sentences, &defaults.split_sentences),
            preserve_formatting: merge(&self.preserve_formatting, &defaults.preserve_formatting),
        }
    }
}

fn merge(per_call: &Option<String>, default: &Option<String>) -> Option<String> {
    per_call
        .as_deref()
        .filter(|v| !v.is_empty())
        .or_else(|| default.as_deref().filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// 合并后的实际请求参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParams {
    pub target_lang: Option<String>,
    pub source_lang: Option<String>,
    pub tag_handling: Option<String>,
    pub split_sentences: Option<String>,
    pub preserve_formatting: Option<String>,
}

impl ResolvedParams {
    /// 需要写入查询串的键值对，缺省字段不会出现
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("target_lang", &self.target_lang),
            ("source_lang", &self.source_lang),
            ("tag_handling", &self.tag_handling),
            ("split_sentences", &self.split_sentences),
            ("preserve_formatting", &self.preserve_formatting),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// `/v1/translate` 的响应体
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub text: String,
}

/// 备用服务的翻译结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeTranslation {
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeepLXRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct DeepLXResponse {
    pub code: i32,
    #[serde(default)]
    pub data: String,
}
