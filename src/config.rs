//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。

use crate::error::Result;
use crate::types::ClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 配置文件的默认查找位置，按顺序尝试
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "deepl-config.toml",
    "config.toml",
    ".deepl-config.toml",
];

/// 库配置结构
///
/// 对应配置文件中的 `[deepl]` 表，支持从TOML文件加载和保存。
///
/// # 示例
///
/// ```rust
/// use deepl_client::DeeplLibConfig;
///
/// let config: DeeplLibConfig = toml::from_str(r#"
/// [deepl]
/// auth_key = "your-key"
/// target_lang = "DE"
/// "#).unwrap();
///
/// assert_eq!(config.deepl.target_lang.as_deref(), Some("DE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeeplLibConfig {
    /// 客户端配置
    #[serde(default)]
    pub deepl: ClientConfig,
}

impl DeeplLibConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DeeplLibConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from multiple possible locations
    pub fn load_from_default_locations() -> Self {
        Self::load_from_locations(&DEFAULT_CONFIG_PATHS)
    }

    /// Load the first readable configuration among `paths`, or defaults
    pub fn load_from_locations<P: AsRef<Path>>(paths: &[P]) -> Self {
        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        info!("Loaded configuration from: {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        info!("No configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let example_config = Self {
            deepl: ClientConfig {
                auth_key: "your-auth-key".to_string(),
                target_lang: Some("DE".to_string()),
                ..ClientConfig::default()
            },
        };
        example_config.save_to_file(path)
    }
}
