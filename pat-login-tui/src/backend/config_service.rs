//! 配置服务
//!
//! 配置文件位于 `<config_dir>/pat-login/config.toml`，缺失时使用默认值。
//! 只读：程序从不创建或改写该文件，由用户自行编写。

use std::fs;
use std::path::PathBuf;

use pat_login_core::constants::DEFAULT_HOSTNAME;
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置目录名
const APP_DIR: &str = "pat-login";

/// 配置文件名
const CONFIG_FILE: &str = "config.toml";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 登录表单预填的主机名
    pub default_hostname: String,
    /// 界面语言（"en-US" / "zh-CN"）
    pub language: String,
    /// 主题（"dark" / "light"）
    pub theme: String,
}

impl AppConfig {
    /// 解析后的主题，无法识别时回退到默认主题
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default", self.theme);
            Theme::default()
        })
    }

    /// 解析后的语言，无法识别时回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using default", self.language);
            Language::default()
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_hostname: DEFAULT_HOSTNAME.to_string(),
            language: Language::default().code().to_string(),
            theme: "dark".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 加载配置，失败时回退到默认值
///
/// 返回配置以及是否成功读取。
pub fn load_or_default(service: &dyn ConfigService) -> (AppConfig, bool) {
    match service.load() {
        Ok(config) => (config, true),
        Err(e) => {
            log::warn!("{e}, using defaults");
            (AppConfig::default(), false)
        }
    }
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用指定的配置文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用系统配置目录下的默认路径
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}
