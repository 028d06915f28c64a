//! 应用级配置: 日志与插值后端.
//!
//! 配置文件为 JSON, 缺省的段落取默认值:
//!
//! ```json
//! {
//!     "logging": { "level": "debug", "directory": "data/logs" },
//!     "interp": { "backend": "accelerated" }
//! }
//! ```

use std::path::Path;

use hevc_mc_core::{McError, McResult};
use hevc_mc_interp::{BackendKind, InterpConfig};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// 覆盖插值后端的环境变量
pub const BACKEND_ENV: &str = "HEVC_MC_BACKEND";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub interp: InterpConfig,
}

impl AppConfig {
    /// 从 JSON 文本解析
    pub fn from_json_str(text: &str) -> McResult<Self> {
        serde_json::from_str(text).map_err(|e| McError::InvalidConfig(format!("JSON 解析失败: {e}")))
    }

    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> McResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        debug!("已加载配置: path={}, backend={}", path.display(), config.interp.backend);
        Ok(config)
    }

    /// 用环境变量覆盖后端选择 (未设置时保持不变)
    pub fn apply_env(&mut self) -> McResult<()> {
        if let Ok(value) = std::env::var(BACKEND_ENV) {
            self.apply_backend_override(&value)?;
        }
        Ok(())
    }

    pub(crate) fn apply_backend_override(&mut self, value: &str) -> McResult<()> {
        let backend: BackendKind = value.parse()?;
        debug!("{BACKEND_ENV} 覆盖插值后端: {} -> {backend}", self.interp.backend);
        self.interp.backend = backend;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AppConfig::from_json_str("{}").expect("空配置应可解析");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.interp.backend, BackendKind::Auto);
    }

    #[test]
    fn test_full_json() {
        let config = AppConfig::from_json_str(
            r#"{"logging":{"level":"warn","ansi":false},"interp":{"backend":"reference"}}"#,
        )
        .expect("解析完整配置失败");
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.ansi);
        assert_eq!(config.interp.backend, BackendKind::Reference);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = AppConfig::from_json_str(r#"{"interp":{"backend":"gpu"}}"#);
        assert!(matches!(err, Err(McError::InvalidConfig(_))), "未知后端应报配置错误");
    }

    #[test]
    fn test_backend_override() {
        let mut config = AppConfig::default();
        config
            .apply_backend_override("reference")
            .expect("覆盖后端失败");
        assert_eq!(config.interp.backend, BackendKind::Reference);
        assert!(config.apply_backend_override("fpga").is_err());
        assert_eq!(config.interp.backend, BackendKind::Reference, "失败时不应修改配置");
    }
}
