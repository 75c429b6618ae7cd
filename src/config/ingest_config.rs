// ==========================================
// 月度销售指标导入 - 运行配置
// ==========================================
// 存储: JSON 文件（缺省项取默认值）
// 查找顺序: 显式路径 → 环境变量 SALES_INGEST_CONFIG
//           → <用户配置目录>/sales-ingest/config.json → 内置默认
// ==========================================

use crate::importer::error::{IngestError, IngestResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "SALES_INGEST_CONFIG";

// ==========================================
// LoggingConfig - 日志配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter 语法，RUST_LOG 优先
    pub filter: String,
    /// 输出 JSON 格式日志
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

// ==========================================
// OutputConfig - 输出配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON 结果是否缩进
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// 按输出配置渲染 JSON
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> IngestResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

// ==========================================
// IngestConfig - 顶层配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl IngestConfig {
    /// 从 JSON 文件读取
    pub fn from_file(path: &Path) -> IngestResult<Self> {
        let config_error = |message: String| IngestError::Config {
            path: path.display().to_string(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| config_error(e.to_string()))
    }
}

// ==========================================
// ConfigLoader - 配置加载
// ==========================================
pub struct ConfigLoader;

impl ConfigLoader {
    /// 用户配置目录下的默认路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sales-ingest").join("config.json"))
    }

    /// 按查找顺序加载配置
    ///
    /// # 参数
    /// - explicit: 命令行指定的路径（必须存在）
    ///
    /// # 返回
    /// - Ok(IngestConfig): 找到的配置或默认配置
    /// - Err: 指定的配置文件无法读取或格式错误
    pub fn load(explicit: Option<&Path>) -> IngestResult<IngestConfig> {
        if let Some(path) = explicit {
            return IngestConfig::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return IngestConfig::from_file(Path::new(&path));
            }
        }

        match Self::default_path() {
            Some(path) if path.exists() => IngestConfig::from_file(&path),
            _ => Ok(IngestConfig::default()),
        }
    }
}
