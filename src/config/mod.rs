// ==========================================
// 月度销售指标导入 - 配置层
// ==========================================
// 职责: 日志与输出配置（不影响导入语义）
// 存储: JSON 配置文件
// ==========================================

pub mod ingest_config;

// 重导出核心配置
pub use ingest_config::{ConfigLoader, IngestConfig, LoggingConfig, OutputConfig, CONFIG_ENV_VAR};
