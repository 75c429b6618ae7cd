// ==========================================
// 月度销售指标导入 - 核心库
// ==========================================
// 职责: CSV/Excel → 规范月度销售记录 + 逐行字段错误
// 系统定位: 纯函数式导入管道（无全局状态，调用方持有结果）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与类型
pub mod domain;

// 导入层 - 文件解码与行映射
pub mod importer;

// 校验层 - 记录结构校验
pub mod validation;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    sample_records, CellValue, ErrorCode, FieldError, FileFormat, IngestOutcome, SalesField,
    SalesRecord,
};

// 导入
pub use importer::{
    ingest, ingest_path, normalize_month, IngestError, IngestResult, SalesImporter,
    SalesImporterImpl,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "月度销售指标导入";

// 支持的扩展名
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];
