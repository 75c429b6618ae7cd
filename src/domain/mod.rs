// ==========================================
// 月度销售指标导入 - 领域模型层
// ==========================================
// 职责: 定义记录、字段、错误码等领域类型
// 红线: 不含文件解析逻辑，不含全局状态
// ==========================================

pub mod field;
pub mod sales;
pub mod sample;
pub mod types;

// 重导出核心类型
pub use field::SalesField;
pub use sales::{CellValue, FieldError, IngestOutcome, RawRow, SalesRecord};
pub use sample::sample_records;
pub use types::{ErrorCode, FileFormat};
