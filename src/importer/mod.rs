// ==========================================
// 月度销售指标导入 - 导入层
// ==========================================
// 职责: 外部文件 → 规范销售记录 + 字段级错误
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod column_resolver;
pub mod error;
pub mod file_decoder;
pub mod month_normalizer;
pub mod number_coercer;
pub mod row_mapper;
pub mod sales_importer_impl;
pub mod sales_importer_trait;

// 重导出核心类型
pub use column_resolver::{resolve_columns, ColumnMap};
pub use error::{IngestError, IngestResult, InvalidDate};
pub use file_decoder::{CsvDecoder, ExcelDecoder};
pub use month_normalizer::{normalize_month, MonthPattern};
pub use number_coercer::coerce_number;
pub use row_mapper::map_row;
pub use sales_importer_impl::{ingest, ingest_path, SalesImporterImpl};

// 重导出 Trait 接口
pub use sales_importer_trait::{FileDecoder, SalesImporter};
