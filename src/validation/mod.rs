// ==========================================
// 月度销售指标导入 - 校验层
// ==========================================
// 职责: 记录进入应用状态前的结构校验
// ==========================================

pub mod schema;

pub use schema::{
    parse_records_json, validate_record, validate_records, SchemaError, SchemaViolation,
};
