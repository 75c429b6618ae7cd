// ==========================================
// 月度销售指标导入 - 记录结构校验
// ==========================================
// 职责: 接收记录进入应用状态前的第二道校验
//       （文件导入结果、手工编辑的 JSON 文本共用）
// 规则: month 非空；四个数值字段为有限数
// ==========================================

use crate::domain::field::SalesField;
use crate::domain::sales::SalesRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// SchemaViolation - 结构违规
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaViolation {
    /// 记录在数组中的下标（单条校验时为 None）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index: Option<usize>,
    pub field: SalesField,
    pub message: String,
}

/// JSON 数据校验错误
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("JSON 格式错误: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("数据验证失败: {}", summarize(.0))]
    Invalid(Vec<SchemaViolation>),
}

fn summarize(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| match v.index {
            Some(idx) => format!("[{}].{}: {}", idx, v.field, v.message),
            None => format!("{}: {}", v.field, v.message),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// 校验单条记录
pub fn validate_record(record: &SalesRecord) -> Result<(), Vec<SchemaViolation>> {
    let mut violations = Vec::new();

    if record.month.is_empty() {
        violations.push(SchemaViolation {
            index: None,
            field: SalesField::Month,
            message: "月份不能为空".to_string(),
        });
    }

    for field in SalesField::NUMERIC {
        let finite = record.value_of(field).is_some_and(f64::is_finite);
        if !finite {
            violations.push(SchemaViolation {
                index: None,
                field,
                message: format!("{}必须是有效数字", field.label()),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// 批量校验（违规附带记录下标）
pub fn validate_records(records: &[SalesRecord]) -> Result<(), Vec<SchemaViolation>> {
    let violations: Vec<SchemaViolation> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| validate_record(record).err().map(|v| (idx, v)))
        .flat_map(|(idx, violations)| {
            violations.into_iter().map(move |v| SchemaViolation {
                index: Some(idx),
                ..v
            })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// 解析并校验 JSON 记录数组
///
/// # 返回
/// - Ok(Vec<SalesRecord>): 解析且校验通过
/// - Err(SchemaError::Syntax): JSON 语法或字段类型错误
/// - Err(SchemaError::Invalid): 结构违规
pub fn parse_records_json(text: &str) -> Result<Vec<SalesRecord>, SchemaError> {
    let records: Vec<SalesRecord> = serde_json::from_str(text)?;
    validate_records(&records).map_err(SchemaError::Invalid)?;
    Ok(records)
}
