// ==========================================
// 月度销售指标导入 - 销售记录领域模型
// ==========================================
// 职责: 规范记录、字段级错误、原始单元格与导入结果
// 红线: 记录要么完整有效，要么不产生；错误是值，不作为异常抛出
// ==========================================

use crate::domain::field::SalesField;
use crate::domain::types::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// SalesRecord - 规范销售记录
// ==========================================
// 不变量: month 形如 "<1-12>月"；四个数值字段均为有限数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub month: String,  // 月份标签，如 "1月"
    pub actual: f64,    // 实际值（单位: 万）
    pub last_year: f64, // 去年同期值（单位: 万）
    pub mom: f64,       // 环比（%）
    pub yoy: f64,       // 同比（%）
}

impl SalesRecord {
    /// 按语义字段读取数值（month 返回 None）
    pub fn value_of(&self, field: SalesField) -> Option<f64> {
        match field {
            SalesField::Month => None,
            SalesField::Actual => Some(self.actual),
            SalesField::LastYear => Some(self.last_year),
            SalesField::Mom => Some(self.mom),
            SalesField::Yoy => Some(self.yoy),
        }
    }
}

// ==========================================
// FieldError - 导入错误（结构性或字段级）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// 源数据行序号（从 1 开始，不含表头）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub row: Option<usize>,
    /// 出错的语义字段
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<SalesField>,
    pub message: String,
    pub code: ErrorCode,
}

impl FieldError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            row: None,
            field: None,
            message: message.into(),
            code,
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn on_field(mut self, field: SalesField) -> Self {
        self.field = Some(field);
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(row) = self.row {
            write!(f, "第{}行 ", row)?;
        }
        if let Some(field) = self.field {
            write!(f, "[{}] ", field)?;
        }
        write!(f, "{} ({})", self.message, self.code)
    }
}

// ==========================================
// CellValue - 原始单元格值
// ==========================================
// CSV 单元格均为 Text；Excel 数值单元格为 Number
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// 文本单元格（去除首尾空白，空串视为 Empty）
    pub fn text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.is_empty(),
        }
    }

    /// 渲染为文本（用于月份解析与错误信息）
    pub fn render(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// 原始行: 表头 → 单元格
pub type RawRow = HashMap<String, CellValue>;

// ==========================================
// IngestOutcome - 单个文件的导入结果
// ==========================================
// records 与 errors 互相独立: 有错误不代表无记录，反之亦然
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub records: Vec<SalesRecord>,
    pub errors: Vec<FieldError>,
}

impl IngestOutcome {
    /// 仅包含错误、不含记录的结果（结构性失败）
    pub fn failed(errors: Vec<FieldError>) -> Self {
        Self {
            records: Vec::new(),
            errors,
        }
    }

    /// 单个结构性错误
    pub fn structural(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::failed(vec![FieldError::new(code, message)])
    }

    /// 无任何错误
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_structural_error(&self) -> bool {
        self.errors.iter().any(|e| e.code.is_structural())
    }
}
