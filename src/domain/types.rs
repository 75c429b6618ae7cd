// ==========================================
// 月度销售指标导入 - 领域类型定义
// ==========================================
// 职责: 错误码词表（供调用方生成用户提示）
// 序列化格式: SCREAMING_SNAKE_CASE（与前端约定一致）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 错误码 (Error Code)
// ==========================================
// 结构性错误: 整个文件无法进入逐行处理
// 字段级错误: 仅作用于某一行的某一字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingField,      // 字段为空
    InvalidNumber,     // 非有效数字
    MissingColumn,     // 缺少必需列
    ParseError,        // 行解析失败（月份无法识别）
    CsvParseError,     // CSV 结构错误
    ExcelParseError,   // Excel 结构错误
    NoSheet,           // 工作簿无工作表
    EmptySheet,        // 工作表为空
    UnsupportedFormat, // 不支持的扩展名
}

impl ErrorCode {
    /// 是否为结构性错误（出现即意味着该文件零记录）
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ErrorCode::MissingColumn
                | ErrorCode::CsvParseError
                | ErrorCode::ExcelParseError
                | ErrorCode::NoSheet
                | ErrorCode::EmptySheet
                | ErrorCode::UnsupportedFormat
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::MissingColumn => "MISSING_COLUMN",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::CsvParseError => "CSV_PARSE_ERROR",
            ErrorCode::ExcelParseError => "EXCEL_PARSE_ERROR",
            ErrorCode::NoSheet => "NO_SHEET",
            ErrorCode::EmptySheet => "EMPTY_SHEET",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 文件格式 (File Format)
// ==========================================
// 仅依据扩展名判定（大小写不敏感）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileFormat {
    Csv,   // .csv
    Excel, // .xlsx / .xls
}

impl FileFormat {
    /// 从扩展名解析格式，未知扩展名返回 None
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xls" => Some(FileFormat::Excel),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Excel => write!(f, "EXCEL"),
        }
    }
}
