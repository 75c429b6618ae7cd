// ==========================================
// 月度销售指标导入 - 语义字段与列名同义词表
// ==========================================
// 职责: 定义记录的五个语义字段，以及每个字段可接受的表头写法
// 红线: 同义词表为静态只读，扩展方式为新增条目，不做运行时推断
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SalesField - 语义字段
// ==========================================
// 顺序固定: month → actual → lastYear → mom → yoy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SalesField {
    Month,    // 月份
    Actual,   // 实际值（单位: 万）
    LastYear, // 去年同期值（单位: 万）
    Mom,      // 环比（%）
    Yoy,      // 同比（%）
}

impl SalesField {
    /// 全部语义字段（按固定顺序）
    pub const ALL: [SalesField; 5] = [
        SalesField::Month,
        SalesField::Actual,
        SalesField::LastYear,
        SalesField::Mom,
        SalesField::Yoy,
    ];

    /// 数值字段（行映射时逐一独立校验）
    pub const NUMERIC: [SalesField; 4] = [
        SalesField::Actual,
        SalesField::LastYear,
        SalesField::Mom,
        SalesField::Yoy,
    ];

    /// 字段名（与序列化后的记录键一致）
    pub fn name(&self) -> &'static str {
        match self {
            SalesField::Month => "month",
            SalesField::Actual => "actual",
            SalesField::LastYear => "lastYear",
            SalesField::Mom => "mom",
            SalesField::Yoy => "yoy",
        }
    }

    /// 中文显示名
    pub fn label(&self) -> &'static str {
        match self {
            SalesField::Month => "月份",
            SalesField::Actual => "实际值",
            SalesField::LastYear => "去年同期值",
            SalesField::Mom => "环比",
            SalesField::Yoy => "同比",
        }
    }

    /// 可接受的表头写法（比较时大小写不敏感）
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            SalesField::Month => &["月份", "month", "月", "Month", "MONTH"],
            SalesField::Actual => &["实际值", "actual", "实际", "Actual", "ACTUAL", "本期"],
            SalesField::LastYear => &[
                "去年同期值",
                "lastYear",
                "last_year",
                "去年",
                "LastYear",
                "LAST_YEAR",
                "上年同期",
            ],
            SalesField::Mom => &["环比", "mom", "MoM", "MOM", "环比增长", "环比增长率"],
            SalesField::Yoy => &["同比", "yoy", "YoY", "YOY", "同比增长", "同比增长率"],
        }
    }

    /// 判断表头是否为该字段的同义词（去除首尾空白，大小写不敏感）
    pub fn accepts_header(&self, header: &str) -> bool {
        let normalized = header.trim().to_lowercase();
        self.synonyms()
            .iter()
            .any(|synonym| synonym.to_lowercase() == normalized)
    }
}

impl fmt::Display for SalesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
