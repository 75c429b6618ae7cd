// ==========================================
// 月度销售指标导入 - 表头解析
// ==========================================
// 职责: 文件表头 → 五个语义字段的列映射（每个文件只做一次）
// 规则: 每个字段取第一个命中任一同义词的表头位置（同义词顺序无优先级）
// 红线: 要么五列全部解析，要么只返回缺列错误，不返回部分映射
// ==========================================

use crate::domain::field::SalesField;
use crate::domain::sales::FieldError;
use crate::domain::types::ErrorCode;

// ==========================================
// ColumnMap - 语义字段 → 实际表头
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub month: String,
    pub actual: String,
    pub last_year: String,
    pub mom: String,
    pub yoy: String,
}

impl ColumnMap {
    /// 字段对应的表头
    pub fn column(&self, field: SalesField) -> &str {
        match field {
            SalesField::Month => &self.month,
            SalesField::Actual => &self.actual,
            SalesField::LastYear => &self.last_year,
            SalesField::Mom => &self.mom,
            SalesField::Yoy => &self.yoy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SalesField, &str)> {
        SalesField::ALL
            .into_iter()
            .map(move |field| (field, self.column(field)))
    }
}

/// 构建列映射
///
/// # 参数
/// - headers: 表头行（保持原始顺序）
///
/// # 返回
/// - Ok(ColumnMap): 五个字段全部解析
/// - Err(Vec<FieldError>): 每个缺失字段一条 MISSING_COLUMN
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMap, Vec<FieldError>> {
    let hits = SalesField::ALL.map(|field| {
        headers
            .iter()
            .map(|h| h.as_ref().trim())
            .find(|h| field.accepts_header(h))
            .map(str::to_string)
    });

    // 缺列全部收集后一次性返回
    let errors: Vec<FieldError> = SalesField::ALL
        .iter()
        .zip(hits.iter())
        .filter(|(_, hit)| hit.is_none())
        .map(|(field, _)| {
            FieldError::new(
                ErrorCode::MissingColumn,
                format!(
                    "未找到{}列，期望列名: {}",
                    field,
                    field.synonyms().join(", ")
                ),
            )
            .on_field(*field)
        })
        .collect();

    match hits {
        [Some(month), Some(actual), Some(last_year), Some(mom), Some(yoy)] => Ok(ColumnMap {
            month,
            actual,
            last_year,
            mom,
            yoy,
        }),
        _ => Err(errors),
    }
}
