// ==========================================
// 月度销售指标导入 - 行映射
// ==========================================
// 流程: 月份（缺失即终止本行）→ 月份标准化（失败即终止本行）
//       → 四个数值字段独立校验（全部检查，错误全部收集）
// 红线: 任一字段失败则本行不产生记录；不存在半填充记录
// ==========================================

use crate::domain::field::SalesField;
use crate::domain::sales::{FieldError, RawRow, SalesRecord};
use crate::domain::types::ErrorCode;
use crate::importer::column_resolver::ColumnMap;
use crate::importer::month_normalizer::normalize_month;
use crate::importer::number_coercer::coerce_number;

/// 将一行原始数据映射为规范记录
///
/// # 参数
/// - raw: 原始行（表头 → 单元格）
/// - columns: 该文件的列映射
/// - row: 行序号（从 1 开始）
///
/// # 返回
/// - Ok(SalesRecord): 月份与四个数值全部有效
/// - Err(Vec<FieldError>): 本行的全部字段错误
pub fn map_row(
    raw: &RawRow,
    columns: &ColumnMap,
    row: usize,
) -> Result<SalesRecord, Vec<FieldError>> {
    // 月份
    let month_cell = raw
        .get(columns.column(SalesField::Month))
        .filter(|cell| !cell.is_blank());
    let Some(month_cell) = month_cell else {
        return Err(vec![FieldError::new(ErrorCode::MissingField, "月份字段为空")
            .at_row(row)
            .on_field(SalesField::Month)]);
    };

    let month = normalize_month(&month_cell.render()).map_err(|e| {
        vec![FieldError::new(ErrorCode::ParseError, e.to_string())
            .at_row(row)
            .on_field(SalesField::Month)]
    })?;

    // 数值字段: 前一个失败不影响后一个的检查
    let mut errors = Vec::new();
    let [actual, last_year, mom, yoy] = SalesField::NUMERIC.map(|field| {
        coerce_number(raw.get(columns.column(field)), field, row)
            .map_err(|e| errors.push(e))
            .ok()
    });

    match (actual, last_year, mom, yoy) {
        (Some(actual), Some(last_year), Some(mom), Some(yoy)) if errors.is_empty() => {
            Ok(SalesRecord {
                month,
                actual,
                last_year,
                mom,
                yoy,
            })
        }
        _ => Err(errors),
    }
}
