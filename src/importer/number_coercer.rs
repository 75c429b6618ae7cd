// ==========================================
// 月度销售指标导入 - 数值转换
// ==========================================
// 规则（按顺序）:
//   1. 空值 / 缺失 / 空串 → MISSING_FIELD
//   2. 数值单元格原样使用
//   3. 文本去除千分位逗号后，取开头的浮点字面量（"12%" → 12）
//   4. 结果必须为有限数，否则 INVALID_NUMBER（附原始文本）
// 不做: 四舍五入、本地化小数点、单位推断
// ==========================================

use crate::domain::field::SalesField;
use crate::domain::sales::{CellValue, FieldError};
use crate::domain::types::ErrorCode;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("数值正则为常量")
});

/// 将原始单元格转换为有限数
///
/// # 参数
/// - value: 原始单元格（None 表示该行缺少此列）
/// - field: 语义字段（用于错误信息）
/// - row: 行序号（从 1 开始）
pub fn coerce_number(
    value: Option<&CellValue>,
    field: SalesField,
    row: usize,
) -> Result<f64, FieldError> {
    let value = match value {
        None | Some(CellValue::Empty) => return Err(missing(field, row)),
        Some(CellValue::Text(s)) if s.is_empty() => return Err(missing(field, row)),
        Some(v) => v,
    };

    let parsed = match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => parse_leading_float(s),
        CellValue::Empty => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(FieldError::new(
            ErrorCode::InvalidNumber,
            format!("{}不是有效数字: {}", field, value.render()),
        )
        .at_row(row)
        .on_field(field)),
    }
}

/// 去除千分位逗号后解析开头的浮点字面量
fn parse_leading_float(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let literal = LEADING_FLOAT.find(cleaned.trim_start())?;
    literal.as_str().parse::<f64>().ok()
}

fn missing(field: SalesField, row: usize) -> FieldError {
    FieldError::new(ErrorCode::MissingField, format!("{}字段为空", field))
        .at_row(row)
        .on_field(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_plain_and_grouped_numbers() {
        assert_eq!(coerce_number(Some(&text("48")), SalesField::Actual, 1), Ok(48.0));
        assert_eq!(
            coerce_number(Some(&text("1,234.5")), SalesField::Actual, 1),
            Ok(1234.5)
        );
        assert_eq!(coerce_number(Some(&text("-16")), SalesField::Yoy, 1), Ok(-16.0));
        assert_eq!(
            coerce_number(Some(&CellValue::Number(3.25)), SalesField::Mom, 1),
            Ok(3.25)
        );
    }

    #[test]
    fn test_leading_literal_like_parse_float() {
        assert_eq!(coerce_number(Some(&text("37%")), SalesField::Mom, 1), Ok(37.0));
        assert_eq!(coerce_number(Some(&text(".5")), SalesField::Mom, 1), Ok(0.5));
        assert_eq!(coerce_number(Some(&text("1e3万")), SalesField::Actual, 1), Ok(1000.0));
    }

    #[test]
    fn test_only_ascii_digits_form_the_literal() {
        assert_eq!(coerce_number(Some(&text("12３")), SalesField::Actual, 1), Ok(12.0));
        let err = coerce_number(Some(&text("４８")), SalesField::Actual, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_missing_values() {
        for value in [None, Some(CellValue::Empty), Some(text(""))] {
            let err = coerce_number(value.as_ref(), SalesField::LastYear, 4).unwrap_err();
            assert_eq!(err.code, ErrorCode::MissingField);
            assert_eq!(err.row, Some(4));
            assert_eq!(err.field, Some(SalesField::LastYear));
            assert_eq!(err.message, "lastYear字段为空");
        }
    }

    #[test]
    fn test_invalid_numbers_carry_raw_text() {
        let err = coerce_number(Some(&text("abc")), SalesField::Actual, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNumber);
        assert_eq!(err.message, "actual不是有效数字: abc");

        for raw in ["NaN", "inf", "Infinity", "1e400", "-", "."] {
            let err = coerce_number(Some(&text(raw)), SalesField::Actual, 2).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidNumber, "{}", raw);
        }
    }

    #[test]
    fn test_non_finite_number_cell_rejected() {
        let err = coerce_number(Some(&CellValue::Number(f64::NAN)), SalesField::Yoy, 1)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_coercion_is_idempotent() {
        for raw in ["48", "1,234.5", "-0.125", "37%", "6.02e23", "0.1"] {
            let first = coerce_number(Some(&text(raw)), SalesField::Actual, 1).unwrap();
            let again = coerce_number(Some(&CellValue::Number(first)), SalesField::Actual, 1);
            assert_eq!(again, Ok(first));
            let rendered = coerce_number(Some(&text(&first.to_string())), SalesField::Actual, 1);
            assert_eq!(rendered, Ok(first));
        }
    }
}
