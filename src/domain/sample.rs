// ==========================================
// 月度销售指标导入 - 内置示例数据
// ==========================================
// 用途: 首次打开时的初始数据集 / CLI --sample 输出
// ==========================================

use crate::domain::sales::SalesRecord;

// (月份, 实际值, 去年同期值, 环比, 同比)
const SAMPLE_ROWS: [(&str, f64, f64, f64, f64); 12] = [
    ("1月", 48.0, 35.0, 37.0, 36.0),
    ("2月", 50.0, 52.0, 5.0, -3.0),
    ("3月", 63.0, 55.0, 25.0, 14.0),
    ("4月", 48.0, 65.0, -22.0, -16.0),
    ("5月", 50.0, 55.0, 13.0, 40.0),
    ("6月", 53.0, 58.0, -13.0, 15.0),
    ("7月", 38.0, 60.0, 8.0, 69.0),
    ("8月", 58.0, 50.0, -23.0, -16.0),
    ("9月", 38.0, 75.0, 57.0, 116.0),
    ("10月", 30.0, 38.0, -53.0, 27.0),
    ("11月", 45.0, 50.0, 50.0, 10.0),
    ("12月", 60.0, 55.0, 33.0, 9.0),
];

/// 全年 12 个月的示例记录
pub fn sample_records() -> Vec<SalesRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|&(month, actual, last_year, mom, yoy)| SalesRecord {
            month: month.to_string(),
            actual,
            last_year,
            mom,
            yoy,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_covers_every_month_in_order() {
        let records = sample_records();
        assert_eq!(records.len(), 12);
        for (idx, record) in records.iter().enumerate() {
            assert_eq!(record.month, format!("{}月", idx + 1));
        }
    }
}
