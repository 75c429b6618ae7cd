// ==========================================
// 月度销售指标导入 - 月份标准化
// ==========================================
// 职责: 异构月份写法 → "M月"（无前导零）
// 规则: 按固定顺序严格匹配，首个匹配者胜出；
//       均不匹配时，取开头 1-2 位数字且须在 [1,12]
// 说明: 年份只做合法性校验后丢弃（记录不携带年份）
// ==========================================

use crate::importer::error::InvalidDate;
use chrono::{Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

// ==========================================
// MonthPattern - 可接受的月份写法
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthPattern {
    SuffixedMonth,          // M月
    SuffixedPaddedMonth,    // MM月
    IsoYearMonth,           // YYYY-MM
    ChineseYearMonth,       // YYYY年M月
    ChinesePaddedYearMonth, // YYYY年MM月
    SlashYearMonth,         // YYYY/MM
    BareMonth,              // M
    BarePaddedMonth,        // MM
}

impl MonthPattern {
    /// 匹配优先级（顺序即优先级）
    pub const ORDERED: [MonthPattern; 8] = [
        MonthPattern::SuffixedMonth,
        MonthPattern::SuffixedPaddedMonth,
        MonthPattern::IsoYearMonth,
        MonthPattern::ChineseYearMonth,
        MonthPattern::ChinesePaddedYearMonth,
        MonthPattern::SlashYearMonth,
        MonthPattern::BareMonth,
        MonthPattern::BarePaddedMonth,
    ];

    /// 格式说明（用于日志）
    pub fn format(&self) -> &'static str {
        match self {
            MonthPattern::SuffixedMonth => "M月",
            MonthPattern::SuffixedPaddedMonth => "MM月",
            MonthPattern::IsoYearMonth => "YYYY-MM",
            MonthPattern::ChineseYearMonth => "YYYY年M月",
            MonthPattern::ChinesePaddedYearMonth => "YYYY年MM月",
            MonthPattern::SlashYearMonth => "YYYY/MM",
            MonthPattern::BareMonth => "M",
            MonthPattern::BarePaddedMonth => "MM",
        }
    }

    // 捕获组: 含年份的写法为 (year, month)，其余为 (month)
    fn regex(&self) -> &'static Regex {
        &PATTERN_REGEXES[*self as usize]
    }

    /// 严格匹配，成功时返回 1-12 的月份
    pub fn parse(&self, token: &str) -> Option<u32> {
        let caps = self.regex().captures(token)?;
        match caps.len() {
            3 => {
                let year: i32 = caps[1].parse().ok()?;
                let month: u32 = caps[2].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, 1).map(|_| month)
            }
            _ => valid_month(caps[1].parse().ok()?),
        }
    }
}

// 与 MonthPattern 声明顺序一一对应；只认 ASCII 数字
static PATTERN_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^([1-9][0-9]?)月$",
        r"^([0-9]{2})月$",
        r"^([0-9]{4})-([0-9]{2})$",
        r"^([0-9]{4})年([1-9][0-9]?)月$",
        r"^([0-9]{4})年([0-9]{2})月$",
        r"^([0-9]{4})/([0-9]{2})$",
        r"^([1-9][0-9]?)$",
        r"^([0-9]{2})$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("月份正则为常量"))
    .collect()
});

static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})").expect("月份正则为常量"));

fn valid_month(month: u32) -> Option<u32> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.number_from_month())
}

/// 标准化月份写法
///
/// # 返回
/// - Ok("3月"): 解析成功
/// - Err(InvalidDate::Empty): 空值
/// - Err(InvalidDate::Unrecognized): 无法识别或月份越界
///
/// # 示例
/// ```
/// use sales_ingest::importer::normalize_month;
/// assert_eq!(normalize_month("2025年03月").unwrap(), "3月");
/// assert!(normalize_month("13月").is_err());
/// ```
pub fn normalize_month(token: &str) -> Result<String, InvalidDate> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InvalidDate::Empty);
    }

    for pattern in MonthPattern::ORDERED {
        if let Some(month) = pattern.parse(token) {
            tracing::trace!(token, format = pattern.format(), month, "月份匹配");
            return Ok(format!("{}月", month));
        }
    }

    // 兜底: 开头的 1-2 位数字
    LEADING_DIGITS
        .captures(token)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .and_then(valid_month)
        .map(|month| format!("{}月", month))
        .ok_or_else(|| InvalidDate::Unrecognized(token.to_string()))
}
