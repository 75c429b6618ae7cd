// ==========================================
// 月度销售指标导入 - 文件解码器实现
// ==========================================
// 支持: CSV (.csv) / Excel (.xlsx/.xls，仅第一个工作表)
// 流程: 字节 → (表头, 原始行) → 表头解析（一次）→ 逐行映射
// 红线: 表头解析失败时只返回缺列错误，不尝试任何行
// ==========================================

use crate::domain::sales::{CellValue, IngestOutcome, RawRow};
use crate::domain::types::{ErrorCode, FileFormat};
use crate::importer::column_resolver::resolve_columns;
use crate::importer::row_mapper::map_row;
use crate::importer::sales_importer_trait::FileDecoder;
use calamine::{open_workbook_auto_from_rs, Data, DataType, Range, Reader};
use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::{debug, instrument, warn};

// ==========================================
// 公共: 表头解析 + 逐行映射
// ==========================================
fn assemble(headers: &[String], rows: Vec<RawRow>) -> IngestOutcome {
    let columns = match resolve_columns(headers) {
        Ok(columns) => columns,
        Err(errors) => {
            warn!(missing = errors.len(), "表头解析失败，跳过全部数据行");
            return IngestOutcome::failed(errors);
        }
    };

    let mut outcome = IngestOutcome::default();
    for (idx, raw) in rows.iter().enumerate() {
        match map_row(raw, &columns, idx + 1) {
            Ok(record) => outcome.records.push(record),
            Err(errors) => {
                debug!(row = idx + 1, errors = errors.len(), "行映射失败");
                outcome.errors.extend(errors);
            }
        }
    }
    outcome
}

/// 按表头组装原始行（同名表头以第一列为准，超出表头的单元格忽略）
fn build_row<I>(headers: &[String], cells: I) -> RawRow
where
    I: IntoIterator<Item = CellValue>,
{
    let mut row = RawRow::new();
    for (header, cell) in headers.iter().zip(cells) {
        row.entry(header.clone()).or_insert(cell);
    }
    row
}

fn is_blank_row(row: &RawRow) -> bool {
    row.values().all(CellValue::is_blank)
}

// ==========================================
// CSV Decoder 实现
// ==========================================
pub struct CsvDecoder;

impl CsvDecoder {
    fn failure(err: csv::Error) -> IngestOutcome {
        warn!(error = %err, "CSV 结构解析失败");
        IngestOutcome::structural(ErrorCode::CsvParseError, format!("CSV解析失败: {}", err))
    }
}

impl FileDecoder for CsvDecoder {
    fn format(&self) -> FileFormat {
        FileFormat::Csv
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> IngestOutcome {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        // 读取表头
        let headers: Vec<String> = match reader.headers() {
            Ok(record) => record
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
                .collect(),
            Err(e) => return Self::failure(e),
        };

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => return Self::failure(e),
            };
            let row = build_row(&headers, record.iter().map(CellValue::text));

            // 跳过完全空白的行
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        debug!(columns = headers.len(), rows = rows.len(), "CSV 读取完成");
        assemble(&headers, rows)
    }
}

// ==========================================
// Excel Decoder 实现
// ==========================================
pub struct ExcelDecoder;

impl ExcelDecoder {
    fn failure(err: impl std::fmt::Display) -> IngestOutcome {
        warn!(error = %err, "Excel 结构解析失败");
        IngestOutcome::structural(
            ErrorCode::ExcelParseError,
            format!("Excel解析失败: {}", err),
        )
    }

    /// 解码第一个工作表（None 表示工作簿没有工作表）
    pub fn decode_first_sheet(&self, sheet: Option<&Range<Data>>) -> IngestOutcome {
        let Some(range) = sheet else {
            warn!("Excel 文件无工作表");
            return IngestOutcome::structural(ErrorCode::NoSheet, "Excel文件中没有找到工作表");
        };

        // 提取表头（第一行）
        let mut sheet_rows = range.rows();
        let headers: Vec<String> = sheet_rows
            .next()
            .map(|header_row| {
                header_row
                    .iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        // 读取数据行
        let rows: Vec<RawRow> = sheet_rows
            .map(|data_row| build_row(&headers, data_row.iter().map(cell_value)))
            .filter(|row| !is_blank_row(row))
            .collect();

        if rows.is_empty() {
            warn!("Excel 工作表无数据行");
            return IngestOutcome::structural(ErrorCode::EmptySheet, "Excel工作表为空");
        }

        debug!(columns = headers.len(), rows = rows.len(), "Excel 读取完成");
        assemble(&headers, rows)
    }
}

impl FileDecoder for ExcelDecoder {
    fn format(&self) -> FileFormat {
        FileFormat::Excel
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> IngestOutcome {
        // xlsx / xls 由内容自动识别
        let mut workbook = match open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())) {
            Ok(workbook) => workbook,
            Err(e) => return Self::failure(e),
        };

        let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
            return self.decode_first_sheet(None);
        };

        match workbook.worksheet_range(&sheet_name) {
            Ok(range) => self.decode_first_sheet(Some(&range)),
            Err(e) => Self::failure(e),
        }
    }
}

/// Excel 单元格 → 原始值（日期单元格渲染为 YYYY-MM）
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::text(s),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => CellValue::Text(dt.format("%Y-%m").to_string()),
            None => CellValue::text(&cell.to_string()),
        },
        other => CellValue::text(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::SalesField;

    const HEADER: &str = "月份,实际值,去年同期值,环比,同比";

    fn sheet(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_csv_valid_rows() {
        let csv = format!("{}\n1月,48,35,37,36\n2月,50,52,5,-3\n", HEADER);
        let outcome = CsvDecoder.decode(csv.as_bytes());
        assert!(outcome.is_clean());
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[1].yoy, -3.0);
    }

    #[test]
    fn test_csv_skip_blank_rows_and_keep_ordinals() {
        let csv = format!("{}\n1月,48,35,37,36\n\n,,,,\n2月,x,52,5,-3\n", HEADER);
        let outcome = CsvDecoder.decode(csv.as_bytes());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row, Some(2));
        assert_eq!(outcome.errors[0].field, Some(SalesField::Actual));
    }

    #[test]
    fn test_csv_short_row_reports_missing_fields() {
        let csv = format!("{}\n1月,48,35\n", HEADER);
        let outcome = CsvDecoder.decode(csv.as_bytes());
        assert!(outcome.records.is_empty());
        let fields: Vec<_> = outcome.errors.iter().filter_map(|e| e.field).collect();
        assert_eq!(fields, vec![SalesField::Mom, SalesField::Yoy]);
    }

    #[test]
    fn test_csv_bom_and_padded_headers() {
        let csv = "\u{feff} month , actual,LAST_YEAR,MoM,YoY\n2025-01,\"1,200\",900,3.5%,-2\n";
        let outcome = CsvDecoder.decode(csv.as_bytes());
        assert!(outcome.is_clean(), "{:?}", outcome.errors);
        assert_eq!(outcome.records[0].month, "1月");
        assert_eq!(outcome.records[0].actual, 1200.0);
        assert_eq!(outcome.records[0].mom, 3.5);
    }

    #[test]
    fn test_csv_missing_columns_skip_rows() {
        let csv = "月份,实际值\n1月,48\n";
        let outcome = CsvDecoder.decode(csv.as_bytes());
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 3);
        assert!(outcome
            .errors
            .iter()
            .all(|e| e.code == ErrorCode::MissingColumn && e.row.is_none()));
    }

    #[test]
    fn test_csv_invalid_utf8_is_structural() {
        let mut bytes = format!("{}\n", HEADER).into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe, b',', b'1', b'\n']);
        let outcome = CsvDecoder.decode(&bytes);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].code, ErrorCode::CsvParseError);
    }

    #[test]
    fn test_excel_no_sheet() {
        let outcome = ExcelDecoder.decode_first_sheet(None);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].code, ErrorCode::NoSheet);
    }

    #[test]
    fn test_excel_empty_and_header_only_sheets() {
        let empty: Range<Data> = Range::empty();
        assert_eq!(
            ExcelDecoder.decode_first_sheet(Some(&empty)).errors[0].code,
            ErrorCode::EmptySheet
        );

        let header_only = sheet(&[&[s("月份"), s("实际值"), s("去年同期值"), s("环比"), s("同比")]]);
        let outcome = ExcelDecoder.decode_first_sheet(Some(&header_only));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].code, ErrorCode::EmptySheet);
    }

    #[test]
    fn test_excel_numeric_cells_and_month_numbers() {
        let range = sheet(&[
            &[s("月份"), s("实际值"), s("去年同期值"), s("环比"), s("同比")],
            &[Data::Float(3.0), Data::Float(63.0), Data::Int(55), Data::Float(25.5), Data::Float(14.0)],
            &[Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            &[s("2025年4月"), s("48"), s("65"), s("-22"), Data::Bool(true)],
        ]);
        let outcome = ExcelDecoder.decode_first_sheet(Some(&range));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].month, "3月");
        assert_eq!(outcome.records[0].last_year, 55.0);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row, Some(2));
        assert_eq!(outcome.errors[0].code, ErrorCode::InvalidNumber);
    }

    #[test]
    fn test_excel_garbage_bytes() {
        let outcome = ExcelDecoder.decode(b"not a workbook");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].code, ErrorCode::ExcelParseError);
    }
}
