// ==========================================
// 并发导入测试
// ==========================================
// 测试目标: 验证批量导入时各文件结果互相独立
// ==========================================


use sales_ingest::logging;
use sales_ingest::{ErrorCode, SalesImporter, SalesImporterImpl};
use std::path::PathBuf;
use std::time::Instant;
use test_helpers::{csv_with_rows, temp_file_with};

#[tokio::test]
async fn test_batch_import_multiple_files() {
    // 初始化日志系统
    logging::init_test();

    let good = temp_file_with(".csv", csv_with_rows(&["1月,48,35,37,36"]).as_bytes())
        .expect("创建临时文件失败");
    let bad = temp_file_with(".csv", "月份,实际值\n1月,48\n".as_bytes())
        .expect("创建临时文件失败");
    let unsupported = temp_file_with(".txt", b"hello").expect("创建临时文件失败");
    let missing = PathBuf::from("/nonexistent/sales-ingest/missing.csv");

    let importer = SalesImporterImpl::new();
    let start = Instant::now();
    let results = importer
        .batch_ingest(vec![
            good.path().to_path_buf(),
            bad.path().to_path_buf(),
            unsupported.path().to_path_buf(),
            missing.clone(),
        ])
        .await;
    println!("✓ 批量导入耗时: {:?}", start.elapsed());

    // 返回顺序与输入一致
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].0, good.path());
    assert_eq!(results[3].0, missing);

    let good_outcome = results[0].1.as_ref().expect("正常文件应成功");
    assert_eq!(good_outcome.records.len(), 1);
    assert!(good_outcome.is_clean());

    let bad_outcome = results[1].1.as_ref().expect("缺列文件仍返回结果");
    assert!(bad_outcome.records.is_empty());
    assert_eq!(bad_outcome.errors.len(), 3);

    let unsupported_outcome = results[2].1.as_ref().expect("不支持的格式仍返回结果");
    assert_eq!(
        unsupported_outcome.errors[0].code,
        ErrorCode::UnsupportedFormat
    );

    // 仅读取失败会让单个文件的调用失败
    assert!(results[3].1.is_err());
}

#[tokio::test]
async fn test_repeated_ingest_is_independent() {
    let csv = csv_with_rows(&["1月,48,35,37,36", "2月,,52,5,-3"]);
    let file = temp_file_with(".csv", csv.as_bytes()).expect("创建临时文件失败");

    let importer = SalesImporterImpl::new();
    let paths = vec![file.path().to_path_buf(); 8];
    let results = importer.batch_ingest(paths).await;

    let first = results[0].1.as_ref().unwrap();
    for (_, result) in &results {
        assert_eq!(result.as_ref().unwrap(), first);
    }
    assert_eq!(first.records.len(), 1);
    assert_eq!(first.errors.len(), 1);
}
