// ==========================================
// 月度销售指标导入 - 导入器实现
// ==========================================
// 职责: 按扩展名分派到解码器，汇总 {records, errors}
// 流程: 读取字节（唯一的异步点）→ 分派 → 解码（纯计算）
// 红线: 无跨调用状态；每次调用的列映射/记录/错误均为局部变量
// ==========================================

use crate::domain::sales::IngestOutcome;
use crate::domain::types::{ErrorCode, FileFormat};
use crate::importer::error::IngestResult;
use crate::importer::file_decoder::{CsvDecoder, ExcelDecoder};
use crate::importer::sales_importer_trait::{FileDecoder, SalesImporter};
use async_trait::async_trait;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, warn};

// ==========================================
// SalesImporterImpl - 导入器实现
// ==========================================
pub struct SalesImporterImpl {
    decoders: Vec<Box<dyn FileDecoder>>,
}

impl SalesImporterImpl {
    /// 创建默认导入器（CSV + Excel）
    pub fn new() -> Self {
        Self::with_decoders(vec![Box::new(CsvDecoder), Box::new(ExcelDecoder)])
    }

    /// 使用指定解码器创建导入器
    pub fn with_decoders(decoders: Vec<Box<dyn FileDecoder>>) -> Self {
        Self { decoders }
    }

    fn decoder_for(&self, format: FileFormat) -> Option<&dyn FileDecoder> {
        self.decoders
            .iter()
            .find(|d| d.format() == format)
            .map(|d| d.as_ref())
    }
}

impl Default for SalesImporterImpl {
    fn default() -> Self {
        Self::new()
    }
}

/// 取文件扩展名（不含点）
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[async_trait]
impl SalesImporter for SalesImporterImpl {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn ingest(&self, file_name: &str, bytes: &[u8]) -> IngestOutcome {
        let start_time = Instant::now();
        let ext = extension_of(file_name);

        let decoder = FileFormat::from_extension(&ext).and_then(|f| self.decoder_for(f));
        let Some(decoder) = decoder else {
            warn!(extension = %ext, "不支持的文件格式");
            return IngestOutcome::structural(
                ErrorCode::UnsupportedFormat,
                format!("不支持的文件格式: {}。请上传CSV或Excel文件。", ext),
            );
        };

        let outcome = decoder.decode(bytes);
        info!(
            format = %decoder.format(),
            records = outcome.records.len(),
            errors = outcome.errors.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "文件导入完成"
        );
        outcome
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn ingest_path(&self, path: &Path) -> IngestResult<IngestOutcome> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            error!(error = %e, "文件读取失败");
            e
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(self.ingest(&file_name, &bytes))
    }

    async fn batch_ingest(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, IngestResult<IngestOutcome>)> {
        info!(files = paths.len(), "开始批量导入");
        let tasks = paths.into_iter().map(|path| async move {
            let result = self.ingest_path(&path).await;
            (path, result)
        });
        join_all(tasks).await
    }
}

// ==========================================
// 便捷入口
// ==========================================

/// 导入内存中的文件（无状态入口）
pub fn ingest(file_name: &str, bytes: &[u8]) -> IngestOutcome {
    SalesImporterImpl::new().ingest(file_name, bytes)
}

/// 从磁盘读取并导入
pub async fn ingest_path<P: AsRef<Path>>(path: P) -> IngestResult<IngestOutcome> {
    SalesImporterImpl::new().ingest_path(path.as_ref()).await
}
