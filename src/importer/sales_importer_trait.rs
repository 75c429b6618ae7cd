// ==========================================
// 月度销售指标导入 - 导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::domain::sales::IngestOutcome;
use crate::domain::types::FileFormat;
use crate::importer::error::IngestResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

// ==========================================
// SalesImporter Trait
// ==========================================
// 用途: 导入主接口（按扩展名分派到解码器）
// 实现者: SalesImporterImpl
#[async_trait]
pub trait SalesImporter: Send + Sync {
    /// 导入内存中的文件
    ///
    /// # 参数
    /// - file_name: 文件名（仅用于扩展名分派）
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - IngestOutcome: 记录与错误（任何可描述的失败都在 errors 中）
    fn ingest(&self, file_name: &str, bytes: &[u8]) -> IngestOutcome;

    /// 从磁盘读取并导入
    ///
    /// # 返回
    /// - Ok(IngestOutcome): 导入结果
    /// - Err: 仅当文件字节无法读取
    async fn ingest_path(&self, path: &Path) -> IngestResult<IngestOutcome>;

    /// 并发导入多个文件
    ///
    /// # 说明
    /// - 各文件互不影响，某个文件读取失败不影响其他文件
    /// - 返回顺序与输入顺序一致
    async fn batch_ingest(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, IngestResult<IngestOutcome>)>;
}

// ==========================================
// FileDecoder Trait
// ==========================================
// 用途: 单一格式的解码前端
// 实现者: CsvDecoder, ExcelDecoder
pub trait FileDecoder: Send + Sync {
    /// 该解码器处理的格式
    fn format(&self) -> FileFormat;

    /// 解码文件字节为记录与错误
    fn decode(&self, bytes: &[u8]) -> IngestOutcome;
}
