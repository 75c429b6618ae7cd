// ==========================================
// 月度销售指标导入 - 命令行入口
// ==========================================
// 用法: sales-ingest [--config PATH] [--compact] FILE...
//       sales-ingest --sample
// 输出: 每个文件一行/一段 JSON（stdout），日志走 stderr
// ==========================================

use anyhow::Context;
use clap::Parser;
use sales_ingest::config::ConfigLoader;
use sales_ingest::{logging, sample_records, SalesImporter, SalesImporterImpl};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "导入 CSV/Excel 月度销售指标并输出校验结果")]
struct Args {
    /// 待导入的文件（.csv / .xlsx / .xls）
    #[arg(required_unless_present = "sample")]
    files: Vec<PathBuf>,

    /// 配置文件路径（JSON）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 紧凑输出（覆盖配置中的 output.pretty）
    #[arg(long)]
    compact: bool,

    /// 输出内置示例数据
    #[arg(long)]
    sample: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load(args.config.as_deref()).context("无法加载配置")?;
    logging::init(&config.logging);

    tracing::info!("{} v{}", sales_ingest::APP_NAME, sales_ingest::VERSION);

    let mut output = config.output.clone();
    if args.compact {
        output.pretty = false;
    }

    if args.sample {
        println!("{}", output.render(&json!({ "records": sample_records() }))?);
        return Ok(());
    }

    let importer = SalesImporterImpl::new();
    let results = importer.batch_ingest(args.files).await;

    let mut fatal_count = 0;
    for (path, result) in results {
        let file = path.display().to_string();
        let value = match result {
            Ok(outcome) => json!({
                "file": file,
                "records": outcome.records,
                "errors": outcome.errors,
            }),
            Err(e) => {
                fatal_count += 1;
                json!({ "file": file, "fatal": e.to_string() })
            }
        };
        println!("{}", output.render(&value)?);
    }

    if fatal_count > 0 {
        anyhow::bail!("{} 个文件读取失败", fatal_count);
    }
    Ok(())
}
