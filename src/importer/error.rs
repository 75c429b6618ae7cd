// ==========================================
// 月度销售指标导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 能被描述的失败一律作为 FieldError 数据返回；
//       这里只保留会让调用本身失败的错误
// ==========================================

use thiserror::Error;

/// 导入调用级错误（调用方必须自行向用户展示）
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    FileRead(String),

    // ===== 配置错误 =====
    #[error("配置读取失败 (path: {path}): {message}")]
    Config { path: String, message: String },

    // ===== 序列化错误 =====
    #[error("序列化失败: {0}")]
    Serialization(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::FileRead(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Serialization(err.to_string())
    }
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;

/// 月份无法识别
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDate {
    #[error("日期不能为空")]
    Empty,

    #[error("无法解析日期格式: {0}")]
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_file_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IngestError = io.into();
        assert!(matches!(err, IngestError::FileRead(_)));
        assert!(err.to_string().starts_with("文件读取失败"));
    }

    #[test]
    fn test_invalid_date_messages() {
        assert_eq!(InvalidDate::Empty.to_string(), "日期不能为空");
        assert_eq!(
            InvalidDate::Unrecognized("13月".to_string()).to_string(),
            "无法解析日期格式: 13月"
        );
    }
}
