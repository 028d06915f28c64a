//! 统一错误类型定义.
//!
//! 插值核本身不产生错误, 只有后端选择与配置加载会返回 [`McResult`].

use thiserror::Error;

/// 运动补偿库统一错误类型
#[derive(Debug, Error)]
pub enum McError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作 (如请求未编译进来的加速后端)
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    InvalidConfig(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 运动补偿库统一 Result 类型
pub type McResult<T> = Result<T, McError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McError::Unsupported("加速后端".into());
        assert_eq!(err.to_string(), "不支持的操作: 加速后端");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: McError = io.into();
        assert!(matches!(err, McError::Io(_)), "io::Error 应转换为 Io 变体");
    }
}
