//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的顶点标签: {0:?}")]
    InvalidLabel(String),

    #[error("无效的边权重: {0}")]
    InvalidWeight(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("未知命令: {0}")]
    UnknownCommand(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::ImportError(e.to_string())
    }
}
