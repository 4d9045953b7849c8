//! 配置
//!
//! 选择图的存储布局以及命令行工具的运行参数。

use crate::error::{Error, Result};
use crate::graph::{new_graph, DynGraph};
use crate::types::{Label, Representation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 存储布局
    pub representation: Representation,
    /// 命令行历史文件（为空时使用 ~/.wdigraph_history）
    pub history_file: Option<PathBuf>,
    /// 每导入多少行输出一次进度日志
    pub import_batch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            representation: Representation::EdgeList,
            history_file: None,
            import_batch_size: 10000,
        }
    }
}

impl GraphConfig {
    /// 从 JSON 文件加载，缺省字段使用默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: GraphConfig = serde_json::from_str(&content).map_err(|e| {
            Error::ConfigError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 指定存储布局
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.import_batch_size == 0 {
            return Err(Error::ConfigError(
                "import_batch_size 必须大于 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 历史文件路径
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".wdigraph_history")))
    }

    /// 按配置创建空图
    pub fn build<L>(&self) -> DynGraph<L>
    where
        L: Label + Send + Sync + 'static,
    {
        new_graph(self.representation)
    }
}
