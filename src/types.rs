//! 通用类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// 边权重（0 表示“无边”，是删除标记）
pub type Weight = i32;

/// 顶点标签
///
/// 任何可比较、可哈希、可克隆且可打印的值都可以作为顶点标签。
pub trait Label: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// 图的内部存储布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// 边列表：扁平的边记录集合 + 独立的顶点集合
    #[default]
    EdgeList,
    /// 顶点列表：每个顶点持有自己的出边
    VertexList,
}

impl Representation {
    /// 所有布局
    pub const ALL: [Representation; 2] = [Representation::EdgeList, Representation::VertexList];

    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::EdgeList => "edge-list",
            Representation::VertexList => "vertex-list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "edge-list" | "edges" | "edge" => Ok(Representation::EdgeList),
            "vertex-list" | "vertices" | "vertex" => Ok(Representation::VertexList),
            other => Err(Error::ConfigError(format!(
                "未知的存储布局 {:?}，可选: edge-list, vertex-list",
                other
            ))),
        }
    }
}

/// 校验外部输入的顶点标签
///
/// 空标签或仅含空白的标签不是合法顶点，在进入图之前就拒绝。
pub fn validate_label(raw: &str) -> Result<String> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(Error::InvalidLabel(raw.to_string()));
    }
    if label.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidLabel(raw.to_string()));
    }
    Ok(label.to_string())
}

/// 解析外部输入的边权重
pub fn parse_weight(raw: &str) -> Result<Weight> {
    raw.trim()
        .parse::<Weight>()
        .map_err(|e| Error::InvalidWeight(format!("{:?}: {}", raw, e)))
}
