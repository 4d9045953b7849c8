//! 边定义
//!
//! 有向带权边：(源顶点, 目标顶点, 权重)

use crate::types::{Label, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
///
/// 权重恒不为 0；更新权重时整条记录被替换，而不是原地修改字段。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<L> {
    /// 源顶点
    source: L,
    /// 目标顶点
    target: L,
    /// 权重
    weight: Weight,
}

impl<L: Label> Edge<L> {
    /// 创建新边
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        debug_assert!(weight != 0, "权重为 0 的边不可存储");
        Self {
            source,
            target,
            weight,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> &L {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &L {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// 是否连接 (source, target) 这一有序顶点对
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    /// 是否以该顶点为端点
    pub fn touches(&self, vertex: &L) -> bool {
        &self.source == vertex || &self.target == vertex
    }

    /// 以新权重生成替换记录
    pub fn with_weight(&self, weight: Weight) -> Self {
        Self::new(self.source.clone(), self.target.clone(), weight)
    }
}

impl<L: Label> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (weight: {})",
            self.source, self.target, self.weight
        )
    }
}
