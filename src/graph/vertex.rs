//! 顶点出边表
//!
//! 顶点列表布局中，每个顶点拥有一张自己的出边表。

use crate::types::{Label, Weight};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 出边（源顶点由所属的出边表隐含）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutEdge<L> {
    /// 目标顶点
    pub target: L,
    /// 权重（不为 0）
    pub weight: Weight,
}

/// 单个顶点的出边表
///
/// 大多数顶点的出度很小，前 4 条边内联存放。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutEdges<L> {
    edges: SmallVec<[OutEdge<L>; 4]>,
}

impl<L: Label> OutEdges<L> {
    pub fn new() -> Self {
        Self {
            edges: SmallVec::new(),
        }
    }

    fn position(&self, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| &e.target == target)
    }

    /// 指向 `target` 的边权重
    pub fn weight_to(&self, target: &L) -> Option<Weight> {
        self.position(target).map(|i| self.edges[i].weight)
    }

    /// 设置指向 `target` 的边，返回旧权重（无边时为 0）
    ///
    /// 权重为 0 时删除该边。
    pub fn set(&mut self, target: L, weight: Weight) -> Weight {
        match (self.position(&target), weight) {
            (Some(i), 0) => self.edges.remove(i).weight,
            (Some(i), _) => std::mem::replace(&mut self.edges[i], OutEdge { target, weight }).weight,
            (None, 0) => 0,
            (None, _) => {
                self.edges.push(OutEdge { target, weight });
                0
            }
        }
    }

    /// 删除所有指向 `target` 的边，返回删除数量
    pub fn remove_target(&mut self, target: &L) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| &e.target != target);
        before - self.edges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutEdge<L>> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<L: Label> Default for OutEdges<L> {
    fn default() -> Self {
        Self::new()
    }
}
