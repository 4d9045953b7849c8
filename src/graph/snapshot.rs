//! 图快照与统计信息

use super::edge::Edge;
use crate::error::Result;
use crate::types::{Label, Representation, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// 图统计信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub representation: Representation,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// 自环数
    pub self_loops: usize,
    /// 无任何入边或出边的顶点数
    pub isolated_vertices: usize,
    /// 所有边权重之和
    pub total_weight: i64,
}

impl GraphStats {
    pub(crate) fn collect<L: Label>(
        representation: Representation,
        vertices: &BTreeSet<L>,
        edges: &[Edge<L>],
    ) -> Self {
        let touched: HashSet<&L> = edges
            .iter()
            .flat_map(|e| [e.source(), e.target()])
            .collect();

        Self {
            representation,
            vertex_count: vertices.len(),
            edge_count: edges.len(),
            self_loops: edges.iter().filter(|e| e.is_self_loop()).count(),
            isolated_vertices: vertices.iter().filter(|v| !touched.contains(v)).count(),
            total_weight: edges.iter().map(|e| i64::from(e.weight())).sum(),
        }
    }
}

/// 与布局无关的图快照
///
/// 两种布局在相同操作序列下产生的快照完全相等。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot<L> {
    pub vertices: BTreeSet<L>,
    /// 按 (source, target) 排序
    pub edges: Vec<Edge<L>>,
}

impl<L: Label> GraphSnapshot<L> {
    pub fn new(vertices: BTreeSet<L>, edges: Vec<Edge<L>>) -> Self {
        Self { vertices, edges }
    }

    /// 指定边的权重，无边时为 0
    pub fn weight(&self, source: &L, target: &L) -> Weight {
        self.edges
            .iter()
            .find(|e| e.connects(source, target))
            .map(Edge::weight)
            .unwrap_or(0)
    }
}

impl<L: Label + Serialize> GraphSnapshot<L> {
    /// 导出为格式化 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
