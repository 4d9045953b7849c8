//! 边列表布局
//!
//! 顶点集合与边记录分开存放；每次查询都要扫描全部边。

use super::edge::Edge;
use super::{render, WeightedGraph};
use crate::types::{Label, Representation, Weight};
use indexmap::IndexSet;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, trace};

/// 边列表图
///
/// 不变式：
/// - `edges` 中任意边的两个端点都在 `vertices` 中
/// - 同一有序顶点对最多一条边，且权重不为 0
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L> {
    /// 顶点集合（保持插入顺序，便于输出）
    vertices: IndexSet<L>,
    /// 边记录
    edges: Vec<Edge<L>>,
}

impl<L: Label> EdgeListGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// 查找边 source -> target 的位置
    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    #[cfg(test)]
    fn check_rep(&self) {
        for e in &self.edges {
            assert!(self.vertices.contains(e.source()), "悬空源顶点: {}", e);
            assert!(self.vertices.contains(e.target()), "悬空目标顶点: {}", e);
            assert_ne!(e.weight(), 0, "存储了权重为 0 的边: {}", e);
        }
        for (i, a) in self.edges.iter().enumerate() {
            for b in &self.edges[i + 1..] {
                assert!(!b.connects(a.source(), a.target()), "重复边: {}", a);
            }
        }
    }
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for EdgeListGraph<L> {
    fn representation(&self) -> Representation {
        Representation::EdgeList
    }

    fn add(&mut self, vertex: L) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        trace!(vertex = %vertex, "添加顶点");
        self.vertices.insert(vertex)
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        self.add(source.clone());
        self.add(target.clone());

        let previous = match (self.position(&source, &target), weight) {
            (Some(i), 0) => self.edges.remove(i).weight(),
            (Some(i), _) => {
                let replacement = Edge::new(source.clone(), target.clone(), weight);
                std::mem::replace(&mut self.edges[i], replacement).weight()
            }
            (None, 0) => 0,
            (None, _) => {
                self.edges.push(Edge::new(source.clone(), target.clone(), weight));
                0
            }
        };

        debug!(source = %source, target = %target, weight, previous, "设置边");
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(
            vertex = %vertex,
            edges_removed = before - self.edges.len(),
            "删除顶点"
        );
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = self.edges.clone();
        edges.sort();
        edges
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: Label> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            &self.vertices,
            self.edges
                .iter()
                .map(|e| (e.source(), e.target(), e.weight())),
        )
    }
}
