//! 顶点列表布局
//!
//! 每个顶点持有自己的出边表：`targets` 只需查看一个顶点，
//! `sources` 仍需遍历所有顶点。

use super::edge::Edge;
use super::vertex::OutEdges;
use super::{render, WeightedGraph};
use crate::types::{Label, Representation, Weight};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, trace};

/// 顶点列表图
///
/// 不变式：
/// - 顶点集合即 `vertices` 的键集合（包括孤立顶点）
/// - 任意出边表中的目标顶点都是 `vertices` 的键
#[derive(Debug, Clone)]
pub struct VertexListGraph<L> {
    /// 顶点 -> 出边表（保持插入顺序，便于输出）
    vertices: IndexMap<L, OutEdges<L>>,
}

impl<L: Label> VertexListGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    #[cfg(test)]
    fn check_rep(&self) {
        for (source, out) in &self.vertices {
            for e in out.iter() {
                assert!(
                    self.vertices.contains_key(&e.target),
                    "悬空目标顶点: {} -> {}",
                    source,
                    e.target
                );
                assert_ne!(e.weight, 0, "存储了权重为 0 的边: {} -> {}", source, e.target);
            }
            let distinct: BTreeSet<&L> = out.iter().map(|e| &e.target).collect();
            assert_eq!(distinct.len(), out.len(), "{} 存在重复出边", source);
        }
    }
}

impl<L: Label> Default for VertexListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> WeightedGraph<L> for VertexListGraph<L> {
    fn representation(&self) -> Representation {
        Representation::VertexList
    }

    fn add(&mut self, vertex: L) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        trace!(vertex = %vertex, "添加顶点");
        self.vertices.insert(vertex, OutEdges::new());
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        self.add(source.clone());
        self.add(target.clone());

        let previous = self
            .vertices
            .entry(source.clone())
            .or_default()
            .set(target.clone(), weight);

        debug!(source = %source, target = %target, weight, previous, "设置边");
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(own) = self.vertices.shift_remove(vertex) else {
            return false;
        };

        let incoming: usize = self
            .vertices
            .values_mut()
            .map(|out| out.remove_target(vertex))
            .sum();
        debug!(
            vertex = %vertex,
            edges_removed = own.len() + incoming,
            "删除顶点"
        );
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.vertices.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.vertices
            .iter()
            .filter_map(|(source, out)| out.weight_to(target).map(|w| (source.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.vertices
            .get(source)
            .map(|out| out.iter().map(|e| (e.target.clone(), e.weight)).collect())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges: Vec<Edge<L>> = self
            .vertices
            .iter()
            .flat_map(|(source, out)| {
                out.iter()
                    .map(move |e| Edge::new(source.clone(), e.target.clone(), e.weight))
            })
            .collect();
        edges.sort();
        edges
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.values().map(OutEdges::len).sum()
    }
}

impl<L: Label> fmt::Display for VertexListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            self.vertices.keys(),
            self.vertices
                .iter()
                .flat_map(|(source, out)| out.iter().map(move |e| (source, &e.target, e.weight))),
        )
    }
}
