//! 图核心模块
//!
//! 定义带权有向图的统一接口，以及两种可互换的内部布局：
//! - [`EdgeListGraph`]：扁平边列表 + 独立顶点集合
//! - [`VertexListGraph`]：每个顶点持有自己的出边表

mod edge;
mod edges_graph;
mod shared;
mod snapshot;
mod vertex;
mod vertices_graph;

#[cfg(test)]
mod contract;

pub use edge::Edge;
pub use edges_graph::EdgeListGraph;
pub use shared::SharedGraph;
pub use snapshot::{GraphSnapshot, GraphStats};
pub use vertex::{OutEdge, OutEdges};
pub use vertices_graph::VertexListGraph;

use crate::types::{Label, Representation, Weight};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// 可变的带权有向图
///
/// 两种布局必须对同一操作序列给出完全一致的返回值与查询结果。
/// “顶点不存在”从不视为错误，而是退化为 `false` / `0` / 空结果。
/// 所有查询都返回独立的快照，之后对图的修改不会影响已返回的值。
pub trait WeightedGraph<L: Label>: fmt::Display {
    /// 当前使用的存储布局
    fn representation(&self) -> Representation;

    /// 添加顶点，若为新顶点返回 `true`
    fn add(&mut self, vertex: L) -> bool;

    /// 设置边 source -> target 的权重，返回旧权重（无边时为 0）
    ///
    /// 两个端点不存在时会先被添加。权重为 0 表示删除该边。
    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight;

    /// 删除顶点及所有以它为端点的边，顶点存在时返回 `true`
    fn remove(&mut self, vertex: &L) -> bool;

    /// 顶点集合快照
    fn vertices(&self) -> BTreeSet<L>;

    /// 所有指向 `target` 的边：源顶点 -> 权重
    fn sources(&self, target: &L) -> BTreeMap<L, Weight>;

    /// 所有从 `source` 出发的边：目标顶点 -> 权重
    fn targets(&self, source: &L) -> BTreeMap<L, Weight>;

    /// 所有边，按 (source, target) 排序
    fn edges(&self) -> Vec<Edge<L>>;

    /// 顶点是否存在
    fn contains(&self, vertex: &L) -> bool;

    /// 顶点数量
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// 边数量
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// 统计信息
    fn stats(&self) -> GraphStats {
        GraphStats::collect(self.representation(), &self.vertices(), &self.edges())
    }

    /// 与布局无关的完整快照
    fn snapshot(&self) -> GraphSnapshot<L> {
        GraphSnapshot::new(self.vertices(), self.edges())
    }
}

/// 线程间共享时使用的图对象
pub type DynGraph<L> = Box<dyn WeightedGraph<L> + Send + Sync>;

/// 按布局创建空图
pub fn new_graph<L>(representation: Representation) -> DynGraph<L>
where
    L: Label + Send + Sync + 'static,
{
    match representation {
        Representation::EdgeList => Box::new(EdgeListGraph::new()),
        Representation::VertexList => Box::new(VertexListGraph::new()),
    }
}

/// 两种布局共用的文本输出格式
///
/// ```text
/// Vertices: {A, B}
/// Edges:
///   A -> B (weight: 10)
/// ```
fn render<'a, L, V, E>(f: &mut fmt::Formatter<'_>, vertices: V, edges: E) -> fmt::Result
where
    L: Label + 'a,
    V: IntoIterator<Item = &'a L>,
    E: IntoIterator<Item = (&'a L, &'a L, Weight)>,
{
    f.write_str("Vertices: {")?;
    for (i, v) in vertices.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", v)?;
    }
    f.write_str("}\nEdges:")?;
    for (source, target, weight) in edges {
        write!(f, "\n  {} -> {} (weight: {})", source, target, weight)?;
    }
    Ok(())
}
