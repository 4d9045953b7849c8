//! wdigraph - 可变带权有向图
//!
//! 同一套接口下的两种内部布局，便于比较数据结构的取舍：
//! - 边列表：扁平的 (source, target, weight) 记录
//! - 顶点列表：每个顶点持有自己的出边表
//!
//! 权重 0 是删除标记；删除顶点会级联删除所有相关的边。

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{
    new_graph, DynGraph, Edge, EdgeListGraph, GraphSnapshot, GraphStats, SharedGraph,
    VertexListGraph, WeightedGraph,
};
pub use types::{Label, Representation, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
