//! 线程间共享的图
//!
//! 图本身不含任何锁；多线程访问时由一把读写锁保护整张图，
//! 每个操作在持锁期间完整执行。

use super::{new_graph, DynGraph, GraphSnapshot, WeightedGraph};
use crate::types::{Label, Representation, Weight};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// 共享图句柄（克隆后指向同一张图）
pub struct SharedGraph<L> {
    inner: Arc<RwLock<DynGraph<L>>>,
}

impl<L> Clone for SharedGraph<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L> SharedGraph<L>
where
    L: Label + Send + Sync + 'static,
{
    /// 按布局创建空的共享图
    pub fn new(representation: Representation) -> Self {
        Self::from_graph(new_graph(representation))
    }

    /// 包装已有的图
    pub fn from_graph(graph: DynGraph<L>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn add(&self, vertex: L) -> bool {
        self.inner.write().add(vertex)
    }

    pub fn set(&self, source: L, target: L, weight: Weight) -> Weight {
        self.inner.write().set(source, target, weight)
    }

    pub fn remove(&self, vertex: &L) -> bool {
        self.inner.write().remove(vertex)
    }

    pub fn vertices(&self) -> BTreeSet<L> {
        self.inner.read().vertices()
    }

    pub fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.inner.read().sources(target)
    }

    pub fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.inner.read().targets(source)
    }

    pub fn snapshot(&self) -> GraphSnapshot<L> {
        self.inner.read().snapshot()
    }

    /// 在读锁下执行一组查询
    pub fn read<R>(&self, f: impl FnOnce(&DynGraph<L>) -> R) -> R {
        f(&self.inner.read())
    }

    /// 在写锁下执行一组修改，整体对其他线程原子可见
    pub fn write<R>(&self, f: impl FnOnce(&mut DynGraph<L>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
