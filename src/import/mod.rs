//! 数据导入导出模块
//!
//! 以 `source,target,weight` 格式的 CSV 批量设置边或导出当前所有边。
//! 权重为 0 的行表示删除该边，与 `set` 语义一致。

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::types::{parse_weight, validate_label, Weight};
use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// CSV 表头
pub const CSV_HEADER: [&str; 3] = ["source", "target", "weight"];

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// 读取的数据行数（不含表头）
    pub rows: usize,
    /// 新建或更新的边数
    pub edges_set: usize,
    /// 实际删除的边数
    pub edges_removed: usize,
    /// 新增的顶点数
    pub vertices_added: usize,
    /// 无效行数
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边记录（CSV 行）
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: String,
}

impl EdgeRecord {
    /// 校验整行；任一字段无效则整行不生效
    fn validate(&self) -> Result<(String, String, Weight)> {
        Ok((
            validate_label(&self.source)?,
            validate_label(&self.target)?,
            parse_weight(&self.weight)?,
        ))
    }
}

/// 批量边导入器
pub struct EdgeImporter<'g, G: ?Sized> {
    graph: &'g mut G,
    batch_size: usize,
}

impl<'g, G> EdgeImporter<'g, G>
where
    G: WeightedGraph<String> + ?Sized,
{
    /// 创建导入器
    pub fn new(graph: &'g mut G) -> Self {
        Self {
            graph,
            batch_size: 10000,
        }
    }

    /// 设置进度日志间隔
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// 从 CSV 文件导入
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_reader(file)
    }

    /// 从任意 CSV 输入导入
    pub fn import_reader<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(CSV_HEADER) {
            return Err(Error::ImportError(format!(
                "表头应为 {}，实际为 {}",
                CSV_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut stats = ImportStats::default();
        for (i, record) in reader.deserialize::<EdgeRecord>().enumerate() {
            stats.rows += 1;
            match record.map_err(Error::from).and_then(|r| r.validate()) {
                Ok((source, target, weight)) => self.apply(source, target, weight, &mut stats),
                Err(e) => {
                    // 行号从 1 开始，第 1 行是表头
                    warn!(line = i + 2, error = %e, "跳过无效行");
                    stats.errors += 1;
                }
            }

            if stats.rows % self.batch_size == 0 {
                info!(rows = stats.rows, "导入进度");
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            rows = stats.rows,
            edges_set = stats.edges_set,
            edges_removed = stats.edges_removed,
            errors = stats.errors,
            "导入完成"
        );
        Ok(stats)
    }

    fn apply(&mut self, source: String, target: String, weight: Weight, stats: &mut ImportStats) {
        let before = self.graph.vertex_count();
        let previous = self.graph.set(source, target, weight);
        stats.vertices_added += self.graph.vertex_count() - before;

        if weight != 0 {
            stats.edges_set += 1;
        } else if previous != 0 {
            stats.edges_removed += 1;
        }
    }
}

/// 导出所有边到 CSV 文件，返回导出的边数
///
/// 孤立顶点无法用边表示，不会出现在输出中。
pub fn export_csv<G, P>(graph: &G, path: P) -> Result<usize>
where
    G: WeightedGraph<String> + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    export_writer(graph, file)
}

/// 导出所有边到任意输出
pub fn export_writer<G, W>(graph: &G, writer: W) -> Result<usize>
where
    G: WeightedGraph<String> + ?Sized,
    W: Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    let edges = graph.edges();
    for e in &edges {
        writer.write_record([e.source(), e.target(), &e.weight().to_string()])?;
    }
    writer.flush()?;
    Ok(edges.len())
}
