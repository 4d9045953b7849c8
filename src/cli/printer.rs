//! 结果打印器
//!
//! 以表格形式输出顶点集合、边权重映射和统计信息

use std::collections::{BTreeMap, BTreeSet};

use prettytable::{format, row, Table};

use crate::graph::GraphStats;
use crate::import::ImportStats;
use crate::types::Weight;

/// 结果打印器
#[derive(Debug, Clone, Default)]
pub struct Printer {
    /// 紧凑模式：不画表格边框
    compact: bool,
}

impl Printer {
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.compact {
            table.set_format(*format::consts::FORMAT_CLEAN);
        } else {
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
        }
        table
    }

    /// 打印顶点集合
    pub fn print_vertices(&self, vertices: &BTreeSet<String>) -> String {
        if vertices.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = self.table();
        table.set_titles(row!["vertex"]);
        for v in vertices {
            table.add_row(row![v]);
        }
        format!("{}{} vertex(es)\n", table, vertices.len())
    }

    /// 打印 顶点 -> 权重 映射
    pub fn print_weights(&self, column: &str, weights: &BTreeMap<String, Weight>) -> String {
        if weights.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = self.table();
        table.set_titles(row![column, "weight"]);
        for (v, w) in weights {
            table.add_row(row![v, w]);
        }
        format!("{}{} edge(s)\n", table, weights.len())
    }

    /// 打印统计信息
    pub fn print_stats(&self, stats: &GraphStats) -> String {
        let mut table = self.table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Representation", stats.representation]);
        table.add_row(row!["Vertex Count", stats.vertex_count]);
        table.add_row(row!["Edge Count", stats.edge_count]);
        table.add_row(row!["Self Loops", stats.self_loops]);
        table.add_row(row!["Isolated Vertices", stats.isolated_vertices]);
        table.add_row(row!["Total Weight", stats.total_weight]);
        table.to_string()
    }

    /// 打印导入统计
    pub fn print_import(&self, stats: &ImportStats) -> String {
        let mut table = self.table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Rows", stats.rows]);
        table.add_row(row!["Edges Set", stats.edges_set]);
        table.add_row(row!["Edges Removed", stats.edges_removed]);
        table.add_row(row!["Vertices Added", stats.vertices_added]);
        table.add_row(row!["Errors", stats.errors]);
        table.add_row(row!["Duration (ms)", stats.duration_ms]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   wdigraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

  add, a <V>              添加顶点
  set, s <S> <T> <W>      设置边 S -> T 的权重（W 为 0 时删除该边）
  remove, rm <V>          删除顶点及其所有边
  vertices, v             列出所有顶点
  sources, in <V>         列出指向 V 的边
  targets, out <V>        列出从 V 出发的边
  show, print             文本形式输出整张图
  stats, info             显示图统计信息
  json                    输出 JSON 快照
  import, load <FILE>     从 CSV 导入边 (source,target,weight)
  export, save <FILE>     导出所有边到 CSV
  help, h, ?              显示帮助
  quit, exit, q           退出程序

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
