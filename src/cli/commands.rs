//! 控制台命令处理
//!
//! 解析一行输入为 [`Command`]，并在图上执行。
//! 标签和权重在解析阶段校验，无效输入不会触及图。

use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::cli::printer::Printer;
use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::import::{export_csv, EdgeImporter};
use crate::types::{parse_weight, validate_label, Weight};

/// 命令关键字（用于补全）
pub const COMMAND_KEYWORDS: &[&str] = &[
    "add", "set", "remove", "vertices", "sources", "targets", "show", "stats", "json", "import",
    "export", "help", "quit", "exit",
];

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Set {
        source: String,
        target: String,
        weight: Weight,
    },
    Remove(String),
    Vertices,
    Sources(String),
    Targets(String),
    /// 文本形式输出整张图
    Show,
    Stats,
    /// JSON 快照
    Json,
    Import(PathBuf),
    Export(PathBuf),
    Help,
    Quit,
}

/// 命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

fn expect_args(args: &[&str], n: usize, usage: &str) -> Result<()> {
    if args.len() != n {
        return Err(Error::ParseError(format!("用法: {}", usage)));
    }
    Ok(())
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            return Err(Error::ParseError("空命令".to_string()));
        };

        let command = match cmd.to_lowercase().as_str() {
            "add" | "a" => {
                expect_args(args, 1, "add <顶点>")?;
                Command::Add(validate_label(args[0])?)
            }
            "set" | "s" => {
                expect_args(args, 3, "set <源顶点> <目标顶点> <权重>")?;
                Command::Set {
                    source: validate_label(args[0])?,
                    target: validate_label(args[1])?,
                    weight: parse_weight(args[2])?,
                }
            }
            "remove" | "rm" => {
                expect_args(args, 1, "remove <顶点>")?;
                Command::Remove(validate_label(args[0])?)
            }
            "vertices" | "v" => Command::Vertices,
            "sources" | "in" => {
                expect_args(args, 1, "sources <目标顶点>")?;
                Command::Sources(validate_label(args[0])?)
            }
            "targets" | "out" => {
                expect_args(args, 1, "targets <源顶点>")?;
                Command::Targets(validate_label(args[0])?)
            }
            "show" | "print" => Command::Show,
            "stats" | "info" => Command::Stats,
            "json" => Command::Json,
            "import" | "load" => {
                expect_args(args, 1, "import <CSV 文件>")?;
                Command::Import(PathBuf::from(args[0]))
            }
            "export" | "save" => {
                expect_args(args, 1, "export <CSV 文件>")?;
                Command::Export(PathBuf::from(args[0]))
            }
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(Error::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// 在图上执行命令
pub fn execute<G>(command: Command, graph: &mut G, printer: &Printer) -> Result<CommandResult>
where
    G: WeightedGraph<String> + ?Sized,
{
    debug!(?command, "执行命令");

    let output = match command {
        Command::Add(vertex) => {
            if graph.add(vertex.clone()) {
                format!("已添加顶点 {}", vertex)
            } else {
                format!("顶点 {} 已存在", vertex)
            }
        }
        Command::Set {
            source,
            target,
            weight,
        } => {
            let label = format!("{} -> {}", source, target);
            let previous = graph.set(source, target, weight);
            match (previous, weight) {
                (0, 0) => format!("{} 不存在，无需删除", label),
                (p, 0) => format!("已删除 {} (原权重: {})", label, p),
                (0, w) => format!("已创建 {} (weight: {})", label, w),
                (p, w) => format!("已更新 {} (weight: {} -> {})", label, p, w),
            }
        }
        Command::Remove(vertex) => {
            if graph.remove(&vertex) {
                format!("已删除顶点 {} 及其所有边", vertex)
            } else {
                format!("顶点 {} 不存在", vertex)
            }
        }
        Command::Vertices => printer.print_vertices(&graph.vertices()),
        Command::Sources(target) => printer.print_weights("source", &graph.sources(&target)),
        Command::Targets(source) => printer.print_weights("target", &graph.targets(&source)),
        Command::Show => format!("{}\n", graph),
        Command::Stats => printer.print_stats(&graph.stats()),
        Command::Json => graph.snapshot().to_json()?,
        Command::Import(path) => {
            let stats = EdgeImporter::new(&mut *graph).import_csv(&path)?;
            printer.print_import(&stats)
        }
        Command::Export(path) => {
            let count = export_csv(&*graph, &path)?;
            format!("已导出 {} 条边到 {}", count, path.display())
        }
        Command::Help => Printer::print_help(),
        Command::Quit => return Ok(CommandResult::Exit),
    };

    Ok(CommandResult::Message(output))
}

/// 解析并执行一行输入；空行返回 [`CommandResult::Continue`]
pub fn execute_line<G>(line: &str, graph: &mut G, printer: &Printer) -> Result<CommandResult>
where
    G: WeightedGraph<String> + ?Sized,
{
    if line.trim().is_empty() {
        return Ok(CommandResult::Continue);
    }
    execute(line.parse()?, graph, printer)
}
