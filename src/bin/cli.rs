//! wdigraph CLI 工具
//!
//! 交互式命令行界面

use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wdigraph::cli::{execute_line, CommandCompleter, CommandResult, Printer};
use wdigraph::import::EdgeImporter;
use wdigraph::{GraphConfig, Representation, WeightedGraph};

#[derive(Parser, Debug)]
#[command(name = "wdigraph-cli")]
#[command(about = "wdigraph 带权有向图命令行工具")]
struct Args {
    /// 存储布局: edge-list, vertex-list（覆盖配置文件）
    #[arg(short, long)]
    repr: Option<Representation>,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 启动时导入的 CSV 边文件
    #[arg(short, long)]
    import: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 紧凑表格输出
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GraphConfig::from_file(path)?,
        None => GraphConfig::default(),
    };
    if let Some(repr) = args.repr {
        config = config.with_representation(repr);
    }

    let mut graph = config.build::<String>();
    let printer = Printer::new(args.compact);

    if let Some(path) = &args.import {
        let stats = EdgeImporter::new(graph.as_mut())
            .with_batch_size(config.import_batch_size)
            .import_csv(path)?;
        eprintln!(
            "已导入 {}: {} 行, {} 条边, {} 个错误",
            path.display(),
            stats.rows,
            stats.edges_set,
            stats.errors
        );
    }

    // 单个命令模式
    if let Some(line) = &args.execute {
        if let CommandResult::Message(output) = execute_line(line, graph.as_mut(), &printer)? {
            print!("{}", output);
        }
        return Ok(());
    }

    println!("wdigraph CLI v{} - 带权有向图", wdigraph::VERSION);
    println!("==================================");
    println!("存储布局: {}", graph.representation());
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CommandCompleter::new()));

    let history = config.history_path();
    if let Some(path) = &history {
        // 首次运行时历史文件不存在
        let _ = editor.load_history(path);
    }

    loop {
        let line = match editor.readline("wdigraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        match execute_line(line, graph.as_mut(), &printer) {
            Ok(CommandResult::Exit) => break,
            Ok(CommandResult::Message(output)) => print!("{}", output),
            Ok(CommandResult::Continue) => {}
            Err(e) => println!("{} {}", "错误:".red().bold(), e),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!(error = %e, path = %path.display(), "保存历史记录失败");
        }
    }

    println!("再见！");
    Ok(())
}
