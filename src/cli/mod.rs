//! 交互式命令行支持

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute, execute_line, Command, CommandResult};
pub use completer::CommandCompleter;
pub use printer::Printer;
