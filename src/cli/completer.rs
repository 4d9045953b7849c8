//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::cli::commands::COMMAND_KEYWORDS;

/// wdigraph CLI 补全器
///
/// 只补全行首的命令关键字；顶点标签由用户自由输入。
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 光标前文本对应的候选关键字
    pub fn candidates(&self, line_to_cursor: &str) -> Vec<&'static str> {
        if line_to_cursor.contains(char::is_whitespace) {
            return Vec::new();
        }
        let prefix = line_to_cursor.to_lowercase();
        COMMAND_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| kw.starts_with(&prefix))
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completions = self
            .candidates(&line[..pos])
            .into_iter()
            .map(|kw| Pair {
                display: kw.to_string(),
                replacement: format!("{} ", kw),
            })
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
