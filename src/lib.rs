#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

extern crate regex;

/// 1-based source location. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of `line` (1-based) without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)? as usize)
        .map(|text| text.trim_end_matches('\r'))
}
