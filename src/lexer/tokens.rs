use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("ti");
        set.insert("const");
        set.insert("macorróca");
        set.insert("masálaca");
        set.insert("wá");
        set.insert("pa");
        set.insert("ótacá");
        set.insert("Ihoné");
        set.insert("lúri");
        set.insert("cuá");
        set.insert("Iherré");
        set.insert("main");
        set
    };
    pub static ref TYPES: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("chátené");
        set.insert("lhajáia");
        set.insert("aquí");
        set.insert("usírra");
        set.insert("malhióca");
        set
    };
    pub static ref BOOLS: HashMap<&'static str, bool> = {
        let mut map = HashMap::new();
        map.insert("tócu", true);
        map.insert("maíca", false);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Type,
    Bool,

    Ident,

    Number,
    String,
    Char,

    Operator,
    // ( ) { } ; ,
    Symbol,

    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Type => "TYPE",
            TokenKind::Bool => "BOOL",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::EOF => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Keyword, type, identifier, operator and symbol lexemes, string contents.
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Bool(value) => write!(f, "{}", value),
            TokenValue::Char(value) => write!(f, "{:?}", value),
            TokenValue::Text(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Exact source slice, quotes included. Empty for EOF.
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Text value of keyword, type, identifier, operator, symbol and string tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True for a token of `kind` whose text value is exactly `text`.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text() == Some(text)
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.is(TokenKind::Symbol, symbol)
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.is(TokenKind::Operator, operator)
    }

    /// How the token is shown in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            _ => self.lexeme.clone(),
        }
    }
}
