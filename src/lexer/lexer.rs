use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenKind, TokenValue, BOOLS, KEYWORDS, TYPES};

/// Receives the text matched by its pattern at the cursor. The handler is
/// responsible for consuming it.
pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order is priority: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[(){};,]").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(==|><|<=|>=)").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new(r"^[+\-*/%<>=!]").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(r"^[\wáéíóúÁÉÍÓÚüÜñÑ]+").unwrap(), handler: word_handler },
    ];
}

/// Single-use scanner over one source text.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Byte offset into `source`.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    /// Source text between a byte offset and the cursor.
    fn slice_from(&self, start: usize) -> &'a str {
        let source = self.source;
        &source[start..self.pos]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Consumes one character, keeping line and column in step.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn push(&mut self, kind: TokenKind, value: TokenValue, lexeme: &str, start: Position) {
        tracing::trace!(%kind, line = start.line, column = start.column, lexeme, "lexed token");
        self.tokens.push(Token {
            kind,
            value,
            lexeme: lexeme.to_string(),
            line: start.line,
            column: start.column,
        });
    }

    /// Pushes a token whose value is its own lexeme and consumes the lexeme.
    fn push_text(&mut self, kind: TokenKind, lexeme: &str) {
        let start = self.position();
        self.push(kind, TokenValue::Text(lexeme.to_string()), lexeme, start);
        self.advance_n(lexeme.chars().count());
    }

    /// Runs the scanner to completion. Consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            let remaining = self.remainder();
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

            match matched {
                Some((handler, text)) => handler(&mut self, text)?,
                None => {
                    let character = self.at().unwrap_or('\0');
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter { character },
                        self.position(),
                    ));
                }
            }
        }

        let end = self.position();
        self.push(TokenKind::EOF, TokenValue::Text(String::from("EOF")), "", end);
        Ok(self.tokens)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.chars().count());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_text(TokenKind::Symbol, matched);
    Ok(())
}

fn operator_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_text(TokenKind::Operator, matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();

    let value = if matched.contains('.') {
        matched.parse::<f64>().map(TokenValue::Float).ok()
    } else {
        matched.parse::<i64>().map(TokenValue::Int).ok()
    };

    let Some(value) = value else {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: matched.to_string(),
            },
            start,
        ));
    };

    lexer.push(TokenKind::Number, value, matched, start);
    lexer.advance_n(matched.chars().count());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    let start_pos = lexer.pos;
    lexer.advance();

    // Raw copy: no escape processing, newlines allowed.
    let mut string_literal = String::new();
    loop {
        match lexer.advance() {
            Some('"') => break,
            Some(ch) => string_literal.push(ch),
            None => return Err(Error::new(ErrorImpl::UnterminatedString, start)),
        }
    }

    let lexeme = lexer.slice_from(start_pos);
    lexer.push(TokenKind::String, TokenValue::Text(string_literal), lexeme, start);
    Ok(())
}

fn char_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    let start_pos = lexer.pos;
    lexer.advance();

    let ch = lexer.advance();
    let closing = lexer.advance();
    let lexeme = lexer.slice_from(start_pos);

    match (ch, closing) {
        (Some(ch), Some('\'')) => {
            lexer.push(TokenKind::Char, TokenValue::Char(ch), lexeme, start);
            Ok(())
        }
        _ => Err(Error::new(
            ErrorImpl::MalformedCharLiteral {
                lexeme: lexeme.to_string(),
            },
            start,
        )),
    }
}

fn word_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    if KEYWORDS.contains(matched) {
        lexer.push_text(TokenKind::Keyword, matched);
    } else if TYPES.contains(matched) {
        lexer.push_text(TokenKind::Type, matched);
    } else if let Some(value) = BOOLS.get(matched) {
        let start = lexer.position();
        lexer.push(TokenKind::Bool, TokenValue::Bool(*value), matched, start);
        lexer.advance_n(matched.chars().count());
    } else {
        lexer.push_text(TokenKind::Ident, matched);
    }

    Ok(())
}

/// Tokenizes a whole source text.
///
/// The returned sequence always ends with exactly one [`TokenKind::EOF`].
/// Scanning stops at the first lexical error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => {
            tracing::debug!(token_count = tokens.len(), "tokenized source");
            Ok(tokens)
        }
        Err(error) => {
            tracing::debug!(%error, "tokenizing failed");
            Err(error)
        }
    }
}
