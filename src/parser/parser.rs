//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser is a plain recursive-descent parser with one token of
//! lookahead: rules inspect [`Parser::current_token`] to choose a branch and
//! consume with [`Parser::advance`] or one of the `expect_*` helpers. It never
//! backtracks.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
};

use super::{
    keywords::{KeywordMap, KeywordRole},
    stmt::parse_declaration,
};

/// How deep groupings, unary chains, nested expressions and blocks may nest
/// before parsing is abandoned with [`ErrorImpl::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the read cursor and the keyword configuration.
/// A parser is built for one token stream and consumed by [`Parser::parse`].
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Which keyword lexemes open which constructs
    keywords: KeywordMap,
    /// Current nesting depth, bounded by [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl Parser {
    /// Creates a parser using the default keyword mapping.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_keywords(tokens, KeywordMap::default())
    }

    /// Creates a parser with a custom keyword mapping.
    ///
    /// A stream that does not end in EOF gets one appended just past the
    /// last token, so the cursor always has a token to look at.
    pub fn with_keywords(mut tokens: Vec<Token>, keywords: KeywordMap) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let (line, column) = tokens.last().map(end_of_token).unwrap_or((1, 1));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: TokenValue::Text(String::from("EOF")),
                lexeme: String::new(),
                line,
                column,
            });
        }

        Parser {
            tokens,
            pos: 0,
            keywords,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// The grammar role of the current token, if it is a mapped keyword.
    pub fn current_role(&self) -> Option<KeywordRole> {
        let token = self.current_token();
        if token.kind != TokenKind::Keyword {
            return None;
        }
        token.text().and_then(|text| self.keywords.role_of(text))
    }

    pub fn at_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_symbol(symbol)
    }

    pub fn at_operator(&self, operator: &str) -> bool {
        self.current_token().is_operator(operator)
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Builds an error pointing at the current token.
    pub fn error_expected(&self, expected: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
            },
            token.position(),
        )
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an error carrying `message` and the position of
    /// the current token. The cursor does not move on error.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error_expected(message));
        }
        Ok(self.advance())
    }

    /// Like [`Parser::expect`], but also checks the lexeme of a symbol.
    pub fn expect_symbol(&mut self, symbol: &str, message: &str) -> Result<Token, Error> {
        if !self.at_symbol(symbol) {
            return Err(self.error_expected(message));
        }
        Ok(self.advance())
    }

    /// Expects a function or callee name: an identifier or the entry point keyword.
    pub fn expect_name(&mut self, message: &str) -> Result<String, Error> {
        if self.at_name() {
            Ok(self.advance().lexeme)
        } else {
            Err(self.error_expected(message))
        }
    }

    pub fn at_name(&self) -> bool {
        self.current_token_kind() == TokenKind::Ident
            || self.current_role() == Some(KeywordRole::EntryPoint)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Fails at the current token once [`MAX_NESTING_DEPTH`] is reached,
    /// so pathological input yields an error instead of exhausting the stack.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token().position(),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Parses declarations until EOF.
    pub fn parse(mut self) -> Result<Program, Error> {
        let mut declarations = vec![];

        while !self.at_eof() {
            declarations.push(parse_declaration(&mut self)?);
        }

        Ok(Program { declarations })
    }
}

/// Line and column just past the last character of `token`.
fn end_of_token(token: &Token) -> (u32, u32) {
    token
        .lexeme
        .chars()
        .fold((token.line, token.column), |(line, column), c| match c {
            '\n' => (line + 1, 1),
            _ => (line, column + 1),
        })
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing. Parsing stops at the first
/// syntax error; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parse_with_keywords(tokens, KeywordMap::default())
}

/// [`parse`] with a custom keyword mapping.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_keywords(tokens: Vec<Token>, keywords: KeywordMap) -> Result<Program, Error> {
    match Parser::with_keywords(tokens, keywords).parse() {
        Ok(program) => {
            tracing::debug!(
                declaration_count = program.declarations.len(),
                "parsed program"
            );
            Ok(program)
        }
        Err(error) => {
            tracing::debug!(%error, "parsing failed");
            Err(error)
        }
    }
}
