//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a [`Program`](crate::ast::ast::Program). It handles:
//!
//! - Declaration parsing (functions, variables and constants)
//! - Statement parsing (blocks, control flow, returns, expression statements)
//! - Expression parsing by precedence climbing over binding powers
//! - Fail-fast error reporting with the offending token's position
//!
//! Which keyword opens which construct is configured through
//! [`keywords::KeywordMap`].

pub mod expr;
pub mod keywords;
pub mod lookups;
pub mod parser;
pub mod stmt;
