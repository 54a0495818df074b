//! Error types and error reporting for the front end.
//!
//! This module defines the single positioned error type shared by the lexer
//! and the parser. It includes:
//!
//! - Error structures with line/column information
//! - Lexical and syntax error variants
//! - Caret-style diagnostic rendering against the source text

pub mod errors;
pub mod report;
