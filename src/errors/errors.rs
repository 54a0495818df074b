use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which front-end phase rejected the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::MalformedCharLiteral { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MalformedCharLiteral { .. } => "MalformedCharLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add the closing `\"`"))
            }
            ErrorImpl::MalformedCharLiteral { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid character literal `{}`, a character literal holds exactly one character",
                lexeme
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", found, expected))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only a variable can appear on the left of `=`",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "nesting is limited to {} levels, split the expression or block",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("malformed character literal: {lexeme:?}")]
    MalformedCharLiteral { lexeme: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("{expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
