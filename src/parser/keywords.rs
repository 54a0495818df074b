//! Binding of grammar roles to keyword lexemes.
//!
//! The keyword table is a fixed vocabulary, but which of its words opens an
//! `if`, a `while` or an `else` is configuration. [`KeywordMap::default`]
//! holds the mapping used by the standard grammar; callers can override any
//! role with [`KeywordMap::new`].

use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::KEYWORDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordRole {
    Function,
    Variable,
    Constant,
    Return,
    If,
    Else,
    While,
    /// The program entry point name. Accepted where a function name is expected.
    EntryPoint,
}

impl KeywordRole {
    pub const ALL: [KeywordRole; 8] = [
        KeywordRole::Function,
        KeywordRole::Variable,
        KeywordRole::Constant,
        KeywordRole::Return,
        KeywordRole::If,
        KeywordRole::Else,
        KeywordRole::While,
        KeywordRole::EntryPoint,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for KeywordRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeywordRole::Function => "function",
            KeywordRole::Variable => "variable",
            KeywordRole::Constant => "constant",
            KeywordRole::Return => "return",
            KeywordRole::If => "if",
            KeywordRole::Else => "else",
            KeywordRole::While => "while",
            KeywordRole::EntryPoint => "entry point",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{lexeme:?} is not in the keyword table")]
    UnknownKeyword { lexeme: String },
    #[error("keyword {lexeme:?} is bound to both the {first} and {second} roles")]
    DuplicateKeyword {
        lexeme: &'static str,
        first: KeywordRole,
        second: KeywordRole,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMap {
    lexemes: [&'static str; 8],
}

impl Default for KeywordMap {
    fn default() -> Self {
        KeywordMap {
            lexemes: [
                "macorróca", // Function
                "ti",        // Variable
                "const",     // Constant
                "Iherré",    // Return
                "wá",        // If
                "pa",        // Else
                "ótacá",     // While
                "main",      // EntryPoint
            ],
        }
    }
}

impl KeywordMap {
    /// Starts from the default mapping and applies `overrides` in order.
    ///
    /// Every lexeme must come from the keyword table and no two roles may
    /// end up sharing one.
    pub fn new<'s>(
        overrides: impl IntoIterator<Item = (KeywordRole, &'s str)>,
    ) -> Result<Self, ConfigError> {
        let mut map = KeywordMap::default();

        for (role, lexeme) in overrides {
            let Some(known) = KEYWORDS.get(lexeme) else {
                return Err(ConfigError::UnknownKeyword {
                    lexeme: lexeme.to_string(),
                });
            };
            map.lexemes[role.index()] = *known;
        }

        for (i, first) in KeywordRole::ALL.iter().enumerate() {
            for second in &KeywordRole::ALL[i + 1..] {
                if map.lexeme(*first) == map.lexeme(*second) {
                    return Err(ConfigError::DuplicateKeyword {
                        lexeme: map.lexeme(*first),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        tracing::debug!(?map, "keyword map configured");
        Ok(map)
    }

    pub fn lexeme(&self, role: KeywordRole) -> &'static str {
        self.lexemes[role.index()]
    }

    pub fn role_of(&self, lexeme: &str) -> Option<KeywordRole> {
        KeywordRole::ALL
            .into_iter()
            .find(|role| self.lexeme(*role) == lexeme)
    }
}
