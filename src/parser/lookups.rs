use crate::{
    ast::expressions::BinaryOperator,
    lexer::tokens::{Token, TokenKind},
};

/// Precedence levels, loosest first. A higher level binds tighter.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BinaryOperator {
    pub fn binding_power(&self) -> BindingPower {
        match self {
            BinaryOperator::Equals => BindingPower::Equality,
            BinaryOperator::NotEquals
            | BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEquals
            | BinaryOperator::GreaterEquals => BindingPower::Relational,
            BinaryOperator::Add | BinaryOperator::Subtract => BindingPower::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => {
                BindingPower::Multiplicative
            }
        }
    }
}

/// The binary operator spelled by `token`, if any.
pub fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    token.text().and_then(BinaryOperator::from_lexeme)
}
