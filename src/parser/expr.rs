use crate::{
    ast::expressions::{AssignExpr, CallExpr, Expr, LiteralValue, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
};

use super::{
    lookups::{binary_operator, BindingPower},
    parser::Parser,
};

/// Expression = Assignment
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// Right-associative; everything tighter than `=` is parsed first, then the
/// result is checked for being a plain variable.
///
/// Every nested expression (groupings, call arguments, assigned values)
/// enters here, so this is where expression nesting is counted.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_assignment_level)
}

fn parse_assignment_level(parser: &mut Parser) -> Result<Expr, Error> {
    let target = parse_expr(parser, BindingPower::Assignment)?;

    if !parser.at_operator("=") {
        return Ok(target);
    }

    let Expr::Variable(variable) = target else {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            parser.current_token().position(),
        ));
    };

    parser.advance();
    let value = parse_assignment_expr(parser)?;

    Ok(Expr::Assign(AssignExpr {
        name: variable.name,
        value: Box::new(value),
    }))
}

/// Precedence climbing over the binary levels.
///
/// Keeps folding operators that bind tighter than `bp` into `left`. The
/// right operand is parsed at the operator's own level, which makes every
/// level left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_unary_expr(parser)?;

    while let Some(op) = binary_operator(parser.current_token()) {
        let op_bp = op.binding_power();
        if op_bp <= bp {
            break;
        }

        parser.advance();
        let right = parse_expr(parser, op_bp)?;
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();
    let op = match token.kind {
        TokenKind::Operator => token.text().and_then(UnaryOperator::from_lexeme),
        _ => None,
    };

    match op {
        Some(op) => {
            parser.advance();
            let right = parser.nested(parse_unary_expr)?;
            Ok(Expr::unary(op, right))
        }
        None => parse_primary_expr(parser),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.at_name() {
        return parse_name_expr(parser);
    }

    if parser.at_symbol("(") {
        return parse_grouping_expr(parser);
    }

    let token = parser.current_token();
    let value = match (token.kind, &token.value) {
        (TokenKind::Number, TokenValue::Int(value)) => LiteralValue::Int(*value),
        (TokenKind::Number, TokenValue::Float(value)) => LiteralValue::Float(*value),
        (TokenKind::String, TokenValue::Text(value)) => LiteralValue::Str(value.clone()),
        (TokenKind::Char, TokenValue::Char(value)) => LiteralValue::Char(*value),
        (TokenKind::Bool, TokenValue::Bool(value)) => LiteralValue::Bool(*value),
        _ => return Err(parser.error_expected("expected expression")),
    };

    parser.advance();
    Ok(Expr::literal(value))
}

/// A variable, or a call when the name is followed by `(`.
pub fn parse_name_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect_name("expected identifier")?;

    if !parser.at_symbol("(") {
        return Ok(Expr::variable(name));
    }

    parser.advance();
    let args = parse_call_args(parser)?;
    parser.expect_symbol(")", "expected ')' after arguments")?;

    Ok(Expr::Call(CallExpr { callee: name, args }))
}

/// Args = Expression (',' Expression)*
///
/// Returns at once on `)`. A comma must be followed by another argument.
pub fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if parser.at_symbol(")") {
        return Ok(args);
    }

    loop {
        args.push(parse_expression(parser)?);

        if parser.at_symbol(",") {
            parser.advance();
            continue;
        }

        break;
    }

    Ok(args)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_symbol("(", "expected '('")?;
    let expr = parse_expression(parser)?;
    parser.expect_symbol(")", "expected ')' after expression")?;

    Ok(expr)
}
