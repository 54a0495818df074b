use crate::{
    ast::{
        ast::Declaration,
        statements::{Block, ExprStmt, FunctionDecl, IfStmt, ReturnStmt, Stmt, VarDecl, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, keywords::KeywordRole, parser::Parser};

/// Declaration = FunctionDecl | VarDecl | Statement
pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    match parser.current_role() {
        Some(KeywordRole::Function) => Ok(Declaration::Function(parse_function_decl(parser)?)),
        Some(KeywordRole::Variable | KeywordRole::Constant) => {
            Ok(Declaration::Var(parse_var_decl(parser)?))
        }
        _ => Ok(Declaration::Statement(parse_stmt(parser)?)),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_role() {
        Some(KeywordRole::If) => return parse_if_stmt(parser),
        Some(KeywordRole::While) => return parse_while_stmt(parser),
        Some(KeywordRole::Return) => return parse_return_stmt(parser),
        Some(KeywordRole::Variable | KeywordRole::Constant) => {
            return Ok(Stmt::VarDecl(parse_var_decl(parser)?))
        }
        _ => {}
    }

    if parser.at_symbol("{") {
        return Ok(Stmt::Block(parse_block(parser)?));
    }

    let expr = parse_expression(parser)?;
    parser.expect_symbol(";", "expected ';' after expression")?;

    Ok(Stmt::Expr(ExprStmt { expr }))
}

/// FunctionDecl = KW_FUNC TYPE Name '(' Params? ')' Block
pub fn parse_function_decl(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    parser.advance();

    let return_type = parser.expect(TokenKind::Type, "expected return type")?.lexeme;
    let name = parser.expect_name("expected function name")?;

    parser.expect_symbol("(", "expected '(' after function name")?;
    let params = parse_params(parser)?;
    parser.expect_symbol(")", "expected ')' after parameters")?;

    let body = parse_block(parser)?;

    tracing::trace!(%name, param_count = params.len(), "parsed function");

    Ok(FunctionDecl {
        name,
        params,
        return_type,
        body,
    })
}

/// Params = TYPE IDENT (',' TYPE IDENT)*
///
/// Returns an empty list at once when the next token is `)`.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<(String, String)>, Error> {
    let mut params = Vec::new();

    if parser.at_symbol(")") {
        return Ok(params);
    }

    loop {
        let ty = parser.expect(TokenKind::Type, "expected parameter type")?.lexeme;
        let name = parser.expect(TokenKind::Ident, "expected parameter name")?.lexeme;
        params.push((ty, name));

        if parser.at_symbol(",") {
            parser.advance();
            continue;
        }

        break;
    }

    Ok(params)
}

/// VarDecl = KW_VAR TYPE IDENT ('=' Expression)? ';'
///         | KW_CONST TYPE IDENT '=' Expression ';'
pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, Error> {
    let is_constant = parser.current_role() == Some(KeywordRole::Constant);
    parser.advance();

    let var_type = parser.expect(TokenKind::Type, "expected variable type")?.lexeme;
    let name = parser.expect(TokenKind::Ident, "expected variable name")?.lexeme;

    let initializer = if parser.at_operator("=") {
        parser.advance();
        Some(parse_expression(parser)?)
    } else if is_constant {
        return Err(parser.error_expected("expected '=' in constant declaration"));
    } else {
        None
    };

    parser.expect_symbol(";", "expected ';' after variable declaration")?;

    Ok(VarDecl {
        name,
        var_type,
        initializer,
        is_constant,
    })
}

/// Block = '{' Statement* '}'
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<Block, Error> {
    parser.expect_symbol("{", "expected '{'")?;

    let mut statements = Vec::new();
    while !parser.at_symbol("}") {
        if parser.at_eof() {
            return Err(parser.error_expected("expected '}'"));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect_symbol("}", "expected '}'")?;

    Ok(Block { statements })
}

/// IfStmt = KW_IF '(' Expression ')' Block (KW_ELSE Block)?
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect_symbol("(", "expected '(' after if")?;
    let condition = parse_expression(parser)?;
    parser.expect_symbol(")", "expected ')' after condition")?;

    let then_block = parse_block(parser)?;

    let else_block = if parser.current_role() == Some(KeywordRole::Else) {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_block,
        else_block,
    }))
}

/// WhileStmt = KW_WHILE '(' Expression ')' Block
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect_symbol("(", "expected '(' after while")?;
    let condition = parse_expression(parser)?;
    parser.expect_symbol(")", "expected ')' after condition")?;

    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// ReturnStmt = KW_RETURN Expression? ';'
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.at_symbol(";") {
        None
    } else {
        Some(parse_expression(parser)?)
    };

    parser.expect_symbol(";", "expected ';' after return value")?;

    Ok(Stmt::Return(ReturnStmt { value }))
}
