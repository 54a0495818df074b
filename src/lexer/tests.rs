//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names, booleans and identifiers
//! - Numeric literals (integers and floats)
//! - String and character literals
//! - Operators and punctuation
//! - Comments and positions
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{TokenKind, TokenValue},
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("ti const macorróca masálaca wá pa ótacá Ihoné lúri cuá Iherré main").unwrap();

    assert_eq!(tokens.len(), 13);
    for token in &tokens[..12] {
        assert_eq!(token.kind, TokenKind::Keyword);
    }
    assert_eq!(tokens[2].value, TokenValue::Text(String::from("macorróca")));
    assert_eq!(tokens[10].value, TokenValue::Text(String::from("Iherré")));
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_types() {
    let tokens = tokenize("chátené lhajáia aquí usírra malhióca").unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Type);
    }
    assert_eq!(tokens[0].value, TokenValue::Text(String::from("chátené")));
}

#[test]
fn test_tokenize_bools() {
    let tokens = tokenize("tócu maíca").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].value, TokenValue::Bool(true));
    assert_eq!(tokens[0].lexeme, "tócu");
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].value, TokenValue::Bool(false));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore niño Ñandú camión").unwrap();

    let values: Vec<_> = tokens[..6].iter().map(|t| t.value.clone()).collect();
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Ident));
    assert_eq!(
        values,
        vec![
            TokenValue::Text(String::from("foo")),
            TokenValue::Text(String::from("baz_123")),
            TokenValue::Text(String::from("_underscore")),
            TokenValue::Text(String::from("niño")),
            TokenValue::Text(String::from("Ñandú")),
            TokenValue::Text(String::from("camión")),
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // Longest match: `tico` is not the keyword `ti` followed by `co`.
    let tokens = tokenize("tico mainly").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "tico");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
}

#[test]
fn test_tokenize_integer() {
    let tokens = tokenize("123").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Int(123));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_float() {
    let tokens = tokenize("1.5 0.25").unwrap();

    assert_eq!(tokens[0].value, TokenValue::Float(1.5));
    assert_eq!(tokens[1].value, TokenValue::Float(0.25));
}

#[test]
fn test_number_without_fraction_digits() {
    // `1.` is not a float: the dot is left over and is not a valid character.
    let error = tokenize("1.").unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '.' }
    );
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_number_followed_by_word() {
    let tokens = tokenize("12abc").unwrap();

    assert_eq!(tokens[0].value, TokenValue::Int(12));
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].lexeme, "abc");
}

#[test]
fn test_integer_overflow() {
    let error = tokenize("99999999999999999999").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hola" "dos palabras" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, TokenValue::Text(String::from("hola")));
    assert_eq!(tokens[0].lexeme, "\"hola\"");
    assert_eq!(tokens[1].value, TokenValue::Text(String::from("dos palabras")));
    assert_eq!(tokens[2].value, TokenValue::Text(String::new()));
}

#[test]
fn test_strings_are_raw() {
    let tokens = tokenize(r#""a\nb // no comment""#).unwrap();

    assert_eq!(tokens[0].value, TokenValue::Text(String::from("a\\nb // no comment")));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("\"abc").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_tokenize_chars() {
    let tokens = tokenize("'a' 'ñ' '''").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].value, TokenValue::Char('a'));
    assert_eq!(tokens[1].value, TokenValue::Char('ñ'));
    assert_eq!(tokens[2].value, TokenValue::Char('\''));
}

#[test]
fn test_malformed_char() {
    let error = tokenize("x = 'ab';").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::MalformedCharLiteral {
            lexeme: String::from("'ab")
        }
    );
    assert_eq!(error.get_position().column, 5);

    assert!(tokenize("'a").is_err());
    assert!(tokenize("'").is_err());
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("== >< <= >=").unwrap();

    let lexemes: Vec<&str> = tokens[..4].iter().map(|t| t.lexeme.as_str()).collect();
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Operator));
    assert_eq!(lexemes, vec!["==", "><", "<=", ">="]);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_double_equals_is_one_token() {
    let tokens = tokenize("==").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Operator);
    assert_eq!(tokens[0].value, TokenValue::Text(String::from("==")));
}

#[test]
fn test_tokenize_single_char_operators() {
    let tokens = tokenize("+ - * / % < > = !").unwrap();

    let lexemes: Vec<&str> = tokens[..9].iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["+", "-", "*", "/", "%", "<", ">", "=", "!"]);
}

#[test]
fn test_not_equals_is_two_tokens() {
    let tokens = tokenize("!=").unwrap();

    assert_eq!(tokens[0].lexeme, "!");
    assert_eq!(tokens[1].lexeme, "=");
}

#[test]
fn test_tokenize_symbols() {
    assert_eq!(
        kinds("(){};,"),
        vec![
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_negative_number_is_operator_then_number() {
    let tokens = tokenize("-5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, TokenValue::Int(5));
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("x // comentario\ny // otro").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[1].lexeme, "y");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_slash_is_not_comment() {
    let tokens = tokenize("a / b").unwrap();
    assert_eq!(tokens[1].lexeme, "/");
}

#[test]
fn test_positions() {
    let source = "ti chátené x = 1;\n\n  Iherré x;";
    let tokens = tokenize(source).unwrap();

    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(
        positions,
        vec![
            (1, 1),
            (1, 4),
            (1, 12),
            (1, 14),
            (1, 16),
            (1, 17),
            (3, 3),
            (3, 10),
            (3, 11),
            (3, 12),
        ]
    );
}

#[test]
fn test_positions_after_multiline_string() {
    let tokens = tokenize("\"a\nb\" x").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].column, 4);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("ti chátené x = 1;\nx = @;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));

    let tokens = tokenize("  // solo comentario").unwrap();
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_lexemes_rebuild_stripped_source() {
    let source = "macorróca chátené doble ( chátené x ) { // doble\n  Iherré x * 2.50 ; \"a b\" 'c' tócu }";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));

    let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        rebuilt,
        "macorrócachátenédoble(chátenéx){Iherréx*2.50;\"a b\"'c'tócu}"
    );
}
