//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words, type annotations and identifiers
//! - Numeric, string and rune literals
//! - Operator ordering where one operator prefixes another
//! - Error cases

use assert_matches::assert_matches;

use super::{
    lexer::tokenize,
    tokens::{TokenKind, RESERVED_LOOKUP},
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.tea".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var const class struct type new import from fn if else elif auto while for kindof export in".to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Const);
    assert_eq!(tokens[2].kind, TokenKind::Class);
    assert_eq!(tokens[3].kind, TokenKind::Struct);
    assert_eq!(tokens[4].kind, TokenKind::Type);
    assert_eq!(tokens[5].kind, TokenKind::New);
    assert_eq!(tokens[6].kind, TokenKind::Import);
    assert_eq!(tokens[7].kind, TokenKind::From);
    assert_eq!(tokens[8].kind, TokenKind::Fn);
    assert_eq!(tokens[9].kind, TokenKind::If);
    assert_eq!(tokens[10].kind, TokenKind::Else);
    assert_eq!(tokens[11].kind, TokenKind::Elif);
    assert_eq!(tokens[12].kind, TokenKind::Auto);
    assert_eq!(tokens[13].kind, TokenKind::While);
    assert_eq!(tokens[14].kind, TokenKind::For);
    assert_eq!(tokens[15].kind, TokenKind::Kindof);
    assert_eq!(tokens[16].kind, TokenKind::Export);
    assert_eq!(tokens[17].kind, TokenKind::In);
    assert_eq!(tokens[18].kind, TokenKind::EOF);
}

#[test]
fn test_every_reserved_word_is_classified() {
    for (word, kind) in RESERVED_LOOKUP.iter() {
        let tokens = tokenize(word.to_string(), None).unwrap();

        assert_eq!(tokens.len(), 2, "{} should be a single token", word);
        assert_eq!(tokens[0].kind, *kind);
        assert_ne!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value, *word);
    }
}

#[test]
fn test_tokenize_type_annotations() {
    assert_eq!(
        kinds("str int boolean list dict rune func"),
        vec![
            TokenKind::StrType,
            TokenKind::IntType,
            TokenKind::BoolType,
            TokenKind::ListType,
            TokenKind::DictType,
            TokenKind::RuneType,
            TokenKind::FuncType,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase variable iffy".to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    let expected = ["foo", "bar", "baz_123", "_underscore", "CamelCase", "variable", "iffy"];
    for (token, value) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[expected.len()].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_number_without_fraction_digits_leaves_dot() {
    let tokens = tokenize("5.".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_signs_are_separate_tokens() {
    assert_eq!(
        kinds("-1 +2"),
        vec![
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" 'world' "multiple words""#.to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_strings_are_not_unescaped() {
    let tokens = tokenize(r#""tab\there" 'it"s'"#.to_string(), None).unwrap();

    assert_eq!(tokens[0].value, r"tab\there");
    assert_eq!(tokens[1].value, "it\"s");
}

#[test]
fn test_tokenize_rune() {
    let tokens = tokenize("<a> <é>".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Rune);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Rune);
    assert_eq!(tokens[1].value, "é");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_empty_rune_is_rejected() {
    let error = tokenize("<>".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Lexical);
    assert_matches!(
        error.get_internal_error(),
        ErrorImpl::InvalidRuneLiteral { scalars: 0, .. }
    );
}

#[test]
fn test_long_rune_is_rejected() {
    let error = tokenize("x + <ab>".to_string(), None).unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert_matches!(
        error.get_internal_error(),
        ErrorImpl::InvalidRuneLiteral { literal, scalars: 2 } if literal == "ab"
    );
}

#[test]
fn test_longest_operators_win() {
    assert_eq!(kinds("<<"), vec![TokenKind::ShiftLeft, TokenKind::EOF]);
    assert_eq!(kinds(">>"), vec![TokenKind::ShiftRight, TokenKind::EOF]);
    assert_eq!(kinds("=="), vec![TokenKind::Equals, TokenKind::EOF]);
    assert_eq!(kinds("=>"), vec![TokenKind::Arrow, TokenKind::EOF]);
    assert_eq!(kinds("~="), vec![TokenKind::NotEquals, TokenKind::EOF]);
    assert_eq!(kinds("~|"), vec![TokenKind::Xor, TokenKind::EOF]);
    assert_eq!(kinds("++"), vec![TokenKind::PlusPlus, TokenKind::EOF]);
    assert_eq!(kinds("--"), vec![TokenKind::MinusMinus, TokenKind::EOF]);
    assert_eq!(kinds("+="), vec![TokenKind::PlusEquals, TokenKind::EOF]);
    assert_eq!(kinds("-="), vec![TokenKind::MinusEquals, TokenKind::EOF]);
    assert_eq!(kinds("//"), vec![TokenKind::DoubleSlash, TokenKind::EOF]);
    assert_eq!(kinds(".."), vec![TokenKind::DotDot, TokenKind::EOF]);
    assert_eq!(kinds("<="), vec![TokenKind::LessEquals, TokenKind::EOF]);
    assert_eq!(kinds(">="), vec![TokenKind::GreaterEquals, TokenKind::EOF]);
}

#[test]
fn test_tokenize_operators() {
    // `>` forms come first: a `<` followed later by `>` opens a rune.
    let source = "+ - * / % $ ^ @ ~ == ~= > >= < <= = && ||".to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Percent);
    assert_eq!(tokens[5].kind, TokenKind::Modulo);
    assert_eq!(tokens[6].kind, TokenKind::Power);
    assert_eq!(tokens[7].kind, TokenKind::Sqrt);
    assert_eq!(tokens[8].kind, TokenKind::Not);
    assert_eq!(tokens[9].kind, TokenKind::Equals);
    assert_eq!(tokens[10].kind, TokenKind::NotEquals);
    assert_eq!(tokens[11].kind, TokenKind::Greater);
    assert_eq!(tokens[12].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[13].kind, TokenKind::Less);
    assert_eq!(tokens[14].kind, TokenKind::LessEquals);
    assert_eq!(tokens[15].kind, TokenKind::Assignment);
    assert_eq!(tokens[16].kind, TokenKind::And);
    assert_eq!(tokens[17].kind, TokenKind::Or);
    assert_eq!(tokens[18].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; : ?"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_fixed_tokens_keep_their_text() {
    let tokens = tokenize("a // b ^ c".to_string(), None).unwrap();

    assert_eq!(tokens[1].value, "//");
    assert_eq!(tokens[3].value, "^");
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("é + foo".to_string(), None);
    // `é` is not identifier-shaped, so this fails at byte 0.
    assert!(tokens.is_err());

    let tokens = tokenize("'é' + foo".to_string(), None).unwrap();
    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 4);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 10);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("1 + #oops\nnext".to_string(), Some("test.tea".to_string())).unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_position().1.as_str(), "test.tea");
    assert_matches!(
        error.get_internal_error(),
        ErrorImpl::UnrecognisedToken { token } if token == "#oops"
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  foo \t\n  +   42  ".to_string();
    let tokens = tokenize(source, Some("test.tea".to_string())).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_kind_symbols() {
    assert_eq!(TokenKind::ShiftLeft.symbol(), Some("<<"));
    assert_eq!(TokenKind::Power.symbol(), Some("^"));
    assert_eq!(TokenKind::Kindof.symbol(), Some("kindof"));
    assert_eq!(TokenKind::BoolType.symbol(), Some("boolean"));
    assert_eq!(TokenKind::Identifier.symbol(), None);
    assert_eq!(TokenKind::BoolType.name(), "type_annotation");
    assert_eq!(TokenKind::While.name(), "keyword");
}

#[test]
fn test_rune_spanning_several_characters_is_rejected() {
    let error = tokenize("x + <a b>".to_string(), None).unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert_matches!(
        error.get_internal_error(),
        ErrorImpl::InvalidRuneLiteral { literal, scalars: 3 } if literal == "a b"
    );
}

#[test]
fn test_angle_brackets_around_one_character_are_a_rune() {
    let tokens = tokenize("< >".to_string(), None).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Rune);
    assert_eq!(tokens[0].value, " ");

    let tokens = tokenize("<>>".to_string(), None).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Rune);
    assert_eq!(tokens[0].value, ">");
}

#[test]
fn test_only_ascii_whitespace_is_skipped() {
    assert_eq!(
        kinds("1\t+\r\n\x0c2"),
        vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::EOF]
    );

    let error = tokenize("1\u{00A0}+ 2".to_string(), None).unwrap_err();

    assert_eq!(error.get_position().0, 1);
    assert_matches!(
        error.get_internal_error(),
        ErrorImpl::UnrecognisedToken { token } if token == "\u{00A0}+ 2"
    );
}

#[test]
fn test_token_debug_shows_literal_text() {
    let tokens = tokenize("count + 'hi'".to_string(), None).unwrap();

    assert_eq!(tokens[0].debug(), "Identifier (count)");
    assert_eq!(tokens[1].debug(), "Plus ()");
    assert_eq!(tokens[2].debug(), "String (hi)");
    assert_eq!(tokens[3].debug(), "EOF ()");
}
