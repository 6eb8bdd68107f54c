use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, PrefixExpr, RuneExpr, StringExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::MissingPrefixHandler {
                kind: token_kind,
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    trace!("nud {:?} at {:?}", token_kind, bp);
    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than the caller, extend lhs
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = parser.get_rules().binding_power(token_kind);
        if operator_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::MissingInfixHandler {
                    kind: token_kind,
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        trace!("led {:?} at {:?}", token_kind, operator_bp);
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;

            let span = parser.advance().span.clone();
            Ok(NumberExpr { value, span }.into())
        }
        TokenKind::String => {
            let token = parser.advance();
            Ok(StringExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }
            .into())
        }
        TokenKind::Rune => {
            let token = parser.current_token();
            let mut chars = token.value.chars();
            let value = match (chars.next(), chars.next()) {
                (Some(value), None) => value,
                _ => {
                    return Err(Error::new(
                        ErrorImpl::InvalidRuneLiteral {
                            literal: token.value.clone(),
                            scalars: token.value.chars().count(),
                        },
                        token.span.start.clone(),
                    ))
                }
            };

            let span = parser.advance().span.clone();
            Ok(RuneExpr { value, span }.into())
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(SymbolExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }
            .into())
        }
        kind => Err(Error::new(
            ErrorImpl::MissingPrefixHandler {
                kind,
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Left-associative infix operator: the right operand is parsed at the
/// operator's own binding power.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(make_binary(left, operator_token, right))
}

/// Right-associative infix operator (`^`): the right operand is parsed one
/// level lower, so `2 ^ 3 ^ 2` groups as `2 ^ (3 ^ 2)`.
pub fn parse_exponent_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, bp.lower())?;

    Ok(make_binary(left, operator_token, right))
}

fn make_binary(left: Expr, operator: Token, right: Expr) -> Expr {
    BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
    .into()
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: Box::new(rhs),
    }
    .into())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
