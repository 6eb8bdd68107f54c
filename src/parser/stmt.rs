use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement.
///
/// A registered statement handler for the current token wins. Otherwise the
/// statement is a single expression, optionally terminated by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(expr.into_stmt())
}
