use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// String Expression
/// Represents a string literal, without its quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Rune Expression
/// Represents a single character written as `<x>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuneExpr {
    pub value: char,
    pub span: Span,
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// An infix operator applied to two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Prefix Expression
/// A unary operator (`+`, `-`, `~`, `@`) applied to its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<StringExpr> for Expr {
    fn from(expr: StringExpr) -> Self {
        Expr::String(expr)
    }
}

impl From<RuneExpr> for Expr {
    fn from(expr: RuneExpr) -> Self {
        Expr::Rune(expr)
    }
}

impl From<SymbolExpr> for Expr {
    fn from(expr: SymbolExpr) -> Self {
        Expr::Symbol(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<PrefixExpr> for Expr {
    fn from(expr: PrefixExpr) -> Self {
        Expr::Prefix(expr)
    }
}
