use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, PrefixExpr, RuneExpr, StringExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt},
};

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    ExpressionStmt,
    BlockStmt,
}

/// Statement
///
/// Every statement kind the parser can produce. A block owns its body and
/// keeps it in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::Block(_) => StmtType::BlockStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Rune,
    Symbol,
    Binary,
    Prefix,
}

/// Expression
///
/// Trees are owned top-down: a binary or prefix node exclusively owns its
/// operands, so an expression can never refer back to an ancestor.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Rune(RuneExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Rune(_) => ExprType::Rune,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Prefix(_) => ExprType::Prefix,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Rune(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
        }
    }

    /// Wraps the expression as a statement spanning the same source.
    pub fn into_stmt(self) -> Stmt {
        Stmt::Expression(ExpressionStmt {
            span: self.get_span().clone(),
            expression: self,
        })
    }
}

// Rendering is fully parenthesised so the tree shape is visible:
// `2 + 3 * 4` prints as `(2 + (3 * 4))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::String(expr) => write!(f, "\"{}\"", expr.value),
            Expr::Rune(expr) => write!(f, "<{}>", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
            Expr::Binary(expr) => write!(
                f,
                "({} {} {})",
                expr.left, expr.operator.value, expr.right
            ),
            Expr::Prefix(expr) => write!(f, "({}{})", expr.operator.value, expr.right_expr),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
            Stmt::Block(block) => {
                write!(f, "{{")?;
                for stmt in block.iter() {
                    write!(f, " {};", stmt)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
