use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser};

/// Precedence levels, lowest first. Only the relative order matters.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Call,
    Member,
    Primary,
}

impl BindingPower {
    /// The level directly below this one. Parsing a right operand at the
    /// lower level lets an operator of the same level nest to the right.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Comma => BindingPower::Default,
            BindingPower::Assignment => BindingPower::Comma,
            BindingPower::Logical => BindingPower::Assignment,
            BindingPower::Relational => BindingPower::Logical,
            BindingPower::Additive => BindingPower::Relational,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponent => BindingPower::Multiplicative,
            BindingPower::Unary => BindingPower::Exponent,
            BindingPower::Call => BindingPower::Unary,
            BindingPower::Member => BindingPower::Call,
            BindingPower::Primary => BindingPower::Member,
        }
    }
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// Shared dispatch tables, built on first use and read-only afterwards.
    pub static ref PARSE_RULES: ParseRules = ParseRules::new();
}

/// Dispatch tables consulted by the expression and statement parsers.
///
/// The language's own rules are registered by [`ParseRules::new`]. Callers
/// that extend the language register more handlers on their own instance
/// before parsing; a built instance is only ever read by the parser, so it
/// can serve any number of parses.
#[derive(Clone, Default)]
pub struct ParseRules {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl ParseRules {
    pub fn new() -> Self {
        let mut rules = ParseRules::default();
        create_token_lookups(&mut rules);
        rules
    }

    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    ///
    /// A prefix-only token is given `Primary` binding power so that meeting
    /// it after a complete operand is reported instead of silently ending
    /// the expression. Tokens that are also infix operators keep the
    /// binding power of their infix form.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of a token kind, `Default` when none is registered.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

fn create_token_lookups(rules: &mut ParseRules) {
    // Logical
    rules.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    rules.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    rules.led(TokenKind::Xor, BindingPower::Logical, parse_binary_expr);
    rules.led(TokenKind::DotDot, BindingPower::Logical, parse_binary_expr);
    rules.led(TokenKind::ShiftLeft, BindingPower::Logical, parse_binary_expr);
    rules.led(TokenKind::ShiftRight, BindingPower::Logical, parse_binary_expr);

    // Relational
    rules.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    rules.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    rules.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    rules.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    rules.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    rules.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive, multiplicative and exponent
    rules.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    rules.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    rules.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    rules.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    rules.led(TokenKind::DoubleSlash, BindingPower::Multiplicative, parse_binary_expr);
    rules.led(TokenKind::Modulo, BindingPower::Multiplicative, parse_binary_expr);
    rules.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    rules.led(TokenKind::Power, BindingPower::Exponent, parse_exponent_expr);

    // Literals and symbols
    rules.nud(TokenKind::Number, parse_primary_expr);
    rules.nud(TokenKind::String, parse_primary_expr);
    rules.nud(TokenKind::Rune, parse_primary_expr);
    rules.nud(TokenKind::Identifier, parse_primary_expr);
    rules.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Unary
    rules.nud(TokenKind::Plus, parse_prefix_expr);
    rules.nud(TokenKind::Dash, parse_prefix_expr);
    rules.nud(TokenKind::Not, parse_prefix_expr);
    rules.nud(TokenKind::Sqrt, parse_prefix_expr);

    // Statements: none yet, every statement is an expression statement.
}
