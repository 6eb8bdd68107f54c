//! Parser state and the top-level entry points.
//!
//! The parser owns the token stream and a cursor into it. It borrows the
//! dispatch tables it parses with, so the tables are built once and shared.

use std::rc::Rc;

use log::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{BPLookup, LEDLookup, NUDLookup, ParseRules, StmtLookup, PARSE_RULES},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Dispatch tables for statements, prefix and infix handlers
    rules: &'a ParseRules,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// A missing trailing `EOF` token is added so the cursor always has a
    /// token to look at.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, rules: &'a ParseRules) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            rules,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos = index + 1;
        }
        &self.tokens[index]
    }

    /// Consumes a token of the expected kind or fails with `UnexpectedToken`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_rules(&self) -> &'a ParseRules {
        self.rules
    }

    pub fn get_stmt_lookup(&self) -> &'a StmtLookup {
        self.rules.get_stmt_lookup()
    }

    pub fn get_nud_lookup(&self) -> &'a NUDLookup {
        self.rules.get_nud_lookup()
    }

    pub fn get_led_lookup(&self) -> &'a LEDLookup {
        self.rules.get_led_lookup()
    }

    pub fn get_bp_lookup(&self) -> &'a BPLookup {
        self.rules.get_bp_lookup()
    }

    /// Byte position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into a block of statements.
///
/// Uses the shared [`PARSE_RULES`] tables. Stops at the first error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    parse_with_rules(tokens, file, &PARSE_RULES)
}

/// Parses with caller-supplied dispatch tables.
pub fn parse_with_rules(
    tokens: Vec<Token>,
    file: Rc<String>,
    rules: &ParseRules,
) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens, Rc::clone(&file), rules);
    debug!("parsing {} ({} tokens)", file, parser.tokens.len());

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} into {} statements", file, body.len());

    Ok(BlockStmt {
        body,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.get_position(),
        },
    })
}
