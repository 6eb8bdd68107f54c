use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntactic,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::InvalidRuneLiteral { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::MissingPrefixHandler { .. }
            | ErrorImpl::MissingInfixHandler { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntactic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidRuneLiteral { .. } => "InvalidRuneLiteral",
            ErrorImpl::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            ErrorImpl::MissingInfixHandler { .. } => "MissingInfixHandler",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidRuneLiteral { literal, scalars } => ErrorTip::Suggestion(format!(
                "Rune literal `<{}>` must hold exactly one character, found {}",
                literal, scalars
            )),
            ErrorImpl::MissingPrefixHandler { kind, token } => ErrorTip::Suggestion(format!(
                "`{}` ({}) cannot start an expression",
                token,
                kind.name()
            )),
            ErrorImpl::MissingInfixHandler { kind, token } => ErrorTip::Suggestion(format!(
                "`{}` ({}) cannot follow an expression, is an operator missing?",
                token,
                kind.name()
            )),
            ErrorImpl::UnexpectedToken { expected, token } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected.name(),
                token
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token near: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("rune literal must contain exactly one character, got {scalars}: {literal:?}")]
    InvalidRuneLiteral { literal: String, scalars: usize },
    #[error("no prefix handler for token kind {kind}: {token:?}")]
    MissingPrefixHandler { kind: TokenKind, token: String },
    #[error("no infix handler for token kind {kind}: {token:?}")]
    MissingInfixHandler { kind: TokenKind, token: String },
    #[error("expected {expected}, found {token:?}")]
    UnexpectedToken { expected: TokenKind, token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
