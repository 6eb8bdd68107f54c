//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for parsing:
//!
//! - Tokenization driven by an ordered list of anchored regex rules
//! - Reclassification of identifiers through the reserved word table
//! - Rune literal validation
//! - Byte span tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
