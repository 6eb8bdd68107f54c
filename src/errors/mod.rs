//! Error types and error handling for the front end.
//!
//! This module defines the error returned by the tokenizer and the parser.
//! It includes:
//!
//! - An error structure carrying the source position
//! - Lexical and syntactic error variants
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
