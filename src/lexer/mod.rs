//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression
//! source text into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using regex patterns
//! - Recognition of integer literals and the four arithmetic operators
//! - Source line tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
