//! Error types and error handling for the front end.
//!
//! This module defines the syntax error types used by the lexer and the
//! parser. It includes:
//!
//! - An error structure with source line information
//! - Specific error variants for the ways an expression can be malformed
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Every error here is fatal to the current parse: the first malformed
//! token ends parsing and no partial tree is returned.

pub mod errors;
