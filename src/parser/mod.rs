//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. Expressions are parsed by precedence
//! climbing: each recursive call carries a minimum binding power and
//! only descends into a right-hand sub-tree when the upcoming operator
//! binds tighter. It handles:
//!
//! - Primary terms (integer literals)
//! - The four binary operators with correct precedence
//! - Left-associativity for equal-precedence operators
//! - Fail-fast syntax errors with line information

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
