//! Unit tests for the parser module.
//!
//! This module contains tests for the precedence-climbing expression
//! builder: tree shapes for precedence and associativity, the counting
//! property, and fail-fast behaviour on malformed input.

use super::parser::parse;
use crate::ast::ast::{AstNode, AstOp};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;

fn parse_source(source: &str) -> Result<AstNode, Error> {
    let tokens = tokenize(source.to_string(), Some("test.expr".to_string())).unwrap();
    parse(tokens)
}

#[test]
fn test_parse_single_literal() {
    let tree = parse_source("7").unwrap();

    assert_eq!(tree, AstNode::leaf(7));
}

#[test]
fn test_parse_precedence() {
    // 2 + 3 * 4 groups as 2 + (3 * 4)
    let tree = parse_source("2 + 3 * 4").unwrap();

    let expected = AstNode::binary(
        AstOp::Add,
        AstNode::leaf(2),
        AstNode::binary(AstOp::Multiply, AstNode::leaf(3), AstNode::leaf(4)),
    );

    assert_eq!(tree, expected);
}

#[test]
fn test_parse_trailing_lower_precedence() {
    // 2 * 3 + 4 groups as (2 * 3) + 4
    let tree = parse_source("2 * 3 + 4").unwrap();

    let expected = AstNode::binary(
        AstOp::Add,
        AstNode::binary(AstOp::Multiply, AstNode::leaf(2), AstNode::leaf(3)),
        AstNode::leaf(4),
    );

    assert_eq!(tree, expected);
}

#[test]
fn test_parse_left_associativity() {
    // 3 - 2 - 1 groups as (3 - 2) - 1
    let tree = parse_source("3 - 2 - 1").unwrap();

    let expected = AstNode::binary(
        AstOp::Subtract,
        AstNode::binary(AstOp::Subtract, AstNode::leaf(3), AstNode::leaf(2)),
        AstNode::leaf(1),
    );

    assert_eq!(tree, expected);
}

#[test]
fn test_parse_left_associative_division() {
    // 8 / 4 / 2 groups as (8 / 4) / 2
    let tree = parse_source("8 / 4 / 2").unwrap();

    let expected = AstNode::binary(
        AstOp::Divide,
        AstNode::binary(AstOp::Divide, AstNode::leaf(8), AstNode::leaf(4)),
        AstNode::leaf(2),
    );

    assert_eq!(tree, expected);
}

#[test]
fn test_parse_node_counts() {
    let tree = parse_source("1 + 2 * 3 - 4 / 5").unwrap();

    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.operator_count(), 4);
}

#[test]
fn test_parse_missing_right_operand() {
    let result = parse_source("3 +");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedIntLit");
}

#[test]
fn test_parse_two_literals_in_a_row() {
    let result = parse_source("3 4");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "NotABinaryOperator"
    );
}

#[test]
fn test_parse_leading_operator() {
    let result = parse_source("+ 3");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedIntLit");
}

#[test]
fn test_parse_empty_input() {
    // A primary term is mandatory, so an empty stream is an error.
    let result = parse_source("");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedIntLit");
}

#[test]
fn test_parse_oversized_literal() {
    let result = parse_source("99999999999999999999999");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_error_reports_line() {
    let result = parse_source("1 +\n+ 2");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().line(), 2);
}

#[test]
fn test_reparse_is_structurally_identical() {
    let first = parse_source("1 + 2 * 3 - 4").unwrap();
    let second = parse_source("1 + 2 * 3 - 4").unwrap();

    assert_eq!(first, second);
}
