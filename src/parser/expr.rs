use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{ast_op, binding_power, op_binding_power, BindingPower},
    parser::Parser,
};

/// Parses one primary term: exactly one integer literal token.
///
/// Anything else in primary position is a syntax error at that token's
/// line, including an operator with a missing right operand.
pub fn parse_primary(parser: &mut Parser) -> Result<AstNode, Error> {
    match parser.current_token_kind() {
        TokenKind::IntLit => {
            let token = parser.advance().clone();

            match token.value.parse() {
                Ok(value) => Ok(AstNode::leaf(value)),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedIntLit {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Builds the expression starting at the current token by precedence
/// climbing.
///
/// Returns once the upcoming operator binds no tighter than `min_bp`
/// (equal precedence stops the climb, which is what makes the four
/// operators left-associative: `a - b - c` folds into `(a - b) - c`)
/// or once the lookahead is EOF. When the operator does bind tighter,
/// the recursive call uses that operator's own binding power as the
/// new threshold, giving `*` and `/` their deeper grouping.
///
/// Every call consumes at least the one token of its primary term, so
/// the recursion is bounded by the length of the stream.
pub fn parse_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<AstNode, Error> {
    let mut left = parse_primary(parser)?;

    if parser.current_token_kind() == TokenKind::EOF {
        return Ok(left);
    }

    while op_binding_power(parser.current_token())? > min_bp {
        let operator = parser.advance().clone();

        let right = parse_expr(parser, binding_power(operator.kind))?;
        left = AstNode::binary(ast_op(&operator)?, left, right);

        // The fold may have consumed the rest of the stream; the
        // grammar has no mandatory trailing operator, so EOF has to be
        // re-checked here as well as after the initial primary term.
        if parser.current_token_kind() == TokenKind::EOF {
            return Ok(left);
        }
    }

    Ok(left)
}
