use crate::{
    ast::ast::AstOp,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

/// Binding power (precedence) of each operator class.
///
/// `Default` is reserved for token kinds that can never appear in
/// operator position (EOF, integer literals) and doubles as the
/// threshold the driver seeds the climb with. The derived ordering is
/// what the climbing loop compares against.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

/// Binding power for every token kind.
///
/// Exhaustive over `TokenKind` so adding an operator without assigning
/// it a precedence fails to compile.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::EOF | TokenKind::IntLit => BindingPower::Default,
    }
}

/// Checks that the token is a binary operator and returns its binding
/// power.
///
/// This is the sole gate that rejects malformed operator sequences,
/// such as two literals in a row.
pub fn op_binding_power(token: &Token) -> Result<BindingPower, Error> {
    match binding_power(token.kind) {
        BindingPower::Default => Err(Error::new(
            ErrorImpl::NotABinaryOperator {
                kind: token.kind.to_string(),
            },
            token.span.start.clone(),
        )),
        bp => Ok(bp),
    }
}

/// Converts an operator token into the AST operation it performs.
pub fn ast_op(token: &Token) -> Result<AstOp, Error> {
    match token.kind {
        TokenKind::Plus => Ok(AstOp::Add),
        TokenKind::Dash => Ok(AstOp::Subtract),
        TokenKind::Star => Ok(AstOp::Multiply),
        TokenKind::Slash => Ok(AstOp::Divide),
        _ => Err(Error::new(
            ErrorImpl::NotABinaryOperator {
                kind: token.kind.to_string(),
            },
            token.span.start.clone(),
        )),
    }
}
