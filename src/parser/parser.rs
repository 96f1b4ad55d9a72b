//! Parser entry point and token cursor.
//!
//! The cursor owns the token stream and a single position; it replaces
//! the process-wide "current token" a hand-written parser would
//! otherwise keep, so parsing is re-entrant and testable in isolation.

use crate::{
    ast::ast::AstNode,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// Cursor over the token stream.
///
/// Holds exactly one token of lookahead: `current_token` peeks it,
/// `advance` consumes it. The lexer guarantees the stream ends with an
/// EOF token, and the parser never advances past it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).unwrap().kind
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get(self.pos - 1).unwrap()
    }

    /// Source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a token stream into an expression tree.
///
/// Seeds the precedence climb with the lowest threshold, so the whole
/// stream up to EOF belongs to the returned expression. The first
/// malformed token aborts the parse; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<AstNode, Error> {
    let mut parser = Parser::new(tokens);

    parse_expr(&mut parser, BindingPower::Default)
}
