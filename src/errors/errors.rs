use std::fmt::Display;

use thiserror::Error;

use crate::Position;

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

    /// The source line the error was raised on.
    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::ExpectedIntLit { .. } => "ExpectedIntLit",
            ErrorImpl::NotABinaryOperator { .. } => "NotABinaryOperator",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedIntLit { token } => ErrorTip::Suggestion(format!(
                "Expected an integer literal, found `{}`",
                token
            )),
            ErrorImpl::NotABinaryOperator { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a binary operator here",
                kind
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected an integer literal, found {token:?}")]
    ExpectedIntLit { token: String },
    #[error("token {kind:?} is not a binary operator")]
    NotABinaryOperator { kind: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
