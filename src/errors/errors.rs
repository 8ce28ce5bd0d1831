use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A non-fatal lexical error and where it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} at line {}", .internal_error, .position.line)]
pub struct Diagnostic {
    internal_error: ErrorImpl,
    position: Position,
}

impl Diagnostic {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Diagnostic {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.line
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::InvalidBooleanLiteral { .. } => "InvalidBooleanLiteral",
            ErrorImpl::UnterminatedConstruct { .. } => "UnterminatedConstruct",
        }
    }

    /// The offending text or character.
    pub fn get_text(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => character,
            ErrorImpl::IdentifierTooLong { identifier, .. } => identifier,
            ErrorImpl::InvalidBooleanLiteral { literal } => literal,
            ErrorImpl::UnterminatedConstruct { delimiter, .. } => delimiter,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::IdentifierTooLong { limit, .. } => ErrorTip::Suggestion(format!(
                "Identifiers may be at most {} characters long",
                limit
            )),
            ErrorImpl::InvalidBooleanLiteral { .. } => {
                ErrorTip::Suggestion(String::from("Boolean literals are `True` or `False`"))
            }
            ErrorImpl::UnterminatedConstruct { construct, .. } => {
                ErrorTip::Suggestion(format!("Missing `{}`", construct.closing_delimiter()))
            }
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

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Construct {
    String,
    BlockComment,
}

impl Construct {
    pub fn closing_delimiter(&self) -> &'static str {
        match self {
            Construct::String => "\"",
            Construct::BlockComment => "*/",
        }
    }
}

impl Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Construct::String => write!(f, "string literal"),
            Construct::BlockComment => write!(f, "block comment"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Illegal character '{character}'")]
    IllegalCharacter { character: String },
    #[error("Identifier '{identifier}' exceeds maximum length of {limit} characters")]
    IdentifierTooLong { identifier: String, limit: usize },
    #[error("Invalid boolean literal '{literal}'")]
    InvalidBooleanLiteral { literal: String },
    #[error("Unterminated {construct} starting with '{delimiter}'")]
    UnterminatedConstruct { construct: Construct, delimiter: String },
}
