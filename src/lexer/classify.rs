use crate::errors::errors::{Construct, ErrorImpl};

use super::{
    rules::RuleKind,
    tokens::{TokenKind, KEYWORDS, MAX_IDENTIFIER_LENGTH},
};

/// What the scanner should do with a rule match.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Classification {
    Emit(TokenKind),
    Discard,
    Reject(ErrorImpl),
}

/// Refines a raw rule match into its final token kind, or rejects it.
pub fn classify(rule: RuleKind, text: &str) -> Classification {
    match rule {
        RuleKind::Comment => Classification::Discard,
        RuleKind::Boolean => boolean(text),
        RuleKind::Identifier => identifier(text),
        RuleKind::Double | RuleKind::Integer => Classification::Emit(number(text)),
        RuleKind::String => Classification::Emit(TokenKind::String),
        RuleKind::Operator => Classification::Emit(TokenKind::Operator),
        RuleKind::UnterminatedComment => unterminated(Construct::BlockComment, text),
        RuleKind::UnterminatedString => unterminated(Construct::String, text),
    }
}

fn boolean(text: &str) -> Classification {
    match text {
        "True" | "False" => Classification::Emit(TokenKind::Boolean),
        _ => Classification::Reject(ErrorImpl::InvalidBooleanLiteral {
            literal: text.to_string(),
        }),
    }
}

fn identifier(text: &str) -> Classification {
    if text.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Classification::Reject(ErrorImpl::IdentifierTooLong {
            identifier: text.to_string(),
            limit: MAX_IDENTIFIER_LENGTH,
        });
    }

    if KEYWORDS.contains(text) {
        Classification::Emit(TokenKind::Keyword)
    } else {
        Classification::Emit(TokenKind::Identifier)
    }
}

fn number(text: &str) -> TokenKind {
    if text.contains(['.', 'e', 'E']) {
        TokenKind::Double
    } else {
        TokenKind::Integer
    }
}

fn unterminated(construct: Construct, text: &str) -> Classification {
    Classification::Reject(ErrorImpl::UnterminatedConstruct {
        construct,
        delimiter: text.to_string(),
    })
}
