//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored rule table entry
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The lexeme, borrowed from the source
/// * `$line` - The line the lexeme starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a rule table entry whose pattern only matches at the start of the
/// remaining input.
///
/// # Arguments
///
/// * `$pattern` - A string literal regex pattern
/// * `$kind` - The RuleKind reported when the pattern wins
///
/// # Example
///
/// ```ignore
/// MK_RULE!("[0-9]+", RuleKind::Integer)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^(?:", $pattern, ")")).unwrap(),
            kind: $kind,
        }
    };
}
