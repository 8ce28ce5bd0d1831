use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("nothing");
        set.insert("int");
        set.insert("double");
        set.insert("bool");
        set.insert("string");
        set.insert("class");
        set.insert("interface");
        set.insert("null");
        set.insert("this");
        set.insert("extends");
        set.insert("implements");
        set.insert("for");
        set.insert("while");
        set.insert("if");
        set.insert("else");
        set.insert("return");
        set.insert("break");
        set.insert("new");
        set.insert("ArrayInstance");
        set.insert("Output");
        set.insert("InputInt");
        set.insert("InputLine");
        set
    };
}

/// Identifiers longer than this are rejected rather than emitted.
pub const MAX_IDENTIFIER_LENGTH: usize = 50;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Boolean,
    Integer,
    Double,
    String,
    Operator,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Integer => "INTEGER",
            TokenKind::Double => "DOUBLE",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified lexeme borrowed from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub line: u32,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type={}, value={}", self.kind, self.value)
    }
}
