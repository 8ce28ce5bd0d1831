use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_RULE;

/// Which rule of the table produced a match. The classifier turns this into
/// a final token kind or a rejection.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RuleKind {
    Comment,
    Boolean,
    Identifier,
    Double,
    Integer,
    String,
    Operator,
    UnterminatedComment,
    UnterminatedString,
}

#[derive(Debug, Clone)]
pub struct RegexPattern {
    pub regex: Regex,
    pub kind: RuleKind,
}

lazy_static! {
    /// Ordered by priority, highest first. Equal-length matches go to the
    /// earlier entry.
    pub static ref RULES: Vec<RegexPattern> = vec![
        MK_RULE!(r"//[^\n]*|/\*(?s:.*?)\*/", RuleKind::Comment),
        MK_RULE!("True|False", RuleKind::Boolean),
        MK_RULE!("[a-zA-Z_][a-zA-Z0-9_]*", RuleKind::Identifier),
        MK_RULE!(r"[0-9]+\.[0-9]*(?:[Ee][+-]?[0-9]+)?|[0-9]+[Ee][+-]?[0-9]+", RuleKind::Double),
        MK_RULE!("[0-9]+", RuleKind::Integer),
        MK_RULE!(r#""[^"\n]*""#, RuleKind::String),
        MK_RULE!(r"<=|>=|==|!=|&&|\|\||[-+*/%<>=!;,.\[\](){}]", RuleKind::Operator),
        // Openers only win when the full construct above failed to match.
        MK_RULE!(r"/\*", RuleKind::UnterminatedComment),
        MK_RULE!("\"", RuleKind::UnterminatedString),
    ];

    pub static ref SKIP: Regex = Regex::new("^[ \t\r\n]+").unwrap();
}

pub const BLOCK_COMMENT_OPENER: &str = "/*";

/// A winning rule and the byte length of its match.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RuleMatch {
    pub kind: RuleKind,
    pub len: usize,
}

/// Tries every rule against the start of `remaining` and returns the longest
/// match, breaking ties by table order.
pub fn longest_match(remaining: &str) -> Option<RuleMatch> {
    let mut best: Option<RuleMatch> = None;

    for pattern in RULES.iter() {
        let Some(found) = pattern.regex.find(remaining) else {
            continue;
        };

        // Empty matches would stall the cursor.
        if found.end() == 0 {
            continue;
        }

        if best.map_or(true, |current| found.end() > current.len) {
            best = Some(RuleMatch { kind: pattern.kind, len: found.end() });
        }
    }

    best
}

/// Length in bytes of the whitespace run at the start of `remaining`.
pub fn skippable_len(remaining: &str) -> usize {
    SKIP.find(remaining).map_or(0, |found| found.end())
}
