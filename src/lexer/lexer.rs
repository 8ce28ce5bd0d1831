use std::rc::Rc;

use crate::{
    errors::{
        errors::{Diagnostic, ErrorImpl},
        sink::DiagnosticSink,
    },
    Position, MK_TOKEN,
};

use super::{
    classify::{classify, Classification},
    rules::{longest_match, skippable_len, RuleKind, RuleMatch, BLOCK_COMMENT_OPENER},
    tokens::Token,
};

/// Where the scanner is in the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    /// Byte offset, always on a char boundary.
    pub offset: usize,
    /// 1 + newlines consumed so far.
    pub line: u32,
}

impl Default for ScanCursor {
    fn default() -> Self {
        ScanCursor { offset: 0, line: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Done,
}

/// A forward-only scan over a borrowed source buffer.
///
/// Diagnostics go to `S`, which defaults to collecting them in a `Vec`.
pub struct Lexer<'src, S = Vec<Diagnostic>> {
    source: &'src str,
    cursor: ScanCursor,
    state: ScanState,
    file: Rc<String>,
    sink: S,
    /// Offset of the first `/*` that found no closing `*/`. No later opener
    /// can close either.
    unclosed_comment_from: Option<usize>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        Lexer::with_sink(source, file, Vec::new())
    }
}

impl<'src, S: DiagnosticSink> Lexer<'src, S> {
    pub fn with_sink(source: &'src str, file: Option<String>, sink: S) -> Lexer<'src, S> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        log::debug!("Scanning {} ({} bytes)", file_name, source.len());

        Lexer {
            source,
            cursor: ScanCursor::default(),
            state: ScanState::Scanning,
            file: file_name,
            sink,
            unclosed_comment_from: None,
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.cursor.offset..]
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    /// Moves past `consumed`, counting any newlines inside it.
    fn advance(&mut self, consumed: &str) {
        self.cursor.offset += consumed.len();
        self.cursor.line += consumed.matches('\n').count() as u32;
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remainder();
        let len = skippable_len(remaining);
        self.advance(&remaining[..len]);
    }

    fn match_rule(&mut self, remaining: &str, offset: usize) -> Option<RuleMatch> {
        let past_unclosed = matches!(self.unclosed_comment_from, Some(from) if offset >= from);
        if past_unclosed && remaining.starts_with(BLOCK_COMMENT_OPENER) {
            return Some(RuleMatch {
                kind: RuleKind::UnterminatedComment,
                len: BLOCK_COMMENT_OPENER.len(),
            });
        }

        let found = longest_match(remaining);
        if let Some(RuleMatch { kind: RuleKind::UnterminatedComment, .. }) = found {
            self.unclosed_comment_from.get_or_insert(offset);
        }

        found
    }

    fn report(&mut self, error: ErrorImpl, line: u32, offset: usize) {
        let position = Position {
            line,
            offset,
            file: Rc::clone(&self.file),
        };
        self.sink.report(Diagnostic::new(error, position));
    }

    /// Produces the next token, or `None` once the buffer is exhausted.
    /// After the first `None` every later call returns `None` as well.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            if self.state == ScanState::Done {
                return None;
            }

            self.skip_whitespace();

            if self.at_eof() {
                self.state = ScanState::Done;
                log::debug!("Finished scanning {} at line {}", self.file, self.cursor.line);
                return None;
            }

            let remaining = self.remainder();
            let line = self.cursor.line;
            let offset = self.cursor.offset;

            let Some(RuleMatch { kind, len }) = self.match_rule(remaining, offset) else {
                // Nothing matched: skip exactly one character.
                if let Some(character) = self.at() {
                    self.report(
                        ErrorImpl::IllegalCharacter { character: character.to_string() },
                        line,
                        offset,
                    );
                    self.cursor.offset += character.len_utf8();
                }
                continue;
            };

            let text = &remaining[..len];
            self.advance(text);

            match classify(kind, text) {
                Classification::Emit(kind) => {
                    let token = MK_TOKEN!(kind, text, line);
                    log::trace!("{} at line {}", token, line);
                    return Some(token);
                }
                Classification::Discard => {}
                Classification::Reject(error) => self.report(error, line, offset),
            }
        }
    }
}

impl<'src, S: DiagnosticSink> Iterator for Lexer<'src, S> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scans `source` to the end, returning every token and every diagnostic.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token<'_>>, Vec<Diagnostic>) {
    let mut lex = Lexer::new(source, file);
    let tokens = lex.by_ref().collect::<Vec<_>>();

    (tokens, lex.into_sink())
}
