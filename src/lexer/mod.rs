//! Lexical analysis for DLang.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens. It handles:
//!
//! - An ordered table of anchored regex rules, resolved by longest match
//! - Retagging identifiers as keywords and validating identifier length
//! - Line tracking across whitespace and block comments
//! - Reporting illegal characters and unterminated constructs without stopping

pub mod classify;
pub mod lexer;
pub mod rules;
pub mod tokens;
