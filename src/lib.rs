#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Diagnostic, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: usize,
    pub file: Rc<String>,
}

/// Returns the line number, the text of that line and the column of `position`
/// (a byte offset) within it, or `None` when the offset is past the end.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a diagnostic with the offending source line underneath it.
pub fn format_error(error: &Diagnostic, source: &str) -> String {
    /*
        Error: IllegalCharacter: Illegal character '@' at line 20
        -> final.dl
           |
        20 | let a = @;
           | --------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}: {}\n", error.get_error_name(), error));
    } else {
        out.push_str(&format!(
            "Error: {}: {} ({})\n",
            error.get_error_name(),
            error,
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));

    let Some((_, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Diagnostic, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
