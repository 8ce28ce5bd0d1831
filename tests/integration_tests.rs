//! Integration tests for whole-program scanning.
//!
//! These tests drive the public lexer API over complete DLang programs and
//! arbitrary input, checking the token stream, line numbers and diagnostics.

use dlang_lexer::{
    format_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PROGRAM: &str = r#"// Shapes
class Circle extends Shape implements Drawable {
    double radius;

    /* area of the circle,
       kept simple */
    double Area() {
        return 3.14159 * radius * radius;
    }
}

nothing main() {
    int[] xs;
    xs = ArrayInstance(10, int);
    for (i = 0; i < 10; i = i + 1) {
        xs[i] = InputInt();
    }
    if (xs[0] >= 1e3 && !False) {
        Output("big");
    } else {
        Output("small", null);
    }
}
"#;

#[test]
fn test_scan_whole_program() {
    let (tokens, diagnostics) = tokenize(PROGRAM, Some("shapes.dl".to_string()));

    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);

    let keywords = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Keyword)
        .map(|token| token.value)
        .collect::<Vec<_>>();
    assert_eq!(
        keywords,
        vec![
            "class", "extends", "implements", "double", "double", "return", "nothing", "int",
            "ArrayInstance", "int", "for", "InputInt", "if", "Output", "else", "Output", "null",
        ]
    );

    let class_name = tokens.iter().find(|token| token.value == "Circle").unwrap();
    assert_eq!(class_name.kind, TokenKind::Identifier);
    assert_eq!(class_name.line, 2);

    let area = tokens.iter().find(|token| token.value == "Area").unwrap();
    assert_eq!(area.line, 7);

    let pi = tokens.iter().find(|token| token.value == "3.14159").unwrap();
    assert_eq!(pi.kind, TokenKind::Double);
    assert_eq!(pi.line, 8);

    let exponent = tokens.iter().find(|token| token.value == "1e3").unwrap();
    assert_eq!(exponent.kind, TokenKind::Double);
    assert_eq!(exponent.line, 18);

    let big = tokens.iter().find(|token| token.value == "\"big\"").unwrap();
    assert_eq!(big.kind, TokenKind::String);
    assert_eq!(big.line, 19);

    assert!(tokens.iter().any(|token| token.kind == TokenKind::Boolean && token.value == "False"));
    assert_eq!(tokens.last().unwrap().value, "}");
    assert_eq!(tokens.last().unwrap().line, 23);
}

#[test]
fn test_scan_reports_and_continues() {
    let source = "int x;\nx = 5 @ 3;\nstring s = \"open\nbool b = True;\n";
    let (tokens, diagnostics) = tokenize(source, Some("broken.dl".to_string()));

    let names = diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.get_error_name().to_string(), diagnostic.get_line()))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            ("IllegalCharacter".to_string(), 2),
            ("UnterminatedConstruct".to_string(), 3),
        ]
    );

    let last_line = tokens
        .iter()
        .filter(|token| token.line == 4)
        .map(|token| (token.kind, token.value))
        .collect::<Vec<_>>();
    assert_eq!(
        last_line,
        vec![
            (TokenKind::Keyword, "bool"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Operator, "="),
            (TokenKind::Boolean, "True"),
            (TokenKind::Operator, ";"),
        ]
    );

    let rendered = format_error(&diagnostics[0], source);
    assert!(rendered.starts_with("Error: IllegalCharacter: Illegal character '@' at line 2"));
    assert!(rendered.contains("-> broken.dl"));
    assert!(rendered.contains("2 | x = 5 @ 3;"));
}

#[test]
fn test_independent_scans() {
    let mut first = Lexer::new("a b", None);
    let mut second = Lexer::new("\n\nc", None);

    assert_eq!(first.next_token().unwrap().value, "a");
    let c = second.next_token().unwrap();
    assert_eq!((c.value, c.line), ("c", 3));
    assert_eq!(first.next_token().unwrap().value, "b");
    assert!(first.next_token().is_none());
    assert!(second.next_token().is_none());
}

proptest! {
    #[test]
    fn scan_always_terminates(source in "\\PC{0,200}") {
        let (tokens, diagnostics) = tokenize(&source, None);

        // Every token or diagnostic consumes at least one character.
        prop_assert!(tokens.len() + diagnostics.len() <= source.chars().count());
        prop_assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));

        let newlines = source.matches('\n').count() as u32;
        prop_assert!(tokens.iter().all(|token| token.line <= newlines + 1));
    }

    #[test]
    fn identifiers_classified_by_keyword_set(name in "[a-zA-Z_][a-zA-Z0-9_]{0,49}") {
        let (tokens, diagnostics) = tokenize(&name, None);

        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        let expected = if name == "True" || name == "False" {
            TokenKind::Boolean
        } else if dlang_lexer::lexer::tokens::KEYWORDS.contains(name.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn long_identifiers_are_rejected(name in "[a-z]{51,80}", newlines in 0usize..5) {
        let source = format!("{}{}", "\n".repeat(newlines), name);
        let (tokens, diagnostics) = tokenize(&source, None);

        prop_assert!(tokens.is_empty());
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(diagnostics[0].get_error_name(), "IdentifierTooLong");
        prop_assert_eq!(diagnostics[0].get_line(), newlines as u32 + 1);
    }
}
