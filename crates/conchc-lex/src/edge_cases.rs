//! Boundary behavior that doesn't belong to any one token kind: empty
//! input, EOF idempotence, location monotonicity, and round-trip
//! reconstruction of the source from tokens plus the whitespace between
//! them.

use crate::{Lexer, TokenType};

fn lex_all(source: &str) -> Vec<crate::Token<'_>> {
    Lexer::from_str(source).consume()
}

#[test]
fn empty_source_is_just_end() {
    let tokens = lex_all("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].ty, TokenType::End);
}

#[test]
fn whitespace_only_source_is_just_end() {
    let tokens = lex_all("   \n\t  \n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].ty, TokenType::End);
}

#[test]
fn advance_after_end_keeps_returning_end() {
    let mut lexer = Lexer::from_str("x");
    assert_eq!(lexer.advance().ty, TokenType::Ident);
    let first_end = lexer.advance();
    let second_end = lexer.advance();
    assert_eq!(first_end.ty, TokenType::End);
    assert_eq!(second_end.ty, TokenType::End);
    assert_eq!(first_end.location, second_end.location);
}

#[test]
fn locations_are_monotonically_non_decreasing() {
    let tokens = lex_all("var x = 1 +\n  2;");
    for pair in tokens.windows(2) {
        let (a, b) = (pair[0].location, pair[1].location);
        assert!(b.line > a.line || (b.line == a.line && b.column >= a.column));
    }
}

#[test]
fn long_identifier() {
    let ident = "x".repeat(5000);
    let tokens = lex_all(&ident);
    assert_eq!(tokens[0].ty, TokenType::Ident);
    assert_eq!(tokens[0].text().len(), 5000);
}

#[test]
fn keywords_are_never_lexed_as_identifiers() {
    for kw in [
        "var", "const", "fn", "if", "else", "while", "for", "struct", "enum", "match", "return",
        "break", "continue", "true", "false", "mut", "orelse",
    ] {
        let tokens = lex_all(kw);
        assert_ne!(tokens[0].ty, TokenType::Ident, "{kw} should not lex as IDENT");
    }
}

#[test]
fn reconstructs_source_from_tokens_and_gaps() {
    let source = "var x = 1 + 2; // trailing\n";
    let tokens = lex_all(source);
    let mut rebuilt = Vec::new();
    let mut cursor = 0usize;
    for tok in &tokens {
        if tok.ty == TokenType::End {
            continue;
        }
        let gap_start = cursor;
        let token_start = source[..].as_bytes();
        // Walk forward from `cursor` to find this token's start, copying
        // whatever sat in between (whitespace) verbatim.
        let remaining = &source.as_bytes()[cursor..];
        let offset = remaining
            .windows(tok.slice.len().max(1))
            .position(|w| w == tok.slice)
            .unwrap_or(0);
        rebuilt.extend_from_slice(&token_start[gap_start..cursor + offset]);
        rebuilt.extend_from_slice(tok.slice);
        cursor += offset + tok.slice.len();
    }
    rebuilt.extend_from_slice(&source.as_bytes()[cursor..]);
    assert_eq!(String::from_utf8(rebuilt).unwrap(), source);
}
