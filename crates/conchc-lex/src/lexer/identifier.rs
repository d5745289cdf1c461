//! Identifiers, keywords, primitive type names, and `@builtin` tokens.

use conchc_util::SourceLocation;

use super::core::{is_ident_continue, is_ident_start, Lexer};
use crate::tables::lookup_builtin;
use crate::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    /// `letter/underscore` start: consume the full identifier run, then
    /// check whether its text names a keyword or primitive type.
    pub(crate) fn lex_identifier(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        while is_ident_continue(self.cursor.current_byte()) {
            self.cursor.advance();
        }
        let slice = self.cursor.slice_from(start);
        let text = std::str::from_utf8(slice).expect("ascii identifier is valid UTF-8");
        let ty = crate::tables::lookup_keyword(text).unwrap_or(TokenType::Ident);
        Token::new(ty, slice, location)
    }

    /// `@` start: consume `@` plus a following identifier run and look it up
    /// in the builtin table. Anything that doesn't resolve to a known
    /// builtin (no identifier following `@`, or an unrecognized name) is
    /// `ILLEGAL`.
    pub(crate) fn lex_builtin(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        self.cursor.advance(); // '@'
        let name_start = self.cursor.position();
        if !is_ident_start(self.cursor.current_byte()) {
            return self.token_at(TokenType::Illegal, start, location);
        }
        while is_ident_continue(self.cursor.current_byte()) {
            self.cursor.advance();
        }
        let name = std::str::from_utf8(self.cursor.slice_from(name_start))
            .expect("ascii identifier is valid UTF-8");
        match lookup_builtin(name) {
            Some(ty) => self.token_at(ty, start, location),
            None => self.token_at(TokenType::Illegal, start, location),
        }
    }
}
