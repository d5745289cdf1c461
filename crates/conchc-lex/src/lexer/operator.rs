//! Operators and punctuation: longest-match lookup against the static
//! [`crate::tables`] table, falling back to a one-byte `ILLEGAL`.

use conchc_util::SourceLocation;

use super::core::Lexer;
use crate::tables::lookup_operator;
use crate::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator_or_illegal(
        &mut self,
        start: usize,
        location: SourceLocation,
    ) -> Token<'a> {
        match lookup_operator(self.cursor.remaining()) {
            Some((ty, len)) => {
                self.cursor.advance_n(len);
                self.token_at(ty, start, location)
            }
            None => {
                self.cursor.advance();
                self.token_at(TokenType::Illegal, start, location)
            }
        }
    }
}
