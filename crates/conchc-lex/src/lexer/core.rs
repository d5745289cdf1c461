use conchc_util::SourceLocation;

use crate::cursor::Cursor;
use crate::token::{Token, TokenType};

/// Converts a UTF-8 byte buffer into a stream of [`Token`]s.
///
/// A `Lexer<'a>` borrows its input for its entire lifetime; tokens it hands
/// back borrow the same buffer, so neither the lexer nor its tokens can
/// outlive the source they were built from. It holds no diagnostics buffer
/// of its own — unrecognized input becomes an `ILLEGAL` token, and it is the
/// parser's job to decide what, if anything, to report about it.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    pub fn from_str(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }

    /// Discards the current position and starts lexing `new_input` from the
    /// beginning.
    pub fn reset(&mut self, new_input: &'a [u8]) {
        self.cursor.reset(new_input);
    }

    /// Produce the next token. Idempotent at end of input: once the cursor
    /// is exhausted, every subsequent call returns another `END` token at
    /// the same location.
    pub fn advance(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.cursor.position();
        let location = SourceLocation::new(self.cursor.line(), self.cursor.column());

        if self.cursor.is_at_end() {
            return Token::new(TokenType::End, &[], location);
        }

        let byte = self.cursor.current_byte();
        match byte {
            b'@' => self.lex_builtin(start, location),
            b'"' => self.lex_string(start, location),
            b'\'' => self.lex_byte_literal(start, location),
            b'0'..=b'9' => self.lex_number(start, location),
            b'\\' if self.cursor.peek_byte(1) == b'\\' => self.lex_multiline_string(start, location),
            b'/' if self.cursor.peek_byte(1) == b'/' => self.lex_comment(start, location),
            b if is_ident_start(b) => self.lex_identifier(start, location),
            _ => self.lex_operator_or_illegal(start, location),
        }
    }

    /// Repeatedly call [`advance`](Self::advance) until it returns `END`,
    /// collecting every token (including `END` itself) in order.
    pub fn consume(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.advance();
            let is_end = token.ty == TokenType::End;
            tokens.push(token);
            if is_end {
                return tokens;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_byte(), b' ' | b'\t' | b'\r' | b'\n') {
            self.cursor.advance();
        }
    }

    fn lex_comment(
        &mut self,
        start: usize,
        location: SourceLocation,
    ) -> Token<'a> {
        self.cursor.advance_n(2); // "//"
        while !self.cursor.is_at_end() && self.cursor.current_byte() != b'\n' {
            self.cursor.advance();
        }
        Token::new(TokenType::Comment, self.cursor.slice_from(start), location)
    }

    pub(crate) fn token_at(
        &self,
        ty: TokenType,
        start: usize,
        location: SourceLocation,
    ) -> Token<'a> {
        Token::new(ty, self.cursor.slice_from(start), location)
    }
}

pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
