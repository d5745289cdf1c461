//! String, multiline string, and byte literals.
//!
//! None of these decode escapes at lex time — the token's slice carries the
//! raw text (quotes and all), and [`crate::Token::promote`] decodes it on
//! demand when the parser actually needs the value.

use conchc_util::SourceLocation;

use super::core::Lexer;
use crate::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    /// `"`-delimited string. An escape consumes its backslash and the byte
    /// after it unconditionally — validating the escape is `promote`'s job,
    /// not the lexer's. Running off the end of input before the closing
    /// quote is `ILLEGAL`, covering everything read so far.
    pub(crate) fn lex_string(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        self.cursor.advance(); // opening '"'
        loop {
            if self.cursor.is_at_end() {
                return self.token_at(TokenType::Illegal, start, location);
            }
            match self.cursor.current_byte() {
                b'"' => {
                    self.cursor.advance();
                    return self.token_at(TokenType::String, start, location);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// `\\`-prefixed multiline string line(s). The slice spans from the
    /// first `\\` through the end of the last contiguous `\\`-prefixed line
    /// — including the newlines and any purely-whitespace lines between
    /// them — so it remains one contiguous byte range into the input.
    /// `promote` re-derives the joined logical value from that raw span.
    pub(crate) fn lex_multiline_string(
        &mut self,
        start: usize,
        location: SourceLocation,
    ) -> Token<'a> {
        loop {
            self.cursor.advance_n(2); // "\\\\"
            while !self.cursor.is_at_end() && self.cursor.current_byte() != b'\n' {
                self.cursor.advance();
            }

            // Look past newlines and whitespace-only lines; if the next
            // non-blank line also opens with "\\\\", fold it into this
            // token by committing the lookahead and looping again.
            let mut lookahead = self.cursor.clone();
            loop {
                if lookahead.current_byte() != b'\n' {
                    break;
                }
                lookahead.advance();
                let mut probe = lookahead.clone();
                while matches!(probe.current_byte(), b' ' | b'\t') {
                    probe.advance();
                }
                if probe.current_byte() == b'\n' {
                    lookahead = probe;
                    continue;
                }
                lookahead = probe;
                break;
            }

            if lookahead.current_byte() == b'\\' && lookahead.peek_byte(1) == b'\\' {
                self.cursor = lookahead;
            } else {
                break;
            }
        }
        self.token_at(TokenType::MultilineString, start, location)
    }

    /// `'`-delimited byte literal, length 3 (`'c'`) or 4 (`'\n'`). Empty
    /// (`''`), unterminated, or multi-byte content is `ILLEGAL`.
    pub(crate) fn lex_byte_literal(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        self.cursor.advance(); // opening '\''

        if self.cursor.current_byte() == b'\'' {
            self.cursor.advance();
            return self.token_at(TokenType::Illegal, start, location);
        }
        if self.cursor.is_at_end() || self.cursor.current_byte() == b'\n' {
            return self.token_at(TokenType::Illegal, start, location);
        }

        if self.cursor.current_byte() == b'\\' {
            self.cursor.advance();
            if !self.cursor.is_at_end() {
                self.cursor.advance();
            }
        } else {
            self.cursor.advance();
        }

        if self.cursor.current_byte() == b'\'' {
            self.cursor.advance();
            return self.token_at(TokenType::Byte, start, location);
        }

        // Multi-byte content or unterminated: scan to resync, swallowing up
        // to the next quote (inclusive) or giving up at newline/EOF.
        while !self.cursor.is_at_end() && self.cursor.current_byte() != b'\n' {
            if self.cursor.current_byte() == b'\'' {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }
        self.token_at(TokenType::Illegal, start, location)
    }
}
