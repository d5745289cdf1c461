//! Integer and float literals.
//!
//! The lexer only recognizes *shape* here — which of the 24 integer token
//! kinds a literal is, or whether it's a float — never its numeric value.
//! Interpreting digits (and catching overflow or malformed digit runs) is
//! the parser's job, done when it builds the literal AST node from the
//! token's slice.

use conchc_util::SourceLocation;

use super::core::Lexer;
use crate::token::{Token, TokenType};

#[derive(Clone, Copy)]
enum Width {
    Base,
    Long,
    Size,
}

fn is_digit_in_base(b: u8, base: u32) -> bool {
    match base {
        2 => matches!(b, b'0' | b'1'),
        8 => (b'0'..=b'7').contains(&b),
        16 => b.is_ascii_hexdigit(),
        _ => b.is_ascii_digit(),
    }
}

fn classify_integer(base: u32, unsigned: bool, width: Width) -> TokenType {
    use TokenType::*;
    match (unsigned, width, base) {
        (false, Width::Base, 2) => Int2,
        (false, Width::Base, 8) => Int8,
        (false, Width::Base, 10) => Int10,
        (false, Width::Base, 16) => Int16,
        (false, Width::Long, 2) => LInt2,
        (false, Width::Long, 8) => LInt8,
        (false, Width::Long, 10) => LInt10,
        (false, Width::Long, 16) => LInt16,
        (false, Width::Size, 2) => ZInt2,
        (false, Width::Size, 8) => ZInt8,
        (false, Width::Size, 10) => ZInt10,
        (false, Width::Size, 16) => ZInt16,
        (true, Width::Base, 2) => UInt2,
        (true, Width::Base, 8) => UInt8,
        (true, Width::Base, 10) => UInt10,
        (true, Width::Base, 16) => UInt16,
        (true, Width::Long, 2) => ULInt2,
        (true, Width::Long, 8) => ULInt8,
        (true, Width::Long, 10) => ULInt10,
        (true, Width::Long, 16) => ULInt16,
        (true, Width::Size, 2) => UZInt2,
        (true, Width::Size, 8) => UZInt8,
        (true, Width::Size, 10) => UZInt10,
        (true, Width::Size, 16) => UZInt16,
        _ => unreachable!("base is always 2, 8, 10 or 16"),
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        if self.cursor.current_byte() == b'0' {
            let base = match self.cursor.peek_byte(1) {
                b'b' | b'B' => Some(2),
                b'o' | b'O' => Some(8),
                b'x' | b'X' => Some(16),
                _ => None,
            };
            if let Some(base) = base {
                return self.lex_prefixed_integer(start, location, base);
            }
        }
        self.lex_decimal_or_float(start, location)
    }

    /// A `0b`/`0o`/`0x`-prefixed literal. A prefix with no digits after it
    /// (`0x` alone) is `ILLEGAL`, covering just the two prefix bytes.
    fn lex_prefixed_integer(
        &mut self,
        start: usize,
        location: SourceLocation,
        base: u32,
    ) -> Token<'a> {
        self.cursor.advance_n(2); // "0x"/"0o"/"0b"
        let digits_start = self.cursor.position();
        while is_digit_in_base(self.cursor.current_byte(), base) {
            self.cursor.advance();
        }
        if self.cursor.position() == digits_start {
            return self.token_at(TokenType::Illegal, start, location);
        }
        let (unsigned, width) = self.consume_integer_suffix();
        let ty = classify_integer(base, unsigned, width);
        self.token_at(ty, start, location)
    }

    /// An unprefixed literal: base-10 digits, optionally a fractional part
    /// and/or exponent (making it a `FLOAT`), otherwise an integer suffix.
    ///
    /// A `.` not followed by a digit, or an `e`/`E` not followed by a
    /// (possibly signed) digit, does not extend the token — `3.4.5` lexes as
    /// `FLOAT(3.4)`, `DOT`, `INT_10(5)`.
    fn lex_decimal_or_float(&mut self, start: usize, location: SourceLocation) -> Token<'a> {
        while self.cursor.current_byte().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_float = false;

        if self.cursor.current_byte() == b'.' && self.cursor.peek_byte(1).is_ascii_digit() {
            self.cursor.advance(); // '.'
            while self.cursor.current_byte().is_ascii_digit() {
                self.cursor.advance();
            }
            is_float = true;
        }

        if matches!(self.cursor.current_byte(), b'e' | b'E') {
            let sign_len = if matches!(self.cursor.peek_byte(1), b'+' | b'-') {
                1
            } else {
                0
            };
            if self.cursor.peek_byte(1 + sign_len).is_ascii_digit() {
                self.cursor.advance(); // 'e'/'E'
                if sign_len == 1 {
                    self.cursor.advance();
                }
                while self.cursor.current_byte().is_ascii_digit() {
                    self.cursor.advance();
                }
                is_float = true;
            }
        }

        if is_float {
            return self.token_at(TokenType::Float, start, location);
        }

        let (unsigned, width) = self.consume_integer_suffix();
        let ty = classify_integer(10, unsigned, width);
        self.token_at(ty, start, location)
    }

    /// Optional `u`/`U` marker, then optional `l`/`L` (long) or `z`/`Z`
    /// (size) width suffix. Both independently optional, in that order.
    fn consume_integer_suffix(&mut self) -> (bool, Width) {
        let unsigned = matches!(self.cursor.current_byte(), b'u' | b'U');
        if unsigned {
            self.cursor.advance();
        }
        let width = match self.cursor.current_byte() {
            b'l' | b'L' => {
                self.cursor.advance();
                Width::Long
            }
            b'z' | b'Z' => {
                self.cursor.advance();
                Width::Size
            }
            _ => Width::Base,
        };
        (unsigned, width)
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenType;

    #[test]
    fn plain_decimal() {
        let mut lexer = Lexer::from_str("42");
        let tok = lexer.advance();
        assert_eq!(tok.ty, TokenType::Int10);
        assert_eq!(tok.text(), "42");
    }

    #[test]
    fn hex_binary_octal_prefixes() {
        let mut lexer = Lexer::from_str("0xFF 0b101 0o17");
        assert_eq!(lexer.advance().ty, TokenType::Int16);
        assert_eq!(lexer.advance().ty, TokenType::Int2);
        assert_eq!(lexer.advance().ty, TokenType::Int8);
    }

    #[test]
    fn malformed_prefix_with_no_digits_is_illegal() {
        let mut lexer = Lexer::from_str("0b");
        let tok = lexer.advance();
        assert_eq!(tok.ty, TokenType::Illegal);
        assert_eq!(tok.text(), "0b");
    }

    #[test]
    fn width_and_unsigned_suffixes() {
        let mut lexer = Lexer::from_str("2u 2ul 2uz 2l 2z");
        assert_eq!(lexer.advance().ty, TokenType::UInt10);
        assert_eq!(lexer.advance().ty, TokenType::ULInt10);
        assert_eq!(lexer.advance().ty, TokenType::UZInt10);
        assert_eq!(lexer.advance().ty, TokenType::LInt10);
        assert_eq!(lexer.advance().ty, TokenType::ZInt10);
    }

    #[test]
    fn float_literal() {
        let mut lexer = Lexer::from_str("3.14");
        let tok = lexer.advance();
        assert_eq!(tok.ty, TokenType::Float);
        assert_eq!(tok.text(), "3.14");
    }

    #[test]
    fn float_with_exponent() {
        let mut lexer = Lexer::from_str("1.5e-10");
        let tok = lexer.advance();
        assert_eq!(tok.ty, TokenType::Float);
        assert_eq!(tok.text(), "1.5e-10");
    }

    #[test]
    fn dot_not_followed_by_digit_does_not_extend_token() {
        let mut lexer = Lexer::from_str("3.4.5");
        let f = lexer.advance();
        assert_eq!(f.ty, TokenType::Float);
        assert_eq!(f.text(), "3.4");
        assert_eq!(lexer.advance().ty, TokenType::Dot);
        let i = lexer.advance();
        assert_eq!(i.ty, TokenType::Int10);
        assert_eq!(i.text(), "5");
    }

    #[test]
    fn suffix_letter_after_float_does_not_attach() {
        let mut lexer = Lexer::from_str("3.4u");
        let f = lexer.advance();
        assert_eq!(f.ty, TokenType::Float);
        assert_eq!(f.text(), "3.4");
        let ident = lexer.advance();
        assert_eq!(ident.ty, TokenType::Ident);
        assert_eq!(ident.text(), "u");
    }

    #[test]
    fn exponent_without_digits_does_not_extend() {
        let mut lexer = Lexer::from_str("1e");
        let tok = lexer.advance();
        assert_eq!(tok.ty, TokenType::Int10);
        assert_eq!(tok.text(), "1");
    }
}
