//! Lexical analysis for Conch: turns a UTF-8 byte buffer into a stream of
//! positioned [`Token`]s.
//!
//! The lexer never fails outright — a byte sequence it can't classify
//! becomes a single `ILLEGAL` token rather than an error return, so a
//! caller can always make forward progress by repeatedly calling
//! [`Lexer::advance`]. It does no semantic interpretation: numeric literals
//! are recognized by shape only, string escapes aren't decoded until
//! [`Token::promote`] is called, and no value ever leaves the lexer attached
//! to a token besides the raw source slice.

mod cursor;
pub mod error;
mod lexer;
pub mod tables;
pub mod token;

pub use error::TokenError;
pub use lexer::Lexer;
pub use token::{Token, TokenType};

#[cfg(test)]
mod edge_cases;
