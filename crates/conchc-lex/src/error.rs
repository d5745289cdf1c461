//! Errors raised when interpreting the content of an already-recognized token.
//!
//! These are distinct from the `ILLEGAL` token kind: `ILLEGAL` marks a byte
//! span the lexer could not *recognize* at all, while [`TokenError`] is
//! raised later, on demand, when something tries to decode the text a
//! perfectly well-formed token already carries (e.g. unescaping a string).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A string-decoding operation (e.g. [`crate::Token::promote`]) was
    /// called on a token that isn't `STRING` or `MULTILINE_STRING`.
    #[error("NON_STRING_TOKEN")]
    NonStringToken,

    /// A `\` escape inside a string or byte literal used a character that
    /// isn't in the lexer's recognized escape set.
    #[error("UNEXPECTED_CHAR")]
    UnexpectedChar,
}
