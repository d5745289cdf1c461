//! Recursive-descent / Pratt parsing for Conch: turns a token stream into a
//! [`Program`] and a list of diagnostics.
//!
//! There is exactly one error-recovery strategy, applied uniformly: when a
//! top-level statement fails to parse, the parser records a diagnostic,
//! advances exactly one token, and resumes statement parsing from there. No
//! partial AST is kept for the failed statement, and there is no richer
//! synchronization (scanning for the next `;` or matching brace). See
//! [`Parser::consume`].

pub mod ast;
pub mod error;
mod expr;
mod precedence;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::{Expression, Program, Statement};
pub use error::ParserError;
pub use precedence::Precedence;

use conchc_lex::{Lexer, Token, TokenType};
use conchc_util::{Diagnostic, SourceLocation};

pub type Diagnostics = Vec<Diagnostic<ParserError>>;

/// Parses `input` to completion, returning the program and every diagnostic
/// raised along the way.
pub fn parse(input: &str) -> (Program<'_>, Diagnostics) {
    Parser::new(input).consume()
}

/// Parser state: an owned [`Lexer`] over the input, the current and
/// lookahead token, and the diagnostics accumulated so far.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    peek: Token<'a>,
    diagnostics: Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::from_str(input);
        let current = lexer.advance();
        let peek = lexer.advance();
        Self {
            lexer,
            current,
            peek,
            diagnostics: Vec::new(),
        }
    }

    /// Parse every top-level statement until `END`.
    ///
    /// `COMMENT` tokens are skipped at statement boundaries (comments carry
    /// no meaning to the grammar). After each statement a single optional
    /// `;` is consumed. A statement that fails to parse contributes no AST
    /// node; the parser records the diagnostic raised while parsing it,
    /// advances one token, and continues with the next statement.
    pub fn consume(mut self) -> (Program<'a>, Diagnostics) {
        let mut statements = Vec::new();
        loop {
            self.skip_comments();
            if self.current_is(TokenType::End) {
                break;
            }
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.skip_optional_semicolon();
                }
                Err(()) => {
                    self.advance();
                }
            }
        }
        (Program { statements }, self.diagnostics)
    }

    fn skip_comments(&mut self) {
        while self.current_is(TokenType::Comment) {
            self.advance();
        }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.current_is(TokenType::Semicolon) {
            self.advance();
        }
    }

    /// Statement dispatch. `Ok(())`-shaped errors have already had a
    /// diagnostic pushed by the callee; callers never need to push one
    /// themselves on `Err`.
    fn parse_statement(&mut self) -> Result<Statement<'a>, ()> {
        use TokenType::*;
        match self.current.ty {
            Var | Const | Comptime | Private | Extern | Export => self.parse_decl_statement(),
            Break | Return | Continue => self.parse_jump_statement(),
            Import => self.parse_import_statement(),
            LBrace => self.parse_block_statement(),
            Underscore => self.parse_discard_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a statement restricted to `Block`, `Jump`, or `Expression`
    /// kinds — used for if-branches and the non-`break` clauses of
    /// `for`/`while`. Any other statement kind is a diagnosable mismatch,
    /// reported with the caller-supplied error kind.
    fn parse_restricted_statement(&mut self, on_mismatch: ParserError) -> Result<Statement<'a>, ()> {
        let stmt = self.parse_statement()?;
        if stmt.is_restricted_statement_compatible() {
            Ok(stmt)
        } else {
            self.push_error_at(on_mismatch, stmt.start_token().location);
            Err(())
        }
    }

    // -- token stream plumbing -------------------------------------------------

    fn advance(&mut self) -> Token<'a> {
        let previous = self.current;
        self.current = self.peek;
        self.peek = self.lexer.advance();
        previous
    }

    fn current_is(&self, ty: TokenType) -> bool {
        self.current.ty == ty
    }

    /// Consume the current token if it matches `ty`. Otherwise push a
    /// diagnostic and fail: `END_OF_TOKEN_STREAM` if the input ran out
    /// before `ty` was found, `UNEXPECTED_TOKEN` for any other mismatch.
    fn expect(&mut self, ty: TokenType) -> Result<Token<'a>, ()> {
        if self.current_is(ty) {
            Ok(self.advance())
        } else if self.current_is(TokenType::End) {
            self.push_error(ParserError::EndOfTokenStream);
            Err(())
        } else {
            self.push_error(ParserError::UnexpectedToken);
            Err(())
        }
    }

    fn push_error(&mut self, error: ParserError) {
        self.push_error_at(error, self.current.location);
    }

    fn push_error_at(&mut self, error: ParserError, location: SourceLocation) {
        self.diagnostics.push(Diagnostic::new(error).with_location(location));
    }

    pub(crate) fn push_error_with_message_at(
        &mut self,
        error: ParserError,
        message: impl Into<String>,
        location: SourceLocation,
    ) {
        self.diagnostics.push(
            Diagnostic::new(error)
                .with_message(message)
                .with_location(location),
        );
    }
}
