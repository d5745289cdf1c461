//! conchc-util - shared position and diagnostic types.
//!
//! Every other crate in the workspace is generic over *which* compiler phase
//! produced an error, but they all locate that error the same way: a line and
//! column in the original source, and an optional human-readable message.
//! This crate is where that shared vocabulary lives so the lexer and parser
//! don't each invent their own.

use std::fmt;

/// A 1-based line/column position in a source buffer.
///
/// `(0, 0)` is the sentinel used when a diagnostic has no useful location to
/// report (see [`SourceLocation::NONE`]). Real positions always start at
/// `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    /// The position of the first byte of a fresh input.
    pub const START: SourceLocation = SourceLocation { line: 1, column: 1 };

    /// Sentinel for "no location available".
    pub const NONE: SourceLocation = SourceLocation { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.line, self.column)
    }
}

/// A single diagnostic produced by a compiler phase.
///
/// `E` is the closed error-kind enum of whichever phase raised it (the lexer
/// and parser each define their own). A `Diagnostic` pairs that kind with the
/// optional context a human needs to act on it: a message and a location.
/// Both are optional because some error kinds are self-explanatory from their
/// name alone, and some are raised before any token has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<E> {
    pub error: E,
    pub message: Option<String>,
    pub location: Option<SourceLocation>,
}

impl<E> Diagnostic<E> {
    pub fn new(error: E) -> Self {
        Self {
            error,
            message: None,
            location: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl<E: fmt::Display> fmt::Display for Diagnostic<E> {
    /// `"{message} ({ERROR_KIND}) [{line}, {column}]"`.
    ///
    /// Falls back to the error's own `Display` when no message was attached,
    /// and drops the trailing `[line, column]` when no location was attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self
            .message
            .as_deref()
            .map(str::to_owned)
            .unwrap_or_else(|| self.error.to_string());
        match self.location {
            Some(loc) if !loc.is_none() => write!(f, "{message} ({}) [{loc}]", self.error),
            _ => write!(f, "{message} ({})", self.error),
        }
    }
}

/// A collection of diagnostics accumulated over a single parse.
pub type Diagnostics<E> = Vec<Diagnostic<E>>;
