//! Parse error types
//!
//! Grammar rules fail with a [`SyntaxFailure`], a plain value the combinators
//! pass around and restore from; nothing unwinds. At the public boundary the
//! surviving failure collapses into a [`ParseError`] with a message and the
//! 1-based position of the offending token.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::lexer::{IndentationError, Token};

/// Why a grammar rule could not match
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SyntaxFailure {
    /// A terminal wanted `expected` and found something else, or ran out of
    /// input
    Expected {
        expected: &'static str,
        found: Option<Token>,
    },
    /// Every alternative of a choice failed; `rules` names them in the order
    /// they were tried, `found` is the token at the divergence point
    Alternatives {
        rules: Vec<&'static str>,
        found: Option<Token>,
    },
    /// A failure escaping a state's body, tagged with the state name. The
    /// inner failure keeps the precise position.
    InState {
        name: String,
        cause: Box<SyntaxFailure>,
    },
}

impl SyntaxFailure {
    /// The deepest offending token, if the failure happened before end of
    /// input
    pub(crate) fn found(&self) -> Option<&Token> {
        match self {
            SyntaxFailure::Expected { found, .. } => found.as_ref(),
            SyntaxFailure::Alternatives { found, .. } => found.as_ref(),
            SyntaxFailure::InState { cause, .. } => cause.found(),
        }
    }

    /// True once the failure is tied to an open state block. There is no
    /// other reading of an already-opened block, so combinators propagate
    /// these instead of backtracking past them.
    pub(crate) fn is_committed(&self) -> bool {
        matches!(self, SyntaxFailure::InState { .. })
    }
}

impl fmt::Display for SyntaxFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let describe = |found: &Option<Token>| match found {
            Some(token) => token.describe(),
            None => "end of input".to_string(),
        };
        match self {
            SyntaxFailure::Expected { expected, found } => {
                write!(f, "expected {}, found {}", expected, describe(found))
            }
            SyntaxFailure::Alternatives { rules, found } => {
                write!(
                    f,
                    "expected {}, found {}",
                    rules.join(" or "),
                    describe(found)
                )
            }
            SyntaxFailure::InState { name, cause } => {
                write!(f, "in state \"{}\": {}", name, cause)
            }
        }
    }
}

/// A failed parse: what went wrong and where.
///
/// Serializes to the error value consumers expect:
/// `{"error": {"message": ..., "token": {"line": ..., "col": ...}}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn from_failure(failure: SyntaxFailure, end_of_input: (usize, usize)) -> Self {
        let (line, col) = failure
            .found()
            .map(|token| (token.line, token.col))
            .unwrap_or(end_of_input);
        ParseError {
            message: failure.to_string(),
            line,
            col,
        }
    }
}

impl From<IndentationError> for ParseError {
    fn from(err: IndentationError) -> Self {
        ParseError {
            message: err.to_string(),
            line: err.line,
            col: 1,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}, column {})", self.message, self.line, self.col)
    }
}

impl std::error::Error for ParseError {}

impl Serialize for ParseError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(serde::Serialize)]
        struct ErrorToken {
            line: usize,
            col: usize,
        }

        #[derive(serde::Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            token: ErrorToken,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            "error",
            &ErrorBody {
                message: &self.message,
                token: ErrorToken {
                    line: self.line,
                    col: self.col,
                },
            },
        )?;
        map.end()
    }
}
