//! Token definitions for the statesketch notation
//!
//! This module defines the raw tokens produced by the logos scanner and the
//! positioned tokens the rest of the pipeline works with. The raw pass keeps
//! every character of the input (whitespace included) so that the indentation
//! transform can measure leading space runs; the positioned tokens are what
//! `tokenize` returns and what the parser consumes.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Raw tokens as matched by logos, before indentation synthesis.
///
/// Nothing is skipped at this stage: space runs, tab/CR runs and newlines are
/// all tokens of their own, and a lowest-priority catch-all turns any other
/// single character into `Unknown` so the scan is total.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    // Identifiers also cover cross-reference targets such as "#abc.lastState"
    #[regex(r"[A-Za-z0-9_.#]+")]
    Identifier,

    #[token("->")]
    Arrow,

    // Postfix state modifiers
    #[token("&")]
    ParallelMarker,
    #[token("$")]
    FinalMarker,
    #[token("*")]
    InitialMarker,

    // ";" then optional inline whitespace then the guard name, one token.
    // A ";" with nothing to name becomes Unknown, folded together with any
    // inline whitespace the failed match consumed.
    #[regex(r";[ \t]*[A-Za-z0-9_.#]+")]
    Condition,

    // Same shape as Condition, with ">" marking an action name
    #[regex(r">[ \t]*[A-Za-z0-9_.#]+")]
    Action,

    #[regex(r"%[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    // Runs of literal spaces; only these count toward indentation
    #[regex(r" +")]
    Spaces,

    // Tabs and carriage returns separate tokens but never extend an indent
    #[regex(r"[\t\r]+")]
    OtherWhitespace,

    // Catch-all, lowest priority so every other pattern wins its ties
    #[regex(r".", priority = 0)]
    Unknown,
}

impl RawToken {
    /// Whitespace (not counting newlines)
    pub(crate) fn is_whitespace(&self) -> bool {
        matches!(self, RawToken::Spaces | RawToken::OtherWhitespace)
    }

    /// True for tokens that make a line count for indentation purposes.
    /// Blank lines and comment-only lines keep the current level.
    pub(crate) fn is_line_content(&self) -> bool {
        !self.is_whitespace() && !matches!(self, RawToken::Comment | RawToken::Newline)
    }
}

/// Kinds of positioned tokens produced by `tokenize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    TransitionArrow,
    ParallelState,
    FinalState,
    InitialState,
    Condition,
    Action,
    Comment,
    Newline,
    Indent,
    Dedent,
    Unknown,
}

impl TokenKind {
    /// Canonical kind name, as used in diagnostics and serialized dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::TransitionArrow => "TRANSITION_ARROW",
            TokenKind::ParallelState => "PARALLEL_STATE",
            TokenKind::FinalState => "FINAL_STATE",
            TokenKind::InitialState => "INITIAL_STATE",
            TokenKind::Condition => "CONDITION",
            TokenKind::Action => "ACTION",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A positioned token. `line` and `col` are 1-based and exist for
/// diagnostics only; the grammar never branches on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }

    /// Tokens the grammar never sees; `parse` strips them up front
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::Newline)
    }

    /// Human-readable form for error messages
    pub fn describe(&self) -> String {
        match self.kind {
            // Structural tokens have no printable text worth quoting
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent => self.kind.name().into(),
            _ => format!("{} \"{}\"", self.kind.name(), self.text),
        }
    }
}
