//! Indentation transformation for the statesketch lexer
//!
//! This pass turns the raw token stream into positioned tokens, synthesizing
//! INDENT and DEDENT tokens from leading space runs the way Python's
//! tokenizer does.
//!
//! # Algorithm
//!
//! 1. Keep a stack of open indentation widths, starting at `[0]`.
//! 2. At the start of every content line (including the first line of the
//!    input), measure the run of leading literal spaces. A tab ends the
//!    measurement; tabs never extend an indent.
//! 3. Compare the width with the stack top:
//!    - wider: push it and emit one INDENT
//!    - narrower: pop and emit one DEDENT per closed level; if no remaining
//!      level matches the width exactly, the whole tokenize fails with an
//!      [`IndentationError`]
//!    - equal: nothing
//! 4. Blank lines and comment-only lines are never measured, so they keep
//!    the current level no matter how they are indented.
//! 5. At end of input, emit one DEDENT per still-open level. A successful
//!    pass therefore always balances INDENT and DEDENT counts.
//!
//! Mid-line whitespace is dropped here; NEWLINE and COMMENT tokens are kept
//! so callers can reason about layout, and the parser strips them later.

use std::fmt;

use logos::Span;

use crate::lexer::source_location::SourceLocation;
use crate::lexer::tokens::{RawToken, Token, TokenKind};

/// Fatal tokenizer error: a line dedents to a width that matches no
/// enclosing indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentationError {
    /// 1-based line the bad dedent occurred on
    pub line: usize,
    /// The measured leading width that matched no open level
    pub width: usize,
}

impl fmt::Display for IndentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unindent does not match any outer indentation level (width {})",
            self.width
        )
    }
}

impl std::error::Error for IndentationError {}

/// Transform raw tokens into positioned tokens with INDENT/DEDENT synthesis
pub(crate) fn transform_indentation(
    source: &str,
    raw: &[(RawToken, Span)],
) -> Result<Vec<Token>, IndentationError> {
    let location = SourceLocation::new(source);
    let mut stack: Vec<usize> = vec![0];
    let mut result = Vec::new();
    let mut at_line_start = true;

    for (i, (token, span)) in raw.iter().enumerate() {
        if at_line_start {
            at_line_start = false;
            if line_has_content(raw, i) {
                let line = location.byte_to_position(span.start).line;
                let (width, indent_text) = leading_indent(source, raw, i);
                balance_indentation(width, indent_text, line, &mut stack, &mut result)?;
            }
        }

        let slice = &source[span.clone()];
        let pos = location.byte_to_position(span.start);
        match token {
            RawToken::Spaces | RawToken::OtherWhitespace => {}
            RawToken::Newline => {
                result.push(Token::new(TokenKind::Newline, slice, pos.line, pos.col));
                at_line_start = true;
            }
            RawToken::Identifier => {
                result.push(Token::new(TokenKind::Identifier, slice, pos.line, pos.col))
            }
            RawToken::Arrow => result.push(Token::new(
                TokenKind::TransitionArrow,
                slice,
                pos.line,
                pos.col,
            )),
            RawToken::ParallelMarker => result.push(Token::new(
                TokenKind::ParallelState,
                slice,
                pos.line,
                pos.col,
            )),
            RawToken::FinalMarker => {
                result.push(Token::new(TokenKind::FinalState, slice, pos.line, pos.col))
            }
            RawToken::InitialMarker => result.push(Token::new(
                TokenKind::InitialState,
                slice,
                pos.line,
                pos.col,
            )),
            RawToken::Condition => result.push(Token::new(
                TokenKind::Condition,
                marker_name(slice),
                pos.line,
                pos.col,
            )),
            RawToken::Action => result.push(Token::new(
                TokenKind::Action,
                marker_name(slice),
                pos.line,
                pos.col,
            )),
            RawToken::Comment => {
                result.push(Token::new(TokenKind::Comment, slice, pos.line, pos.col))
            }
            RawToken::Unknown => {
                result.push(Token::new(TokenKind::Unknown, slice, pos.line, pos.col))
            }
        }
    }

    // Close every level still open at end of input
    let end = location.end_position();
    while stack.len() > 1 {
        stack.pop();
        result.push(Token::new(TokenKind::Dedent, "", end.line, end.col));
    }

    Ok(result)
}

/// True if the line starting at `line_start` contains anything besides
/// whitespace and comments
fn line_has_content(raw: &[(RawToken, Span)], line_start: usize) -> bool {
    raw[line_start..]
        .iter()
        .take_while(|(token, _)| !matches!(token, RawToken::Newline))
        .any(|(token, _)| token.is_line_content())
}

/// Width and text of the leading space run. Only a run of literal spaces at
/// the very start of the line counts; anything else (a tab included) means
/// width zero.
fn leading_indent<'src>(
    source: &'src str,
    raw: &[(RawToken, Span)],
    line_start: usize,
) -> (usize, &'src str) {
    match &raw[line_start] {
        (RawToken::Spaces, span) => (span.len(), &source[span.clone()]),
        _ => (0, ""),
    }
}

/// Compare a content line's width against the stack and emit INDENT/DEDENT
fn balance_indentation(
    width: usize,
    indent_text: &str,
    line: usize,
    stack: &mut Vec<usize>,
    result: &mut Vec<Token>,
) -> Result<(), IndentationError> {
    let current = stack.last().copied().unwrap_or(0);
    if width > current {
        stack.push(width);
        result.push(Token::new(TokenKind::Indent, indent_text, line, 1));
        return Ok(());
    }

    while stack.last().is_some_and(|level| *level > width) {
        stack.pop();
        result.push(Token::new(TokenKind::Dedent, "", line, 1));
    }

    if stack.last() != Some(&width) {
        return Err(IndentationError { line, width });
    }

    Ok(())
}

/// Guard or action name after a `;`/`>` marker: skip the marker and any
/// inline whitespace
fn marker_name(slice: &str) -> &str {
    slice[1..].trim_start_matches([' ', '\t'])
}
