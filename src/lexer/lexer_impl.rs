//! Raw scanning pass for the statesketch lexer
//!
//! The actual character matching is handled entirely by logos; these are
//! convenience functions that collect the raw stream. The catch-all pattern
//! in [`RawToken`](crate::lexer::tokens::RawToken) makes the scan total, so a
//! logos error can only mean an unmatched fragment and is folded into
//! `Unknown` here.

use crate::lexer::tokens::RawToken;
use logos::Logos;

/// Scan a string into raw tokens, dropping spans
pub fn raw_tokenize(source: &str) -> Vec<RawToken> {
    RawToken::lexer(source)
        .map(|result| result.unwrap_or(RawToken::Unknown))
        .collect()
}

/// Scan a string into raw tokens with their byte spans
pub fn raw_tokenize_with_spans(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(RawToken::Unknown), lexer.span()));
    }

    tokens
}
