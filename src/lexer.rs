//! Lexer module for the statesketch notation
//!
//! Tokenization runs in two stages:
//!
//! 1. A vanilla logos scan over the source. Nothing is skipped: space runs,
//!    tab/CR runs and newlines come out as raw tokens with byte spans.
//! 2. An indentation transform that measures leading space runs at the start
//!    of each content line and synthesizes INDENT/DEDENT tokens from a stack
//!    of open widths, attaching 1-based line/column positions to everything.
//!
//! Splitting it this way keeps the logos definitions free of custom state
//! and isolates the stack discipline (and its one fatal error, an unmatched
//! dedent) in a separate, individually testable step. Blank lines and
//! comment-only lines never touch the stack, so layout niceties cannot
//! change what the parser sees.

pub mod indentation_transform;
pub mod lexer_impl;
pub mod source_location;
pub mod tokens;

pub use indentation_transform::IndentationError;
pub use lexer_impl::{raw_tokenize, raw_tokenize_with_spans};
pub use source_location::{Position, SourceLocation};
pub use tokens::{RawToken, Token, TokenKind};

/// Tokenize statesketch source into positioned tokens.
///
/// Succeeds fully or fails with an [`IndentationError`]; every other oddity
/// in the input (stray characters included) becomes an UNKNOWN token for the
/// parser to report with a position.
pub fn tokenize(source: &str) -> Result<Vec<Token>, IndentationError> {
    let raw = lexer_impl::raw_tokenize_with_spans(source);
    indentation_transform::transform_indentation(source, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_small_machine() {
        let tokens = tokenize("fetch\n  idle\n    FETCH -> loading").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::TransitionArrow,
                TokenKind::Identifier,
                TokenKind::Dedent,
                TokenKind::Dedent,
            ]
        );
    }

    #[test]
    fn test_tokenize_positions_are_one_based() {
        let tokens = tokenize("abc -> def").unwrap();
        assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].col), (1, 5));
        assert_eq!((tokens[2].line, tokens[2].col), (1, 8));
    }

    #[test]
    fn test_tokenize_reports_bad_dedent() {
        let err = tokenize("a\n    b\n  c").unwrap_err();
        assert_eq!(err, IndentationError { line: 3, width: 2 });
    }
}
