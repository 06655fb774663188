//! Integration tests for tokenizing whole statesketch documents
//!
//! These pin down the exact token sequences and positions the lexer
//! produces for representative documents, including the synthesized
//! INDENT/DEDENT tokens and the 1-based line/column bookkeeping the
//! parser's diagnostics rely on.

use statesketch::lexer::{raw_tokenize, RawToken};
use statesketch::{tokenize, Token, TokenKind};

#[test]
fn test_transition_line_tokens() {
    let source = "idle\n  FETCH -> loading ;ok >log % done";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "idle", 1, 1), // "idle"
            Token::new(TokenKind::Newline, "\n", 1, 5),      // "\n"
            Token::new(TokenKind::Indent, "  ", 2, 1),       // two-space block
            Token::new(TokenKind::Identifier, "FETCH", 2, 3), // event
            Token::new(TokenKind::TransitionArrow, "->", 2, 9), // "->"
            Token::new(TokenKind::Identifier, "loading", 2, 12), // target
            Token::new(TokenKind::Condition, "ok", 2, 20),   // ";ok"
            Token::new(TokenKind::Action, "log", 2, 24),     // ">log"
            Token::new(TokenKind::Comment, "% done", 2, 29), // trailing comment
            Token::new(TokenKind::Dedent, "", 2, 35),        // closed at end of input
        ]
    );
}

#[test]
fn test_modifier_tokens() {
    let tokens = tokenize("ast&$*").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "ast", 1, 1), // "ast"
            Token::new(TokenKind::ParallelState, "&", 1, 4), // "&"
            Token::new(TokenKind::FinalState, "$", 1, 5),   // "$"
            Token::new(TokenKind::InitialState, "*", 1, 6), // "*"
        ]
    );
}

const DOCUMENT: &str = "abc
% some comment
  def -> lmn
  pasta -> noodles %more comment
  ast&*
    opq -> rst; ifyes
    uvw -> #abc.lastState
    nestedstate1
    nestedstate2*
  tried -> that > andDoThis
  lastState
    % trying out transient state
    -> ast; ifyes
    -> lastState; ifno";

#[test]
fn test_document_positions() {
    let tokens = tokenize(DOCUMENT).unwrap();

    let uvw = tokens.iter().find(|t| t.text == "uvw").unwrap();
    assert_eq!(uvw.kind, TokenKind::Identifier);
    assert_eq!((uvw.line, uvw.col), (7, 5));

    // A qualified cross-reference is one identifier token
    let target = tokens.iter().find(|t| t.text == "#abc.lastState").unwrap();
    assert_eq!(target.kind, TokenKind::Identifier);
    assert_eq!((target.line, target.col), (7, 12));

    let comment = tokens.iter().find(|t| t.kind == TokenKind::Comment).unwrap();
    assert_eq!(comment.text, "% some comment");
    assert_eq!((comment.line, comment.col), (2, 1));

    let inline = tokens.iter().find(|t| t.text == "%more comment").unwrap();
    assert_eq!((inline.line, inline.col), (4, 20));
}

#[test]
fn test_document_block_structure() {
    let tokens = tokenize(DOCUMENT).unwrap();

    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(indents, 3);
    assert_eq!(dedents, 3);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Dedent));

    // The nestedstate2 block closes right after its marker and line break
    let index = tokens
        .iter()
        .position(|t| t.text == "nestedstate2")
        .unwrap();
    assert_eq!(tokens[index + 1].kind, TokenKind::InitialState);
    assert_eq!(tokens[index + 2].kind, TokenKind::Newline);
    assert_eq!(tokens[index + 3].kind, TokenKind::Dedent);
}

#[test]
fn test_crlf_line_endings_tokenize_like_lf() {
    let lf = tokenize("a\n  b").unwrap();
    let crlf = tokenize("a\r\n  b").unwrap();

    let kinds = |tokens: &[Token]| tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds(&lf), kinds(&crlf));
    assert_eq!(
        kinds(&lf),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn test_tabs_do_not_open_blocks() {
    let tokens = tokenize("a\n\tb\n").unwrap();

    assert!(tokens.iter().all(|t| t.kind != TokenKind::Indent));
    let b = tokens.iter().find(|t| t.text == "b").unwrap();
    assert_eq!((b.line, b.col), (2, 2));
}

#[test]
fn test_indentation_always_balances() {
    let sources = [
        "",
        "a",
        "a\n  b\n    c",
        "a\n  b\n    c\n  d\n    e",
        DOCUMENT,
    ];
    for source in sources {
        let tokens = tokenize(source).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents, "source {source:?}");
    }
}

#[test]
fn test_raw_token_stream_keeps_whitespace() {
    // The raw pass below tokenize stays reachable on its own; nothing
    // is skipped at that stage
    assert_eq!(
        raw_tokenize("a -> b"),
        vec![
            RawToken::Identifier,
            RawToken::Spaces,
            RawToken::Arrow,
            RawToken::Spaces,
            RawToken::Identifier,
        ]
    );
}
