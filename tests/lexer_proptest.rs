//! Property-based tests for the statesketch lexer and parser
//!
//! These tests ensure the lexer handles arbitrary input without panicking
//! and keeps its indentation bookkeeping balanced, and that comment and
//! blank-line placement never changes what a machine parses to.

use proptest::prelude::*;

use statesketch::{parse, tokenize, TokenKind};

/// Generate state and event names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

/// Generate adversarial sources: notation-shaped character soup with real
/// line structure, or arbitrary unicode lines
fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 \t\r\n%&$*;>.#-]{0,120}",
        prop::collection::vec(".{0,40}", 0..5).prop_map(|lines| lines.join("\n")),
    ]
}

/// Generate nesting levels for consecutive lines: the first line is the
/// root at level 0, every later line sits one level below the root or
/// deeper, at most one level deeper than its predecessor
fn level_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1..=4usize, 0..12).prop_map(|steps| {
        let mut levels = vec![0];
        let mut previous = 0;
        for step in steps {
            let level = step.min(previous + 1);
            levels.push(level);
            previous = level;
        }
        levels
    })
}

/// Generate a well-formed machine: a root state with uniquely named
/// descendants laid out by the level sequence
fn machine_strategy() -> impl Strategy<Value = String> {
    level_strategy().prop_map(|levels| {
        levels
            .iter()
            .enumerate()
            .map(|(index, level)| format!("{}s{}", "  ".repeat(*level), index))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Generate comment and blank lines to interleave
fn noise_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        // Comment lines can sit at any indentation without opening a block
        "[ ]{0,6}% [a-z ]{0,12}",
        "[ \t]{1,4}",
    ]
}

proptest! {
    #[test]
    fn test_tokenize_never_panics(input in source_strategy()) {
        // Arbitrary input either tokenizes or reports an indentation error
        let _ = tokenize(&input);
    }

    #[test]
    fn test_parse_never_panics(input in source_strategy()) {
        let _ = parse(&input);
    }

    #[test]
    fn test_indentation_always_balances(input in source_strategy()) {
        if let Ok(tokens) = tokenize(&input) {
            let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
            let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
            prop_assert_eq!(indents, dedents);
        }
    }

    #[test]
    fn test_well_formed_machines_parse(source in machine_strategy()) {
        let descriptor = parse(&source);
        prop_assert!(descriptor.is_ok(), "failed on {:?}: {:?}", source, descriptor.err());
    }

    #[test]
    fn test_noise_lines_do_not_change_the_descriptor(
        source in machine_strategy(),
        noise in prop::collection::vec(noise_line_strategy(), 1..6),
    ) {
        let plain = parse(&source).expect("plain source should parse");

        // Scatter the noise lines through the document
        let lines: Vec<&str> = source.lines().collect();
        let mut noisy_lines: Vec<String> = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(noise_line) = noise.get(index % noise.len()) {
                noisy_lines.push(noise_line.clone());
            }
            noisy_lines.push((*line).to_string());
        }
        noisy_lines.push(noise[0].clone());
        let noisy_source = noisy_lines.join("\n");

        let noisy = parse(&noisy_source).expect("noisy source should parse");
        prop_assert_eq!(plain, noisy);
    }

    #[test]
    fn test_inline_comments_do_not_change_the_descriptor(source in machine_strategy()) {
        let plain = parse(&source).expect("plain source should parse");

        let commented = source
            .lines()
            .map(|line| format!("{line} % note"))
            .collect::<Vec<_>>()
            .join("\n");
        let noisy = parse(&commented).expect("commented source should parse");
        prop_assert_eq!(plain, noisy);
    }

    #[test]
    fn test_identifiers_tokenize_whole(name in name_strategy()) {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].text, &name);
    }
}
