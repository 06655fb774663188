//! Backtracking combinators over a shared cursor
//!
//! The parser context owns the (already filtered) token list and a single
//! cursor into it. Rules are plain methods returning `Result`; trying an
//! alternative is an explicit [`Parser::save`] / [`Parser::restore`] pair,
//! so backtracking is visible in the code instead of hiding in unwinding.
//! The four combinators below are the only control flow the grammar needs.
//!
//! One failure is never backtracked past: a committed one (see
//! [`SyntaxFailure::is_committed`]). Swallowing it would re-report the
//! problem at the start of the enclosing block instead of at the token
//! that caused it.

use crate::lexer::{Token, TokenKind};
use crate::parser::error::SyntaxFailure;

pub(crate) type RuleResult<T> = Result<T, SyntaxFailure>;

/// A named rule, as tried by [`Parser::one_or_another`]
pub(crate) type Rule<T> = (&'static str, fn(&mut Parser) -> RuleResult<T>);

pub(crate) struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Current cursor, to be handed back to [`Parser::restore`]
    pub(crate) fn save(&self) -> usize {
        self.cursor
    }

    pub(crate) fn restore(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Consume one token and check its kind
    pub(crate) fn expect(&mut self, kind: TokenKind) -> RuleResult<Token> {
        match self.tokens.get(self.cursor) {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                Ok(token.clone())
            }
            found => Err(SyntaxFailure::Expected {
                expected: kind.name(),
                found: found.cloned(),
            }),
        }
    }

    /// Try `rules` in order from the same starting cursor. The first success
    /// wins; each failure restores the cursor before the next attempt. If
    /// none matches, the failure names every rule tried and points at the
    /// token where the alternatives diverged.
    pub(crate) fn one_or_another<T>(&mut self, rules: &[Rule<T>]) -> RuleResult<T> {
        let saved = self.save();
        for (_, rule) in rules {
            match rule(self) {
                Ok(value) => return Ok(value),
                Err(failure) if failure.is_committed() => return Err(failure),
                Err(_) => self.restore(saved),
            }
        }
        Err(SyntaxFailure::Alternatives {
            rules: rules.iter().map(|(name, _)| *name).collect(),
            found: self.tokens.get(saved).cloned(),
        })
    }

    /// Optional match; an ordinary failure restores the cursor and yields
    /// `None`
    pub(crate) fn zero_or_one<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> RuleResult<T>,
    ) -> RuleResult<Option<T>> {
        let saved = self.save();
        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(failure) if failure.is_committed() => Err(failure),
            Err(_) => {
                self.restore(saved);
                Ok(None)
            }
        }
    }

    /// Repeat until the rule fails; the failing attempt is rolled back
    pub(crate) fn zero_or_more<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> RuleResult<T>,
    ) -> RuleResult<Vec<T>> {
        let mut items = Vec::new();
        loop {
            let saved = self.save();
            match rule(self) {
                Ok(value) => items.push(value),
                Err(failure) if failure.is_committed() => return Err(failure),
                Err(_) => {
                    self.restore(saved);
                    return Ok(items);
                }
            }
        }
    }

    /// One mandatory match (its failure propagates), then any number more
    pub(crate) fn one_or_more<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> RuleResult<T>,
    ) -> RuleResult<Vec<T>> {
        let mut items = vec![rule(self)?];
        items.extend(self.zero_or_more(|parser| rule(parser))?);
        Ok(items)
    }
}
