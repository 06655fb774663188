//! Parser module for the statesketch notation
//!
//! A backtracking recursive-descent parser over the token stream produced by
//! the [lexer](crate::lexer). Grammar rules are plain methods returning
//! `Result`; the combinators module provides the sequencing and alternation
//! they compose with, and the assembly module folds parsed block items into
//! the descriptor maps.

pub mod api;
pub(crate) mod assembly;
pub(crate) mod combinators;
pub(crate) mod error;
mod grammar;

pub use api::parse;
pub use error::ParseError;
