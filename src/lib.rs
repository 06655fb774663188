//! # statesketch
//!
//! A parser for the statesketch statechart notation.
//!
//! Statesketch describes a statechart as an indented outline: one state per
//! line, transitions written as `EVENT -> target`, guards as `;name`,
//! actions as `>name`, and postfix markers on state names for parallel
//! (`&`), final (`$`) and initial (`*`) states. [`parse`] compiles a source
//! into a nested [`StatechartDescriptor`] that serializes to the statechart
//! interpreter's configuration shape; [`tokenize`] exposes the positioned
//! token stream underneath it.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{StateKind, StateNode, StatechartDescriptor, Transition, TransitionEntry};
pub use lexer::{tokenize, IndentationError, Position, SourceLocation, Token, TokenKind};
pub use parser::{parse, ParseError};
