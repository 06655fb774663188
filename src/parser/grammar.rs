//! Grammar rules for the statesketch notation
//!
//! Terminals consume exactly one token and check its kind. The composite
//! rules mirror the notation: a `transition` is an optional event, an arrow,
//! a target, a guard (mandatory when the event is absent) and any number of
//! actions; a `stateDeclaration` is a name, its modifiers and an optional
//! indented block of transitions and child states. Rules call each other
//! recursively through the combinators in
//! [`combinators`](crate::parser::combinators).

use crate::ast::node::{StateKind, StateNode, Transition};
use crate::lexer::TokenKind;
use crate::parser::assembly::{assemble_block, resolve_initial, BlockItem};
use crate::parser::combinators::{Parser, Rule, RuleResult};
use crate::parser::error::SyntaxFailure;

/// Postfix markers collected from a state declaration
#[derive(Debug, Default, Clone, Copy)]
struct Modifiers {
    parallel: bool,
    final_state: bool,
    initial: bool,
}

impl Modifiers {
    fn kind(&self) -> StateKind {
        if self.parallel {
            StateKind::Parallel
        } else if self.final_state {
            StateKind::Final
        } else {
            StateKind::Atomic
        }
    }
}

impl Parser {
    fn identifier(&mut self) -> RuleResult<String> {
        self.expect(TokenKind::Identifier).map(|t| t.text)
    }

    fn condition(&mut self) -> RuleResult<String> {
        self.expect(TokenKind::Condition).map(|t| t.text)
    }

    fn action(&mut self) -> RuleResult<String> {
        self.expect(TokenKind::Action).map(|t| t.text)
    }

    fn arrow(&mut self) -> RuleResult<()> {
        self.expect(TokenKind::TransitionArrow).map(|_| ())
    }

    fn indent(&mut self) -> RuleResult<()> {
        self.expect(TokenKind::Indent).map(|_| ())
    }

    fn dedent(&mut self) -> RuleResult<()> {
        self.expect(TokenKind::Dedent).map(|_| ())
    }

    fn parallel_state(&mut self) -> RuleResult<TokenKind> {
        self.expect(TokenKind::ParallelState).map(|t| t.kind)
    }

    fn final_state(&mut self) -> RuleResult<TokenKind> {
        self.expect(TokenKind::FinalState).map(|t| t.kind)
    }

    fn initial_state(&mut self) -> RuleResult<TokenKind> {
        self.expect(TokenKind::InitialState).map(|t| t.kind)
    }

    fn modifier(&mut self) -> RuleResult<TokenKind> {
        const RULES: [Rule<TokenKind>; 3] = [
            ("PARALLEL_STATE", Parser::parallel_state),
            ("FINAL_STATE", Parser::final_state),
            ("INITIAL_STATE", Parser::initial_state),
        ];
        self.one_or_another(&RULES)
    }

    /// At most one of each marker, in any order. A repeated marker is left
    /// unconsumed; whatever rule comes next reports it.
    fn state_modifiers(&mut self) -> RuleResult<Modifiers> {
        let mut modifiers = Modifiers::default();
        loop {
            let saved = self.save();
            match self.zero_or_one(Self::modifier)? {
                Some(TokenKind::ParallelState) if !modifiers.parallel => {
                    modifiers.parallel = true
                }
                Some(TokenKind::FinalState) if !modifiers.final_state => {
                    modifiers.final_state = true
                }
                Some(TokenKind::InitialState) if !modifiers.initial => modifiers.initial = true,
                Some(_) => {
                    self.restore(saved);
                    break;
                }
                None => break,
            }
        }
        Ok(modifiers)
    }

    /// `[event] -> target [;guard] {> action}`. Without an event the guard
    /// is mandatory: an unguarded transient transition would fire
    /// unconditionally and make its siblings unreachable.
    pub(crate) fn transition(&mut self) -> RuleResult<Transition> {
        let event = self.zero_or_one(Self::identifier)?;
        self.arrow()?;
        let target = self.identifier()?;
        let cond = match &event {
            Some(_) => self.zero_or_one(Self::condition)?,
            None => Some(self.condition()?),
        };
        let actions = self.zero_or_more(Self::action)?;
        Ok(Transition {
            event: event.unwrap_or_default(),
            target,
            cond,
            actions,
        })
    }

    /// `name[&][$][*]` with an optional indented block of one or more
    /// transitions and child states
    pub(crate) fn state_declaration(&mut self) -> RuleResult<StateNode> {
        let name = self.identifier()?;
        match self.state_body(&name) {
            Ok(node) => Ok(node),
            Err(cause) => Err(SyntaxFailure::InState {
                name,
                cause: Box::new(cause),
            }),
        }
    }

    fn state_body(&mut self, name: &str) -> RuleResult<StateNode> {
        let modifiers = self.state_modifiers()?;
        let items = match self.zero_or_one(Self::indent)? {
            Some(()) => {
                let items = self.one_or_more(Self::block_item)?;
                self.dedent()?;
                items
            }
            None => Vec::new(),
        };
        let (transitions, children) = assemble_block(items);
        let initial = resolve_initial(&children);
        Ok(StateNode {
            name: name.to_string(),
            kind: modifiers.kind(),
            is_initial: modifiers.initial,
            transitions,
            children,
            initial,
        })
    }

    fn block_item(&mut self) -> RuleResult<BlockItem> {
        const RULES: [Rule<BlockItem>; 2] = [
            ("transition", Parser::transition_item),
            ("state declaration", Parser::state_item),
        ];
        self.one_or_another(&RULES)
    }

    fn transition_item(&mut self) -> RuleResult<BlockItem> {
        self.transition().map(BlockItem::Transition)
    }

    fn state_item(&mut self) -> RuleResult<BlockItem> {
        self.state_declaration().map(BlockItem::State)
    }

    pub(crate) fn end_of_input(&mut self) -> RuleResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(SyntaxFailure::Expected {
                expected: "end of input",
                found: Some(token.clone()),
            }),
        }
    }
}
