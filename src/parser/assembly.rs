//! Folding parsed block items into a state node
//!
//! A block is an ordered list of transitions and child declarations. The
//! fold keeps declaration order, which is what makes the emitted maps
//! deterministic:
//!
//! - transient transitions (empty event) accumulate into one list under
//!   the `""` key
//! - a named event that appears again replaces the earlier transition but
//!   keeps its original position in the map
//! - a child name that appears again replaces the earlier child the same way
//! - `initial` is the first child flagged with `*`, or the first child
//!   declared when none is

use indexmap::IndexMap;

use crate::ast::node::{StateNode, Transition, TransitionEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BlockItem {
    Transition(Transition),
    State(StateNode),
}

pub(crate) fn assemble_block(
    items: Vec<BlockItem>,
) -> (
    IndexMap<String, TransitionEntry>,
    IndexMap<String, StateNode>,
) {
    let mut transitions = IndexMap::new();
    let mut children = IndexMap::new();
    for item in items {
        match item {
            BlockItem::Transition(transition) if transition.event.is_empty() => {
                match transitions.get_mut("") {
                    Some(TransitionEntry::Transient(list)) => list.push(transition),
                    _ => {
                        transitions
                            .insert(String::new(), TransitionEntry::Transient(vec![transition]));
                    }
                }
            }
            BlockItem::Transition(transition) => {
                transitions.insert(transition.event.clone(), TransitionEntry::Single(transition));
            }
            BlockItem::State(node) => {
                children.insert(node.name.clone(), node);
            }
        }
    }
    (transitions, children)
}

pub(crate) fn resolve_initial(children: &IndexMap<String, StateNode>) -> Option<String> {
    children
        .values()
        .find(|child| child.is_initial)
        .or_else(|| children.values().next())
        .map(|child| child.name.clone())
}
