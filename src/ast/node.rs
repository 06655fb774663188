//! The compiled statechart descriptor
//!
//! These types are what `parse` produces: a nested tree of states, each with
//! its transitions keyed by event name and its children keyed by state name.
//! Both maps preserve declaration order, which matters for `initial`
//! resolution and for the transient transition list.

use indexmap::IndexMap;

/// How a state behaves once entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateKind {
    #[default]
    Atomic,
    Parallel,
    Final,
}

impl StateKind {
    /// The descriptor's `type` field; atomic states have none
    pub fn type_label(&self) -> Option<&'static str> {
        match self {
            StateKind::Atomic => None,
            StateKind::Parallel => Some("parallel"),
            StateKind::Final => Some("final"),
        }
    }
}

/// A single transition. An empty `event` means the transition is transient:
/// it is tried on entry, and its guard is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub event: String,
    pub target: String,
    pub cond: Option<String>,
    pub actions: Vec<String>,
}

/// Value stored under one event key of a state's `on` map.
///
/// Every named event holds a single transition (a repeated event overwrites
/// the earlier one in place). The empty event key instead accumulates all of
/// the block's transient transitions in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEntry {
    Single(Transition),
    Transient(Vec<Transition>),
}

/// One state in the compiled chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    /// Unique among siblings; a later declaration of the same name replaces
    /// the earlier one
    pub name: String,
    pub kind: StateKind,
    /// Set by the `*` modifier; steers the parent's `initial`
    pub is_initial: bool,
    pub transitions: IndexMap<String, TransitionEntry>,
    pub children: IndexMap<String, StateNode>,
    /// The child marked initial, else the first declared child; `None` for
    /// leaves. Computed, never written in the notation.
    pub initial: Option<String>,
}

impl StateNode {
    /// A leaf state with no modifiers, transitions or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StateKind::default(),
            is_initial: false,
            transitions: IndexMap::new(),
            children: IndexMap::new(),
            initial: None,
        }
    }
}

/// The whole compiled machine: the root state, whose name is the machine id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatechartDescriptor {
    pub root: StateNode,
}

impl StatechartDescriptor {
    pub fn id(&self) -> &str {
        &self.root.name
    }
}
