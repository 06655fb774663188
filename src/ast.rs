//! Descriptor types for compiled statesketch machines

pub mod node;
mod serialize;

pub use node::{StateKind, StateNode, StatechartDescriptor, Transition, TransitionEntry};
