//! Serialization of the compiled descriptor
//!
//! The output shape follows the XState config conventions: a transition with
//! nothing but a target serializes as the bare target string, everything
//! optional is omitted rather than null, and a plain leaf state is `{}`.
//! Hand-written impls keep that shape identical under serde_json and
//! serde_yaml.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::node::{StateNode, StatechartDescriptor, Transition, TransitionEntry};

impl Serialize for Transition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len =
            1 + usize::from(self.cond.is_some()) + usize::from(!self.actions.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("target", &self.target)?;
        if let Some(cond) = &self.cond {
            map.serialize_entry("cond", cond)?;
        }
        if !self.actions.is_empty() {
            map.serialize_entry("actions", &self.actions)?;
        }
        map.end()
    }
}

impl Serialize for TransitionEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // The shorthand: no guard, no actions, just a target string
            TransitionEntry::Single(t) if t.cond.is_none() && t.actions.is_empty() => {
                serializer.serialize_str(&t.target)
            }
            TransitionEntry::Single(t) => t.serialize(serializer),
            TransitionEntry::Transient(list) => list.serialize(serializer),
        }
    }
}

fn node_field_count(node: &StateNode) -> usize {
    usize::from(node.kind.type_label().is_some())
        + usize::from(node.is_initial)
        + usize::from(node.initial.is_some())
        + usize::from(!node.transitions.is_empty())
        + usize::from(!node.children.is_empty())
}

fn serialize_node_fields<M>(node: &StateNode, map: &mut M) -> Result<(), M::Error>
where
    M: SerializeMap,
{
    if let Some(label) = node.kind.type_label() {
        map.serialize_entry("type", label)?;
    }
    if node.is_initial {
        map.serialize_entry("isInitial", &true)?;
    }
    if let Some(initial) = &node.initial {
        map.serialize_entry("initial", initial)?;
    }
    if !node.transitions.is_empty() {
        map.serialize_entry("on", &node.transitions)?;
    }
    if !node.children.is_empty() {
        map.serialize_entry("states", &node.children)?;
    }
    Ok(())
}

impl Serialize for StateNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(node_field_count(self)))?;
        serialize_node_fields(self, &mut map)?;
        map.end()
    }
}

impl Serialize for StatechartDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1 + node_field_count(&self.root)))?;
        map.serialize_entry("id", &self.root.name)?;
        serialize_node_fields(&self.root, &mut map)?;
        map.end()
    }
}
