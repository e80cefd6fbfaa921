use crate::core::{FlatNode, NodeFlag, NodeValue};

use super::TreeStateEngine;

impl TreeStateEngine {
    #[must_use]
    pub fn get_node(&self, value: &NodeValue) -> Option<&FlatNode> {
        self.nodes.get(value)
    }

    #[must_use]
    pub fn contains(&self, value: &NodeValue) -> bool {
        self.nodes.contains_key(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Table entries in flatten order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlatNode> {
        self.nodes.values()
    }

    /// Node values in flatten order.
    pub fn values(&self) -> impl Iterator<Item = &NodeValue> {
        self.nodes.keys()
    }

    /// Reads a boolean attribute; `None` for unknown values.
    #[must_use]
    pub fn flag(&self, value: &NodeValue, flag: NodeFlag) -> Option<bool> {
        self.nodes.get(value).map(|node| node.flag(flag))
    }

    /// Writes a boolean attribute without any cascade.
    ///
    /// Returns `false` when `value` is not in the table.
    pub fn set_flag(&mut self, value: &NodeValue, flag: NodeFlag, state: bool) -> bool {
        match self.nodes.get_mut(value) {
            Some(node) => {
                node.set_flag(flag, state);
                true
            }
            None => false,
        }
    }
}
