use tracing::{debug, trace};

use crate::core::NodeValue;

use super::TreeStateEngine;

impl TreeStateEngine {
    /// Expands or collapses a single node.
    ///
    /// Returns `false` when `value` is not in the table.
    pub fn toggle_expanded(&mut self, value: &NodeValue, expanded: bool) -> bool {
        let Some(node) = self.nodes.get_mut(value) else {
            debug!(%value, "toggle expanded on unknown node");
            return false;
        };
        node.expanded = Some(expanded);
        trace!(%value, expanded, "toggle expanded");
        true
    }

    /// Expands or collapses every parent node. Leaves are left untouched.
    pub fn expand_all_nodes(&mut self, expand: bool) {
        let mut touched = 0usize;
        for node in self.nodes.values_mut().filter(|node| node.is_parent()) {
            node.expanded = Some(expand);
            touched += 1;
        }
        debug!(expand, parents = touched, "expand all nodes");
    }
}
