use indexmap::IndexSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::NodeValue;

use super::TreeStateEngine;

impl TreeStateEngine {
    /// Recomputes node visibility for `filter_text`.
    ///
    /// An empty filter shows every node. Otherwise a node stays visible when
    /// its label contains the filter (case-insensitive), when it is an
    /// ancestor of such a node, or when it descends from a matching non-leaf.
    /// Ancestors of matches are also expanded; expansion elsewhere is left
    /// untouched.
    pub fn filter_nodes(&mut self, filter_text: &str) {
        if filter_text.is_empty() {
            self.toggle_visible_to_all(true);
            debug!(total = self.nodes.len(), "clear filter");
            return;
        }

        self.toggle_visible_to_all(false);
        let needle = filter_text.to_lowercase();
        let matched: IndexSet<NodeValue> = self
            .nodes
            .values()
            .filter(|node| node.label.to_lowercase().contains(&needle))
            .map(|node| node.value.clone())
            .collect();

        // Leaf matches only need their ancestor chain. Non-leaf matches under
        // a matched parent are covered by that parent's subtree reveal.
        let mut subtree_roots: Vec<&NodeValue> = Vec::new();
        for value in &matched {
            let Some(node) = self.nodes.get_mut(value) else {
                continue;
            };
            if node.is_leaf() {
                node.is_visible = true;
                if let Some(parent) = node.parent.clone() {
                    self.set_visible_and_expand_to_parent(&parent);
                }
                continue;
            }
            if node
                .parent
                .as_ref()
                .is_some_and(|parent| matched.contains(parent))
            {
                continue;
            }
            subtree_roots.push(value);
        }

        for &value in &subtree_roots {
            let Some(node) = self.nodes.get_mut(value) else {
                continue;
            };
            node.is_visible = true;
            if let Some(parent) = node.parent.clone() {
                self.set_visible_and_expand_to_parent(&parent);
            }
            self.set_visible_to_children(value);
        }

        debug!(
            filter_text,
            matched = matched.len(),
            subtree_roots = subtree_roots.len(),
            "filter nodes"
        );
    }

    /// Marks `value` and every ancestor visible and expanded.
    pub fn set_visible_and_expand_to_parent(&mut self, value: &NodeValue) {
        let mut current = Some(value.clone());
        while let Some(value) = current.take() {
            let Some(node) = self.nodes.get_mut(&value) else {
                break;
            };
            node.is_visible = true;
            node.expanded = Some(true);
            current = node.parent.clone();
        }
    }

    /// Marks every descendant of `value` visible without touching expansion.
    pub fn set_visible_to_children(&mut self, value: &NodeValue) {
        let mut pending: SmallVec<[NodeValue; 16]> = self
            .nodes
            .get(value)
            .map(|node| node.children().iter().rev().cloned().collect())
            .unwrap_or_default();
        while let Some(value) = pending.pop() {
            let Some(node) = self.nodes.get_mut(&value) else {
                continue;
            };
            node.is_visible = true;
            pending.extend(node.children().iter().rev().cloned());
        }
    }

    /// Sets `is_visible` on every node.
    pub fn toggle_visible_to_all(&mut self, visible: bool) {
        for node in self.nodes.values_mut() {
            node.is_visible = visible;
        }
    }
}
