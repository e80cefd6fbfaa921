use tracing::{debug, warn};

use crate::core::{FlatNode, NodeKind, NodeValue, RawNode};
use crate::error::{TreeError, TreeResult};

use super::{TreeEngineConfig, TreeStateEngine};

impl TreeStateEngine {
    /// Flattens `nodes` as root-level entries, depth first, preserving sibling
    /// order.
    ///
    /// Duplicate values are rejected eagerly, before descending into the
    /// offending node's children, so the first repeat in document order is
    /// reported. Entries inserted before the failure stay in the table; use
    /// [`Self::rebuild`] to get all-or-nothing semantics.
    pub fn flatten_nodes(&mut self, nodes: &[RawNode]) -> TreeResult<()> {
        let before = self.nodes.len();

        // Pending entries, popped in document order; children are pushed in
        // reverse so the first child comes off next.
        let mut pending: Vec<PendingNode<'_>> = nodes
            .iter()
            .enumerate()
            .rev()
            .map(|(index, node)| PendingNode {
                node,
                parent: None,
                depth: 0,
                index,
            })
            .collect();

        while let Some(PendingNode {
            node,
            parent,
            depth,
            index,
        }) = pending.pop()
        {
            let data = node.data();
            if self.nodes.contains_key(&data.value) {
                warn!(value = %data.value, depth, "duplicate node value");
                return Err(TreeError::DuplicateValue {
                    value: data.value.clone(),
                });
            }

            let parent_disabled = parent
                .and_then(|value| self.nodes.get(value))
                .is_some_and(|entry| entry.disabled);
            let kind = match node.children() {
                None => NodeKind::Leaf,
                Some(children) => NodeKind::Parent {
                    children: children.iter().map(|child| child.value().clone()).collect(),
                },
            };
            self.nodes.insert(
                data.value.clone(),
                FlatNode {
                    value: data.value.clone(),
                    label: data.label.clone(),
                    kind,
                    parent: parent.cloned(),
                    tree_depth: depth,
                    index,
                    disabled: resolve_disabled(self.config, data.disabled, parent_disabled),
                    show_checkbox: data.show_checkbox.unwrap_or(true),
                    is_visible: true,
                    checked: None,
                    expanded: None,
                },
            );

            if let Some(children) = node.children() {
                pending.extend(children.iter().enumerate().rev().map(|(index, child)| {
                    PendingNode {
                        node: child,
                        parent: Some(&data.value),
                        depth: depth + 1,
                        index,
                    }
                }));
            }
        }

        debug!(
            roots = nodes.len(),
            flattened = self.nodes.len() - before,
            total = self.nodes.len(),
            "flatten nodes"
        );
        Ok(())
    }
}

struct PendingNode<'a> {
    node: &'a RawNode,
    parent: Option<&'a NodeValue>,
    depth: usize,
    index: usize,
}

/// Global disable wins, then inheritance from the (already resolved) parent,
/// then the node's own declaration.
fn resolve_disabled(config: TreeEngineConfig, declared: bool, parent_disabled: bool) -> bool {
    if config.disabled {
        return true;
    }
    if !config.no_cascade && parent_disabled {
        return true;
    }
    declared
}
