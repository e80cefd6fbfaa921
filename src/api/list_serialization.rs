use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{FlatNode, NodeFlag, NodeValue};

use super::TreeStateEngine;

/// Externally visible checked/expanded identifier lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLists {
    #[serde(default)]
    pub checked: Vec<NodeValue>,
    #[serde(default)]
    pub expanded: Vec<NodeValue>,
}

impl TreeLists {
    #[must_use]
    pub fn new(checked: Vec<NodeValue>, expanded: Vec<NodeValue>) -> Self {
        Self { checked, expanded }
    }
}

/// Check state summary handed to hosts after a check interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Every checked value, in flatten order.
    pub checked: Vec<NodeValue>,
    /// `checked` minus values whose parent is itself checked.
    pub compact: Vec<NodeValue>,
    /// Labels of `compact`, index-aligned.
    pub labels: Vec<String>,
}

impl TreeStateEngine {
    /// Loads external lists: every node is first reset to unchecked and
    /// collapsed, then listed values are set. Unknown values are ignored.
    pub fn deserialize_lists(&mut self, lists: &TreeLists) {
        for node in self.nodes.values_mut() {
            node.checked = Some(false);
            node.expanded = Some(false);
        }

        let mut ignored = 0usize;
        for (values, flag) in [
            (&lists.checked, NodeFlag::Checked),
            (&lists.expanded, NodeFlag::Expanded),
        ] {
            for value in values {
                match self.nodes.get_mut(value) {
                    Some(node) => node.set_flag(flag, true),
                    None => ignored += 1,
                }
            }
        }
        debug!(
            checked = lists.checked.len(),
            expanded = lists.expanded.len(),
            ignored,
            "deserialize lists"
        );
    }

    /// Values whose `flag` is currently set, in flatten order.
    #[must_use]
    pub fn serialize_list(&self, flag: NodeFlag) -> Vec<NodeValue> {
        self.nodes
            .values()
            .filter(|node| node.flag(flag))
            .map(|node| node.value.clone())
            .collect()
    }

    #[must_use]
    pub fn serialize_lists(&self) -> TreeLists {
        TreeLists {
            checked: self.serialize_list(NodeFlag::Checked),
            expanded: self.serialize_list(NodeFlag::Expanded),
        }
    }

    /// Keeps the values whose parent is not checked; root nodes are always
    /// kept. Unknown values are dropped.
    #[must_use]
    pub fn get_values_by_parent_model(&self, values: &[NodeValue]) -> Vec<NodeValue> {
        values
            .iter()
            .filter_map(|value| self.nodes.get(value))
            .filter(|node| match &node.parent {
                None => true,
                Some(parent) => !self.nodes.get(parent).is_some_and(FlatNode::is_checked),
            })
            .map(|node| node.value.clone())
            .collect()
    }

    /// Labels of the known `values`, in the given order.
    #[must_use]
    pub fn labels_by_values(&self, values: &[NodeValue]) -> Vec<&str> {
        values
            .iter()
            .filter_map(|value| self.nodes.get(value))
            .map(|node| node.label.as_str())
            .collect()
    }

    #[must_use]
    pub fn check_report(&self) -> CheckReport {
        let checked = self.serialize_list(NodeFlag::Checked);
        let compact = self.get_values_by_parent_model(&checked);
        let labels = self
            .labels_by_values(&compact)
            .into_iter()
            .map(str::to_owned)
            .collect();
        CheckReport {
            checked,
            compact,
            labels,
        }
    }
}
