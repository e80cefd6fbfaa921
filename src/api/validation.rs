use std::collections::{HashMap, HashSet};

use crate::core::{FlatNode, NodeValue};
use crate::error::{TreeError, TreeResult};

/// Checks that a restored table is a forest: unique values, parent and child
/// links that name each other, parents of kind `Parent`, and no parent cycle.
pub(super) fn validate_snapshot_nodes(nodes: &[FlatNode]) -> TreeResult<()> {
    let mut by_value: HashMap<&NodeValue, &FlatNode> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        if by_value.insert(&node.value, node).is_some() {
            return Err(TreeError::DuplicateValue {
                value: node.value.clone(),
            });
        }
    }

    for node in nodes {
        if let Some(parent_value) = &node.parent {
            let Some(parent) = by_value.get(parent_value) else {
                return Err(invalid_link(node, format!("unknown parent '{parent_value}'")));
            };
            if parent.is_leaf() {
                return Err(invalid_link(node, format!("leaf '{parent_value}' as parent")));
            }
            if !parent.children().contains(&node.value) {
                return Err(invalid_link(
                    node,
                    format!("parent '{parent_value}' that does not list it as a child"),
                ));
            }
        }

        let mut listed: HashSet<&NodeValue> = HashSet::with_capacity(node.children().len());
        for child_value in node.children() {
            let Some(child) = by_value.get(child_value) else {
                return Err(invalid_link(node, format!("unknown child '{child_value}'")));
            };
            if child.parent.as_ref() != Some(&node.value) {
                return Err(invalid_link(
                    node,
                    format!("child '{child_value}' whose parent is not this node"),
                ));
            }
            if !listed.insert(child_value) {
                return Err(invalid_link(node, format!("child '{child_value}' twice")));
            }
        }
    }

    validate_acyclic(nodes, &by_value)
}

/// Every parent chain must reach a root within `nodes.len()` steps.
fn validate_acyclic(
    nodes: &[FlatNode],
    by_value: &HashMap<&NodeValue, &FlatNode>,
) -> TreeResult<()> {
    let mut rooted: HashSet<&NodeValue> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        let mut path: Vec<&NodeValue> = Vec::new();
        let mut current = Some(node);
        while let Some(step) = current {
            if rooted.contains(&step.value) {
                break;
            }
            if path.len() >= nodes.len() {
                return Err(invalid_link(
                    node,
                    "a parent chain that never reaches a root".to_owned(),
                ));
            }
            path.push(&step.value);
            current = step
                .parent
                .as_ref()
                .and_then(|parent| by_value.get(parent).copied());
        }
        rooted.extend(path);
    }
    Ok(())
}

fn invalid_link(node: &FlatNode, detail: String) -> TreeError {
    TreeError::InvalidData(format!("node '{}' references {detail}", node.value))
}
