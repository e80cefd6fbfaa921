use serde::{Deserialize, Serialize};

use super::{NodeFlag, NodeValue};

/// Structural kind captured at flatten time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    Parent { children: Vec<NodeValue> },
}

/// One entry of the flattened node table.
///
/// `parent` and `children` are identifiers resolved through the owning table,
/// never direct references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatNode {
    pub value: NodeValue,
    pub label: String,
    pub kind: NodeKind,
    pub parent: Option<NodeValue>,
    pub tree_depth: usize,
    pub index: usize,
    pub disabled: bool,
    pub show_checkbox: bool,
    pub is_visible: bool,
    /// `None` until the node is first checked, unchecked or deserialized.
    pub checked: Option<bool>,
    /// `None` until the node is first expanded, collapsed or deserialized.
    pub expanded: Option<bool>,
}

impl FlatNode {
    #[must_use]
    pub fn is_parent(&self) -> bool {
        matches!(self.kind, NodeKind::Parent { .. })
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.is_parent()
    }

    #[must_use]
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded.unwrap_or(false)
    }

    /// Child identifiers in sibling order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NodeValue] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Parent { children } => children,
        }
    }

    #[must_use]
    pub fn flag(&self, flag: NodeFlag) -> bool {
        match flag {
            NodeFlag::Checked => self.is_checked(),
            NodeFlag::Expanded => self.is_expanded(),
            NodeFlag::Visible => self.is_visible,
            NodeFlag::Disabled => self.disabled,
            NodeFlag::ShowCheckbox => self.show_checkbox,
        }
    }

    pub fn set_flag(&mut self, flag: NodeFlag, state: bool) {
        match flag {
            NodeFlag::Checked => self.checked = Some(state),
            NodeFlag::Expanded => self.expanded = Some(state),
            NodeFlag::Visible => self.is_visible = state,
            NodeFlag::Disabled => self.disabled = state,
            NodeFlag::ShowCheckbox => self.show_checkbox = state,
        }
    }
}
