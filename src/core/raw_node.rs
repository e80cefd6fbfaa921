use serde::{Deserialize, Serialize, Serializer};

use crate::error::{TreeError, TreeResult};

use super::NodeValue;

/// Fields shared by leaf and parent input nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub value: NodeValue,
    pub label: String,
    pub disabled: bool,
    pub show_checkbox: Option<bool>,
}

impl NodeData {
    #[must_use]
    pub fn new(value: impl Into<NodeValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            show_checkbox: None,
        }
    }
}

/// Caller-supplied tree node.
///
/// A node is a parent exactly when it owns a children list, even an empty one.
/// JSON input follows the usual checkbox-tree shape
/// (`{"value", "label", "children"?, "disabled"?, "showCheckbox"?}`); a missing
/// or non-array `children` yields a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNodeRepr")]
pub enum RawNode {
    Leaf(NodeData),
    Parent {
        data: NodeData,
        children: Vec<RawNode>,
    },
}

impl RawNode {
    #[must_use]
    pub fn leaf(value: impl Into<NodeValue>, label: impl Into<String>) -> Self {
        Self::Leaf(NodeData::new(value, label))
    }

    #[must_use]
    pub fn parent(
        value: impl Into<NodeValue>,
        label: impl Into<String>,
        children: Vec<RawNode>,
    ) -> Self {
        Self::Parent {
            data: NodeData::new(value, label),
            children,
        }
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.data_mut().disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_show_checkbox(mut self, show_checkbox: bool) -> Self {
        self.data_mut().show_checkbox = Some(show_checkbox);
        self
    }

    #[must_use]
    pub fn data(&self) -> &NodeData {
        match self {
            Self::Leaf(data) | Self::Parent { data, .. } => data,
        }
    }

    fn data_mut(&mut self) -> &mut NodeData {
        match self {
            Self::Leaf(data) | Self::Parent { data, .. } => data,
        }
    }

    #[must_use]
    pub fn value(&self) -> &NodeValue {
        &self.data().value
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.data().label
    }

    /// Children of a parent node; `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[RawNode]> {
        match self {
            Self::Leaf(_) => None,
            Self::Parent { children, .. } => Some(children),
        }
    }

    #[must_use]
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// Parses a root-level node list from JSON.
    pub fn list_from_json_str(input: &str) -> TreeResult<Vec<RawNode>> {
        serde_json::from_str(input)
            .map_err(|e| TreeError::InvalidData(format!("failed to parse node list: {e}")))
    }

    /// Serializes a root-level node list to pretty JSON.
    pub fn list_to_json_pretty(nodes: &[RawNode]) -> TreeResult<String> {
        serde_json::to_string_pretty(nodes)
            .map_err(|e| TreeError::InvalidData(format!("failed to serialize node list: {e}")))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNodeRepr {
    value: NodeValue,
    label: String,
    #[serde(default)]
    children: Option<serde_json::Value>,
    #[serde(default)]
    disabled: Option<bool>,
    #[serde(default)]
    show_checkbox: Option<bool>,
}

impl TryFrom<RawNodeRepr> for RawNode {
    type Error = String;

    fn try_from(repr: RawNodeRepr) -> Result<Self, Self::Error> {
        let data = NodeData {
            value: repr.value,
            label: repr.label,
            disabled: repr.disabled.unwrap_or(false),
            show_checkbox: repr.show_checkbox,
        };
        match repr.children {
            Some(children @ serde_json::Value::Array(_)) => {
                let children: Vec<RawNode> = serde_json::from_value(children)
                    .map_err(|e| format!("invalid children of node '{}': {e}", data.value))?;
                Ok(Self::Parent { data, children })
            }
            _ => Ok(Self::Leaf(data)),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawNodeRef<'a> {
    value: &'a NodeValue,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [RawNode]>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_checkbox: Option<bool>,
}

impl Serialize for RawNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.data();
        RawNodeRef {
            value: &data.value,
            label: &data.label,
            children: self.children(),
            disabled: data.disabled,
            show_checkbox: data.show_checkbox,
        }
        .serialize(serializer)
    }
}
