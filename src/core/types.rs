use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier, unique across the whole tree.
///
/// Hosts may key nodes by number or by string; variants never compare equal,
/// so `1` and `"1"` are distinct identifiers. Numbers that do not fit `i64`
/// (fractions, values above `i64::MAX`) land in `Number` and compare by their
/// JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Integer(i64),
    Number(serde_json::Number),
    Text(String),
}

impl NodeValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) | Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(raw) => Some(*raw),
            Self::Number(raw) => raw.as_i64(),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(raw) => write!(f, "{raw}"),
            Self::Number(raw) => write!(f, "{raw}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for NodeValue {
    fn from(raw: i64) -> Self {
        Self::Integer(raw)
    }
}

impl From<i32> for NodeValue {
    fn from(raw: i32) -> Self {
        Self::Integer(i64::from(raw))
    }
}

impl From<&str> for NodeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for NodeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Policy deciding which node kinds carry authoritative check state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckModel {
    /// Only leaves carry check state; checking a parent checks its leaves.
    #[default]
    Leaf,
    /// Only non-leaf nodes carry check state, independent of their children.
    Parent,
    /// Every node carries check state and parents mirror their children.
    All,
}

impl CheckModel {
    #[must_use]
    pub const fn tracks_parents(self) -> bool {
        matches!(self, Self::Parent | Self::All)
    }

    #[must_use]
    pub const fn tracks_leaves(self) -> bool {
        matches!(self, Self::Leaf | Self::All)
    }
}

/// Boolean node attributes addressable by the list and flag APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeFlag {
    Checked,
    Expanded,
    Visible,
    Disabled,
    ShowCheckbox,
}
