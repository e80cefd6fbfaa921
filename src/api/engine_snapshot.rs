use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::FlatNode;
use crate::error::TreeResult;

use super::validation::validate_snapshot_nodes;
use super::{TreeEngineConfig, TreeStateEngine};

/// Serializable deterministic state snapshot used by regression tests and
/// hosts that persist tree state between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub config: TreeEngineConfig,
    /// Table entries in flatten order.
    pub nodes: Vec<FlatNode>,
}

impl TreeStateEngine {
    #[must_use]
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            config: self.config,
            nodes: self.nodes.values().cloned().collect(),
        }
    }

    /// Rebuilds an engine from a snapshot after checking that identifiers are
    /// unique and every parent/child link resolves inside the snapshot.
    pub fn from_snapshot(snapshot: TreeSnapshot) -> TreeResult<Self> {
        validate_snapshot_nodes(&snapshot.nodes)?;
        let nodes: IndexMap<_, _> = snapshot
            .nodes
            .into_iter()
            .map(|node| (node.value.clone(), node))
            .collect();
        debug!(total = nodes.len(), "restore from snapshot");
        Ok(Self {
            config: snapshot.config,
            nodes,
        })
    }
}
