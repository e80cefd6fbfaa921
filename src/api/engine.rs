use indexmap::IndexMap;
use tracing::debug;

use crate::core::{FlatNode, NodeValue, RawNode};
use crate::error::TreeResult;

use super::TreeEngineConfig;

/// Owner of the flattened node table.
///
/// The table is built once per raw tree and keyed by node value in flatten
/// (document) order. Every operation addresses nodes through it; parent and
/// child links are identifiers into the same table. `clone()` yields a fully
/// independent copy of every entry.
#[derive(Debug, Clone, Default)]
pub struct TreeStateEngine {
    pub(super) config: TreeEngineConfig,
    pub(super) nodes: IndexMap<NodeValue, FlatNode>,
}

impl TreeStateEngine {
    /// Creates an engine with an empty table.
    #[must_use]
    pub fn new(config: TreeEngineConfig) -> Self {
        Self {
            config,
            nodes: IndexMap::new(),
        }
    }

    /// Creates an engine and flattens `nodes` into it.
    pub fn with_nodes(config: TreeEngineConfig, nodes: &[RawNode]) -> TreeResult<Self> {
        let mut engine = Self::new(config);
        engine.flatten_nodes(nodes)?;
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> TreeEngineConfig {
        self.config
    }

    /// Replaces the active configuration.
    ///
    /// `check_model` and `no_cascade` apply to the next toggle. Disabled
    /// resolution happens at flatten time, so `disabled`/`no_cascade` changes
    /// reach node `disabled` state only after [`Self::rebuild`].
    pub fn set_config(&mut self, config: TreeEngineConfig) {
        self.config = config;
    }

    /// Drops every table entry.
    pub fn reset(&mut self) {
        debug!(dropped = self.nodes.len(), "reset node table");
        self.nodes.clear();
    }

    /// Replaces the table with a fresh flatten of `nodes`.
    ///
    /// On failure the table is left empty; a partially built table is never
    /// observable through this entry point.
    pub fn rebuild(&mut self, nodes: &[RawNode]) -> TreeResult<()> {
        self.reset();
        if let Err(err) = self.flatten_nodes(nodes) {
            self.nodes.clear();
            return Err(err);
        }
        Ok(())
    }
}
