use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

use super::{TreeSnapshot, TreeStateEngine};

pub const TREE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TreeSnapshot,
}

impl TreeSnapshot {
    pub fn to_json_pretty(&self) -> TreeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TreeError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> TreeResult<String> {
        let payload = TreeSnapshotJsonContractV1 {
            schema_version: TREE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TreeError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TreeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TreeSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TreeSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TreeError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != TREE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TreeError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl TreeStateEngine {
    pub fn snapshot_json_pretty(&self) -> TreeResult<String> {
        self.snapshot().to_json_pretty()
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> TreeResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
