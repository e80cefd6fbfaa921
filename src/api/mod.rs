mod check_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_snapshot;
mod expansion_controller;
mod filter_controller;
mod flatten_controller;
mod json_contract;
mod list_serialization;
mod validation;

pub use engine::TreeStateEngine;
pub use engine_config::TreeEngineConfig;
pub use engine_snapshot::TreeSnapshot;
pub use json_contract::{TREE_SNAPSHOT_JSON_SCHEMA_V1, TreeSnapshotJsonContractV1};
pub use list_serialization::{CheckReport, TreeLists};
