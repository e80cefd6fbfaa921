//! checkbox-tree: state engine for hierarchical multi-select checkbox trees.
//!
//! A nested node tree is flattened once into an identifier-addressable table.
//! Check/uncheck, expand/collapse and text filtering then operate on that
//! table and keep parent/child state consistent with the active check model.
//! Rendering is left to the host; it reads node attributes and the serialized
//! checked/expanded lists back out of the engine.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TreeEngineConfig, TreeStateEngine};
pub use error::{TreeError, TreeResult};
