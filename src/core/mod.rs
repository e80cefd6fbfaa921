pub mod flat_node;
pub mod raw_node;
pub mod types;

pub use flat_node::{FlatNode, NodeKind};
pub use raw_node::{NodeData, RawNode};
pub use types::{CheckModel, NodeFlag, NodeValue};
