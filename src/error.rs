use thiserror::Error;

use crate::core::NodeValue;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("duplicate value '{value}' detected; all node values must be unique")]
    DuplicateValue { value: NodeValue },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
