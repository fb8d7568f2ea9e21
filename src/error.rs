use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors produced while building graphs or spanning trees.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("malformed edge at index {index}: {reason}")]
    MalformedEdge { index: usize, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        GraphError::MalformedEdge {
            index,
            reason: reason.into(),
        }
    }
}
