use thiserror::Error;

pub type Result<T> = std::result::Result<T, SupergraphError>;

#[derive(Debug, Error)]
pub enum SupergraphError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Supergraph query failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL errors: {0}")]
    GraphQL(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SupergraphError {
    fn from(err: reqwest::Error) -> Self {
        SupergraphError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SupergraphError {
    fn from(err: serde_json::Error) -> Self {
        SupergraphError::Parse(err.to_string())
    }
}
