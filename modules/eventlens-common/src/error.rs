use thiserror::Error;

use supergraph_client::SupergraphError;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Upstream query failed: {0}")]
    Upstream(#[from] SupergraphError),

    #[error("Fixture error: {0}")]
    Fixture(String),
}
