use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint of the upstream supergraph serving raw event/guest data.
    pub supergraph_url: String,

    // Web server
    pub api_host: String,
    pub api_port: u16,

    /// When set, the server answers from a pre-recorded fixture instead
    /// of querying the supergraph.
    pub use_mock_data: bool,
    pub mock_data_path: String,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            supergraph_url: env::var("SUPERGRAPH_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "4001".to_string())
                .parse()
                .expect("API_PORT must be a number"),
            use_mock_data: env::var("USE_MOCK_DATA")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            mock_data_path: env::var("MOCK_DATA_PATH")
                .unwrap_or_else(|_| "fixtures/mock-analytics.json".to_string()),
        }
    }
}
