use std::sync::Arc;

use anyhow::Result;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html, routing::get, Router};
use tracing::info;
use tracing_subscriber::EnvFilter;

use eventlens_common::Config;
use supergraph_client::SupergraphClient;

mod analytics;
mod graphql;
mod source;

use graphql::{build_schema, ApiSchema};
use source::{AnalyticsSource, FixtureAnalytics, LiveAnalytics};

async fn graphql_handler(State(schema): State<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(async_graphql::http::GraphiQLSource::build().endpoint("/graphql").finish())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("eventlens=info".parse()?))
        .init();

    let config = Config::from_env();

    let source: Arc<dyn AnalyticsSource> = if config.use_mock_data {
        info!(path = %config.mock_data_path, "Mock data mode enabled, supergraph queries disabled");
        Arc::new(FixtureAnalytics::from_path(&config.mock_data_path)?)
    } else {
        info!(endpoint = %config.supergraph_url, "Using live supergraph data source");
        Arc::new(LiveAnalytics::new(SupergraphClient::new(
            config.supergraph_url.clone(),
        )))
    };

    let schema = build_schema(source);

    let app = Router::new()
        // GraphQL
        .route("/graphql", get(graphiql).post(graphql_handler))
        // Health check
        .route("/", get(|| async { "ok" }))
        .with_state(schema)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!("Analytics subgraph starting on {addr}");
    info!("GraphiQL IDE available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
