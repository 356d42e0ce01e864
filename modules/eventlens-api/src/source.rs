use std::path::Path;

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{debug, info};

use eventlens_common::AnalyticsError;
use supergraph_client::SupergraphClient;

use crate::analytics::{aggregate, summarize_event};
use crate::graphql::types::EventAnalytics;

/// The data-source capability behind the `eventAnalytics` field.
/// Selected once at startup: live supergraph fan-out, or a static
/// fixture for demo/testing without an upstream.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn event_analytics(
        &self,
        calendar_id: Option<String>,
        limit: i32,
    ) -> Result<EventAnalytics, AnalyticsError>;
}

/// Live implementation: one event-listing query, then one guest-list
/// query per event, issued concurrently and joined before reduction.
pub struct LiveAnalytics {
    client: SupergraphClient,
}

impl LiveAnalytics {
    pub fn new(client: SupergraphClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsSource for LiveAnalytics {
    async fn event_analytics(
        &self,
        calendar_id: Option<String>,
        limit: i32,
    ) -> Result<EventAnalytics, AnalyticsError> {
        let entries = self
            .client
            .list_events(calendar_id.as_deref(), limit)
            .await?;

        if entries.is_empty() {
            debug!("No events returned, responding with empty analytics");
            return Ok(EventAnalytics::empty());
        }

        info!(events = entries.len(), "Fetching guest lists");

        // Fail-fast join: the first failed guest query fails the whole
        // call, with no partial aggregation.
        let summaries = try_join_all(entries.iter().map(|entry| async move {
            let guests = self.client.event_guests(&entry.event.id).await?;
            Ok::<_, AnalyticsError>(summarize_event(entry, &guests))
        }))
        .await?;

        Ok(aggregate(summaries))
    }
}

/// On-disk shape of the mock fixture document.
#[derive(serde::Deserialize)]
struct FixtureFile {
    #[serde(rename = "eventAnalytics")]
    event_analytics: EventAnalytics,
}

/// Fixture-backed implementation. Returns a pre-recorded analytics
/// document verbatim, ignoring both arguments, and never touches the
/// network.
#[derive(Debug)]
pub struct FixtureAnalytics {
    analytics: EventAnalytics,
}

impl FixtureAnalytics {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AnalyticsError::Fixture(format!("{}: {e}", path.display())))?;
        let file: FixtureFile = serde_json::from_str(&raw)
            .map_err(|e| AnalyticsError::Fixture(format!("{}: {e}", path.display())))?;
        Ok(Self {
            analytics: file.event_analytics,
        })
    }
}

#[async_trait]
impl AnalyticsSource for FixtureAnalytics {
    async fn event_analytics(
        &self,
        _calendar_id: Option<String>,
        _limit: i32,
    ) -> Result<EventAnalytics, AnalyticsError> {
        Ok(self.analytics.clone())
    }
}
