use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};
use tracing::error;

use super::types::EventAnalytics;
use crate::source::AnalyticsSource;

pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Attendance analytics across a calendar's recent events.
    async fn event_analytics(
        &self,
        ctx: &Context<'_>,
        calendar_id: Option<ID>,
        limit: Option<i32>,
    ) -> Result<EventAnalytics> {
        let source = ctx.data_unchecked::<Arc<dyn AnalyticsSource>>();
        let limit = limit.unwrap_or(10).max(0);

        source
            .event_analytics(calendar_id.map(|id| id.0), limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching event analytics");
                async_graphql::Error::new(format!("Failed to fetch event analytics: {e}"))
            })
    }
}

pub fn build_schema(source: Arc<dyn AnalyticsSource>) -> ApiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(source)
        .finish()
}
