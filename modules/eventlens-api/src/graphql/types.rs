use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance summary for a single event, in upstream listing order.
/// Serde derives use the same camelCase shape as the GraphQL fields so
/// the mock fixture round-trips this type exactly.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub attendee_count: u32,
    pub checked_in_count: u32,
    pub location: Option<String>,
}

/// Aggregated analytics across a page of events.
#[derive(Debug, Clone, SimpleObject, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAnalytics {
    pub total_events: u32,
    pub total_attendees: u32,
    pub average_attendees_per_event: f64,
    pub check_in_rate: f64,
    pub events: Vec<EventSummary>,
}

impl EventAnalytics {
    /// The defined zero-valued response for an empty event page.
    pub fn empty() -> Self {
        Self {
            total_events: 0,
            total_attendees: 0,
            average_attendees_per_event: 0.0,
            check_in_rate: 0.0,
            events: Vec::new(),
        }
    }
}
