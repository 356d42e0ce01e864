pub mod error;
pub mod types;

pub use error::{Result, SupergraphError};
pub use types::{EventEntry, EventRecord, GeoAddress, GuestEntry, GuestRecord};

use serde::de::DeserializeOwned;
use types::{EventsData, GraphqlRequest, GraphqlResponse, GuestsData};

/// Query issued for a page of events on a calendar.
const EVENTS_QUERY: &str = r#"
query GetEvents($calendarId: ID, $limit: Int) {
  events(calendarId: $calendarId, limit: $limit) {
    entries {
      apiId
      event {
        id
        name
        startAt
        geoAddressJson {
          cityState
          fullAddress
        }
      }
    }
  }
}
"#;

/// Query issued for the guest list of a single event.
const GUESTS_QUERY: &str = r#"
query GetEventGuests($eventId: ID!) {
  eventGuests(eventId: $eventId) {
    entries {
      guest {
        id
        checkedInAt
      }
    }
  }
}
"#;

pub struct SupergraphClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SupergraphClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST one GraphQL query and unwrap the response envelope. A
    /// non-empty `errors` array fails the call even when `data` is
    /// present.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<Option<T>> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SupergraphError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let envelope: GraphqlResponse<T> = serde_json::from_str(&body)?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let detail = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(SupergraphError::GraphQL(detail));
            }
        }

        Ok(envelope.data)
    }

    /// List events for a calendar, capped at `limit`. An absent events
    /// container or entries list flattens to an empty page.
    pub async fn list_events(
        &self,
        calendar_id: Option<&str>,
        limit: i32,
    ) -> Result<Vec<EventEntry>> {
        tracing::debug!(calendar_id = ?calendar_id, limit, "Querying supergraph for events");
        let data: Option<EventsData> = self
            .execute(
                EVENTS_QUERY,
                serde_json::json!({ "calendarId": calendar_id, "limit": limit }),
            )
            .await?;
        Ok(data
            .and_then(|d| d.events)
            .and_then(|c| c.entries)
            .unwrap_or_default())
    }

    /// Fetch the guest list for one event. A null guest container counts
    /// as zero guests, not an error.
    pub async fn event_guests(&self, event_id: &str) -> Result<Vec<GuestEntry>> {
        tracing::debug!(event_id, "Querying supergraph for event guests");
        let data: Option<GuestsData> = self
            .execute(GUESTS_QUERY, serde_json::json!({ "eventId": event_id }))
            .await?;
        Ok(data
            .and_then(|d| d.event_guests)
            .and_then(|c| c.entries)
            .unwrap_or_default())
    }
}
