use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Request/response envelope ---

/// Body of a GraphQL-over-HTTP POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Response envelope returned by the supergraph.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlErrorPayload>>,
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorPayload {
    pub message: String,
}

// --- Event listing ---

/// `data` payload of the event-listing query.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsData {
    pub events: Option<EventsConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConnection {
    pub entries: Option<Vec<EventEntry>>,
}

/// One event entry as returned by the supergraph.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntry {
    #[serde(rename = "apiId")]
    pub api_id: String,
    pub event: EventRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "startAt")]
    pub start_at: DateTime<Utc>,
    #[serde(rename = "geoAddressJson")]
    pub geo_address_json: Option<GeoAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoAddress {
    #[serde(rename = "cityState")]
    pub city_state: Option<String>,
    #[serde(rename = "fullAddress")]
    pub full_address: Option<String>,
}

impl EventRecord {
    /// Display location, preferring the short city/state form over the
    /// full street address.
    pub fn location(&self) -> Option<String> {
        let geo = self.geo_address_json.as_ref()?;
        geo.city_state.clone().or_else(|| geo.full_address.clone())
    }
}

// --- Guest listing ---

/// `data` payload of the guest-listing query.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestsData {
    #[serde(rename = "eventGuests")]
    pub event_guests: Option<GuestsConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestsConnection {
    pub entries: Option<Vec<GuestEntry>>,
}

/// One guest entry from an event's guest list.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestEntry {
    pub guest: GuestRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestRecord {
    pub id: String,
    #[serde(rename = "checkedInAt")]
    pub checked_in_at: Option<String>,
}

impl GuestRecord {
    /// A guest counts as checked in when the timestamp is present and
    /// non-empty.
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.as_deref().is_some_and(|t| !t.is_empty())
    }
}
