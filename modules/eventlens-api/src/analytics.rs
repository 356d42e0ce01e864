//! Pure aggregation over upstream event/guest records. No I/O here; the
//! fan-out that feeds these functions lives in `source`.

use supergraph_client::{EventEntry, GuestEntry};

use crate::graphql::types::{EventAnalytics, EventSummary};

/// Build the per-event summary from its guest list.
pub fn summarize_event(entry: &EventEntry, guests: &[GuestEntry]) -> EventSummary {
    let attendee_count = guests.len() as u32;
    let checked_in_count = guests.iter().filter(|g| g.guest.is_checked_in()).count() as u32;

    EventSummary {
        id: entry.event.id.clone(),
        name: entry.event.name.clone(),
        date: entry.event.start_at,
        attendee_count,
        checked_in_count,
        location: entry.event.location(),
    }
}

/// Reduce per-event summaries into the aggregate, preserving their
/// order. Zero-denominator cases produce 0, never NaN.
pub fn aggregate(summaries: Vec<EventSummary>) -> EventAnalytics {
    let total_events = summaries.len() as u32;
    let total_attendees: u32 = summaries.iter().map(|e| e.attendee_count).sum();
    let total_checked_in: u32 = summaries.iter().map(|e| e.checked_in_count).sum();

    EventAnalytics {
        total_events,
        total_attendees,
        average_attendees_per_event: if total_events > 0 {
            f64::from(total_attendees) / f64::from(total_events)
        } else {
            0.0
        },
        check_in_rate: if total_attendees > 0 {
            f64::from(total_checked_in) / f64::from(total_attendees)
        } else {
            0.0
        },
        events: summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use supergraph_client::{EventRecord, GeoAddress, GuestRecord};

    fn entry(id: &str, name: &str, geo: Option<GeoAddress>) -> EventEntry {
        EventEntry {
            api_id: id.to_string(),
            event: EventRecord {
                id: id.to_string(),
                name: name.to_string(),
                start_at: Utc::now(),
                geo_address_json: geo,
            },
        }
    }

    fn guest(checked_in_at: Option<&str>) -> GuestEntry {
        GuestEntry {
            guest: GuestRecord {
                id: "g".to_string(),
                checked_in_at: checked_in_at.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_summarize_counts_checked_in_guests() {
        let guests = vec![
            guest(Some("2026-03-01T19:05:00Z")),
            guest(None),
            guest(Some("2026-03-01T19:40:00Z")),
        ];
        let summary = summarize_event(&entry("evt-1", "Demo Night", None), &guests);

        assert_eq!(summary.attendee_count, 3);
        assert_eq!(summary.checked_in_count, 2);
        assert!(summary.checked_in_count <= summary.attendee_count);
    }

    #[test]
    fn test_summarize_ignores_empty_check_in_timestamps() {
        let guests = vec![guest(Some("")), guest(Some("2026-03-01T19:05:00Z"))];
        let summary = summarize_event(&entry("evt-1", "Demo Night", None), &guests);

        assert_eq!(summary.checked_in_count, 1);
    }

    #[test]
    fn test_summarize_prefers_city_state_location() {
        let geo = GeoAddress {
            city_state: Some("Austin, TX".to_string()),
            full_address: Some("123 Main St, Austin, TX".to_string()),
        };
        let summary = summarize_event(&entry("evt-1", "Demo Night", Some(geo)), &[]);

        assert_eq!(summary.location.as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn test_summarize_falls_back_to_full_address() {
        let geo = GeoAddress {
            city_state: None,
            full_address: Some("123 Main St, Austin, TX".to_string()),
        };
        let summary = summarize_event(&entry("evt-1", "Demo Night", Some(geo)), &[]);

        assert_eq!(summary.location.as_deref(), Some("123 Main St, Austin, TX"));
    }

    #[test]
    fn test_aggregate_empty_is_all_zero() {
        let analytics = aggregate(Vec::new());

        assert_eq!(analytics.total_events, 0);
        assert_eq!(analytics.total_attendees, 0);
        assert_eq!(analytics.average_attendees_per_event, 0.0);
        assert_eq!(analytics.check_in_rate, 0.0);
        assert!(analytics.events.is_empty());
    }

    #[test]
    fn test_aggregate_totals_and_rates() {
        let first = summarize_event(
            &entry("evt-1", "Demo Night", None),
            &[
                guest(Some("2026-03-01T19:05:00Z")),
                guest(Some("2026-03-01T19:10:00Z")),
                guest(None),
            ],
        );
        let second = summarize_event(&entry("evt-2", "Coffee Walk", None), &[guest(None)]);

        let analytics = aggregate(vec![first, second]);

        assert_eq!(analytics.total_events, 2);
        assert_eq!(analytics.total_attendees, 4);
        assert_eq!(
            analytics.total_attendees,
            analytics.events.iter().map(|e| e.attendee_count).sum::<u32>()
        );
        assert_eq!(analytics.average_attendees_per_event, 2.0);
        assert_eq!(analytics.check_in_rate, 0.5);
        // Upstream order preserved.
        assert_eq!(analytics.events[0].id, "evt-1");
        assert_eq!(analytics.events[1].id, "evt-2");
    }

    #[test]
    fn test_aggregate_zero_attendees_has_zero_rate() {
        let summary = summarize_event(&entry("evt-1", "Ghost Town", None), &[]);
        let analytics = aggregate(vec![summary]);

        assert_eq!(analytics.total_events, 1);
        assert_eq!(analytics.average_attendees_per_event, 0.0);
        assert_eq!(analytics.check_in_rate, 0.0);
    }
}
