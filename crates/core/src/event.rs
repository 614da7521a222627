//! Event validation: title rules, status/priority enumerations, and the
//! start/end ordering check.
//!
//! Status and priority are plain string enumerations set directly by the
//! client; there is no server-driven transition logic.

use crate::types::Timestamp;
use crate::validation::{rules, FieldErrors};

/// Maximum length for an event title.
pub const MAX_TITLE_LEN: usize = 120;

/// Event has not happened yet.
pub const STATUS_PLANNED: &str = "planned";

/// Event took place.
pub const STATUS_DONE: &str = "done";

/// Event was called off.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PLANNED, STATUS_DONE, STATUS_CANCELLED];

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// All valid priority values.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Fields of an event payload relevant to validation.
///
/// For updates the caller resolves each field from the incoming payload,
/// falling back to the stored row, so the start/end ordering check always
/// sees the effective pair rather than treating absent fields as unset.
#[derive(Debug, Default)]
pub struct EventPayload<'a> {
    pub title: Option<&'a str>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
}

/// Validate an event payload, collecting every error.
///
/// Field-level checks run first; the cross-field ordering rule only runs
/// when both timestamps resolved. A zero-duration event (`start == end`) is
/// accepted.
///
/// Returns the trimmed title when one was supplied and passed its checks.
pub fn validate(payload: &EventPayload<'_>, errors: &mut FieldErrors) -> Option<String> {
    let title = payload
        .title
        .and_then(|title| rules::titled_name("title", title, MAX_TITLE_LEN, errors));

    if let Some(status) = payload.status {
        rules::one_of("status", status, VALID_STATUSES, errors);
    }
    if let Some(priority) = payload.priority {
        rules::one_of("priority", priority, VALID_PRIORITIES, errors);
    }

    if let (Some(start), Some(end)) = (payload.start_at, payload.end_at) {
        if end < start {
            errors.add("end", "end cannot be earlier than start");
        }
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, 10, hour, 0, 0).unwrap()
    }

    fn validate_ok(payload: EventPayload<'_>) -> Result<Option<String>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = validate(&payload, &mut errors);
        errors.into_result().map(|()| title)
    }

    #[test]
    fn accepts_well_formed_event() {
        let title = validate_ok(EventPayload {
            title: Some(" Kolokwium "),
            start_at: Some(ts(9)),
            end_at: Some(ts(11)),
            status: Some(STATUS_PLANNED),
            priority: Some(PRIORITY_HIGH),
        })
        .unwrap();
        assert_eq!(title.as_deref(), Some("Kolokwium"));
    }

    #[test]
    fn end_before_start_fails_on_end_field() {
        let err = validate_ok(EventPayload {
            title: Some("Kolokwium"),
            start_at: Some(ts(10)),
            end_at: Some(ts(9)),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.has("end"));
        assert!(!err.has("start"));
    }

    #[test]
    fn zero_duration_event_is_accepted() {
        assert!(validate_ok(EventPayload {
            title: Some("Kolokwium"),
            start_at: Some(ts(10)),
            end_at: Some(ts(10)),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn ordering_check_skipped_when_either_timestamp_missing() {
        // Title-only partial update where the caller had no stored row to
        // fall back on; nothing to compare, so no error.
        assert!(validate_ok(EventPayload {
            title: Some("Nowy tytuł"),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn unknown_status_and_priority_are_rejected() {
        let err = validate_ok(EventPayload {
            title: Some("Kolokwium"),
            status: Some("archived"),
            priority: Some("urgent"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.has("status"));
        assert!(err.has("priority"));
    }

    #[test]
    fn all_errors_are_collected_in_one_pass() {
        let err = validate_ok(EventPayload {
            title: Some("  "),
            start_at: Some(ts(10)),
            end_at: Some(ts(9)),
            status: Some("nope"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.has("title"));
        assert!(err.has("status"));
        assert!(err.has("end"));
    }
}
