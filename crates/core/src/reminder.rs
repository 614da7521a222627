//! Reminder validation.
//!
//! A reminder is inert data: nothing dispatches it, the `sent` flag is a
//! stored boolean. The only business rule is that a reminder cannot fire
//! after its event has ended.

use crate::types::Timestamp;
use crate::validation::{rules, FieldErrors};

/// Maximum length for a reminder message.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Fields of a reminder payload relevant to validation.
///
/// `remind_at` and `event_end` are resolved by the caller (payload value or
/// stored value on update; the end of the resolved target event). The wire
/// name of `remind_at` is `when`, which is also the error key.
#[derive(Debug, Default)]
pub struct ReminderPayload<'a> {
    pub message: Option<&'a str>,
    pub remind_at: Option<Timestamp>,
    pub event_end: Option<Timestamp>,
}

/// Validate a reminder payload, collecting every error.
///
/// The remind-after-end check only runs when both the reminder time and the
/// event end resolved; a reminder exactly at the event end is accepted.
pub fn validate(payload: &ReminderPayload<'_>, errors: &mut FieldErrors) {
    if let Some(message) = payload.message {
        rules::max_chars("message", message, MAX_MESSAGE_LEN, errors);
    }

    if let (Some(remind_at), Some(event_end)) = (payload.remind_at, payload.event_end) {
        if remind_at > event_end {
            errors.add("when", "reminder cannot be set after the event ends");
        }
    }
}
