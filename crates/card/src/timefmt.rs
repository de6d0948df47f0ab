//! Timestamp presentation.
//!
//! Recent events read as a humanized relative duration; anything a day or
//! older switches to an absolute calendar date. The reference instant is
//! injected by the caller so rendering is deterministic under test.

use chrono::{DateTime, Duration, Utc};
use chrono_humanize::{Accuracy, HumanTime, Tense};

/// Age in hours at which the display switches from relative to absolute,
/// inclusive on the absolute side.
const ABSOLUTE_AFTER_HOURS: i64 = 24;

/// Formats an event creation time relative to `now`.
///
/// Under 24 hours old: "5 minutes ago". At 24 hours and beyond:
/// "Aug 05, 2026".
pub fn format_timestamp(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	if now.signed_duration_since(created_at) >= Duration::hours(ABSOLUTE_AFTER_HOURS) {
		created_at.format("%b %d, %Y").to_string()
	} else {
		HumanTime::from(created_at.signed_duration_since(now))
			.to_text_en(Accuracy::Rough, Tense::Past)
	}
}
