//! Notification event model.
//!
//! Events are owned by the application event store and arrive from the
//! backend already deserialized; this crate reads them through the
//! [`EventStore`] port and only ever asks the outside world to change
//! `status` and `checked`.
//!
//! [`EventStore`]: crate::ports::EventStore

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable, opaque identifier for a notification event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EventId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for EventId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

impl From<String> for EventId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Severity tag carried by an event.
///
/// Backends may emit tags this crate has never heard of; those decode to
/// [`Severity::Unknown`] and render with the info styling rather than
/// failing the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	/// Informational message (default).
	#[default]
	Info,

	/// Successful operation.
	Success,

	/// Warning message.
	Warning,

	/// Error message.
	Error,

	/// Any tag not in the table above.
	#[serde(other)]
	Unknown,
}

/// Read state of an event, owned and persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Read,
	Unread,
}

impl Status {
	/// The opposite read state.
	///
	/// Status changes requested by the card are always the complement of
	/// the current state; arbitrary assignment is not part of the surface.
	pub fn complement(self) -> Self {
		match self {
			Self::Read => Self::Unread,
			Self::Unread => Self::Read,
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Read => f.write_str("read"),
			Self::Unread => f.write_str("unread"),
		}
	}
}

/// A single notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
	/// Stable unique identifier.
	pub id: EventId,

	/// Free-text description, unbounded length.
	#[serde(default)]
	pub description: String,

	/// Severity tag; unknown tags degrade to info styling.
	#[serde(default)]
	pub severity: Severity,

	/// Read/unread state.
	pub status: Status,

	/// Selection flag for batch operations elsewhere in the UI.
	#[serde(default)]
	pub checked: bool,

	/// Absolute creation time, UTC.
	pub created_at: DateTime<Utc>,

	/// Originating human actor, when one exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,

	/// Originating system instance, when one exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub system_id: Option<String>,
}

/// Profile of a human actor, resolved through the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	#[serde(default)]
	pub avatar_url: String,
}

impl UserProfile {
	/// Full display name; collapses to one part when the other is empty.
	pub fn display_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
			.trim()
			.to_owned()
	}
}
