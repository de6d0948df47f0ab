//! Collaborator contracts.
//!
//! The card never owns event state or performs I/O itself; everything it
//! needs from the outside world comes through these traits. Hosts inject
//! implementations through [`CardPorts`]; tests inject recording mocks.
//!
//! [`CardPorts`]: crate::card::CardPorts

use async_trait::async_trait;
use thiserror::Error;

use crate::event::{Event, EventId, Status, UserProfile};

/// Point-in-time snapshot of an asynchronous lookup.
///
/// Collaborators resolve lookups on their own schedule; the card reads
/// the current snapshot on each render pass and must tolerate `Pending`
/// indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
	/// Not resolved yet; may stay this way forever.
	Pending,
	/// Resolved successfully.
	Ready(T),
	/// Resolution failed; retrying is the collaborator's decision.
	Failed,
}

impl<T> Default for Lookup<T> {
	fn default() -> Self {
		Self::Pending
	}
}

impl<T> Lookup<T> {
	pub fn ready(&self) -> Option<&T> {
		match self {
			Self::Ready(value) => Some(value),
			Self::Pending | Self::Failed => None,
		}
	}
}

/// Reactive query surface of the application event store.
///
/// The store is the single source of truth for event existence, `status`
/// and `checked`; the card re-queries on every render pass and keeps no
/// snapshot across passes.
pub trait EventStore: Send + Sync {
	/// Current state of one event, or `None` once it is gone.
	fn event_by_id(&self, id: &EventId) -> Option<Event>;

	/// Whether the event passes the store's visibility filters.
	fn is_event_visible(&self, id: &EventId) -> bool;

	/// Requests a selection-flag change. Fire-and-forget: the card relies
	/// on the store updating and the next render pass observing it.
	fn set_event_checked(&self, id: &EventId, checked: bool);
}

/// Failure surfaced by the mutation transport.
///
/// The card logs these at debug level and moves on; user-facing failure
/// handling and any optimistic-state rollback belong to the transport.
#[derive(Debug, Error)]
pub enum MutationError {
	#[error("backend rejected the request: {0}")]
	Rejected(String),
	#[error("transport failure: {0}")]
	Transport(String),
}

/// Mutation requests against the notification backend.
///
/// Neither operation is assumed idempotent; duplicate clicks may issue
/// duplicate requests unless the implementation deduplicates.
#[async_trait]
pub trait EventMutations: Send + Sync {
	/// Deletes one event.
	async fn delete_event(&self, id: EventId) -> Result<(), MutationError>;

	/// Sets an event's read state. The card only ever requests the
	/// complement of the state it last observed.
	async fn update_status(&self, id: EventId, status: Status) -> Result<(), MutationError>;
}

/// User-profile directory.
pub trait UserDirectory: Send + Sync {
	/// Current snapshot of the profile lookup for `id`.
	///
	/// The empty id is a valid no-op query; it never yields a profile.
	fn user_by_id(&self, id: &str) -> Lookup<UserProfile>;
}

/// Opens an external link (share targets). Fire-and-forget; no response
/// is consumed.
pub trait LinkOpener: Send + Sync {
	fn open_url(&self, url: &str);
}

/// Formats the structured metadata shown in the expanded detail row.
pub trait MetadataFormatter: Send + Sync {
	/// Detail-row body lines for an event.
	fn format(&self, event: &Event) -> Vec<String>;
}
