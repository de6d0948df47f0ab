//! Actor derivation for the avatar stack.
//!
//! Actors are rebuilt from the event on every render pass and never
//! persisted. An event carries at most two: the originating human (once
//! their profile has resolved) and the originating system instance.

use crate::event::{Event, UserProfile};
use crate::ports::Lookup;

/// Display name used for the system actor.
pub const SYSTEM_ACTOR_NAME: &str = "Corkboard";

/// Avatar image for the system actor, for hosts that can show one.
pub const SYSTEM_AVATAR_URL: &str = "https://corkboard.dev/logo.png";

/// A human or system entity associated with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
	pub name: String,
	pub avatar_url: String,
	pub tooltip: String,
}

/// Derives the ordered actor list for an event.
///
/// The human actor appears only when `user_id` is set and the directory
/// lookup has resolved; a pending or failed lookup contributes nothing
/// rather than a placeholder. The system actor appears whenever
/// `system_id` is set. Human first, system second, empty is valid.
pub fn event_actors(event: &Event, user: &Lookup<UserProfile>) -> Vec<Actor> {
	let mut actors = Vec::with_capacity(2);

	if event.user_id.is_some() {
		if let Lookup::Ready(profile) = user {
			let name = profile.display_name();
			actors.push(Actor {
				tooltip: name.clone(),
				avatar_url: profile.avatar_url.clone(),
				name,
			});
		}
	}

	if let Some(system_id) = &event.system_id {
		actors.push(Actor {
			name: SYSTEM_ACTOR_NAME.to_owned(),
			avatar_url: SYSTEM_AVATAR_URL.to_owned(),
			tooltip: format!("System ID: {system_id}"),
		});
	}

	actors
}
