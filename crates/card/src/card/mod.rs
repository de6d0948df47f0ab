//! The notification card orchestrator.
//!
//! One [`NotificationCard`] manages one event's presentation lifecycle:
//! it reads the event and its visibility from the store on every render
//! pass, derives a data-only [`CardView`], and translates mouse input
//! into local transitions (expand/collapse, menu state) or outbound
//! requests (selection, deletion, status toggle, share).
//!
//! The card owns nothing durable. `status`, `checked` and event
//! existence live in the store; the only local state is the expansion
//! flag, the menu state machine and the visibility exit transition, all
//! of which start collapsed/closed and die with the card.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::actors::{Actor, event_actors};
use crate::event::{EventId, Status};
use crate::menu::{ActionMenu, MenuState};
use crate::ports::{
	EventMutations, EventStore, LinkOpener, MetadataFormatter, UserDirectory,
};
use crate::runtime;
use crate::share::{SocialPlatform, share_url};
use crate::style::SeverityStyle;
use crate::timefmt::format_timestamp;
use crate::truncate::{MAX_DESCRIPTION_LEN, can_truncate, truncate};
use crate::widget::CardLayout;

/// How long a card takes to slide out once the store hides its event.
const EXIT_DURATION: Duration = Duration::from_millis(250);

/// Per-card presentation settings.
#[derive(Debug, Clone)]
pub struct CardConfig {
	/// Summary-row description bound, in grapheme clusters.
	pub max_description_len: usize,
}

impl Default for CardConfig {
	fn default() -> Self {
		Self {
			max_description_len: MAX_DESCRIPTION_LEN,
		}
	}
}

/// Collaborators injected into a card.
#[derive(Clone)]
pub struct CardPorts {
	pub store: Arc<dyn EventStore>,
	pub users: Arc<dyn UserDirectory>,
	pub mutations: Arc<dyn EventMutations>,
	pub links: Arc<dyn LinkOpener>,
	pub metadata: Arc<dyn MetadataFormatter>,
}

/// Exit-transition phase for a card whose event left visibility.
///
/// Appearance is instant; only the exit animates, and once it finishes
/// the card unmounts ([`NotificationCard::view`] returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum VisibilityPhase {
	#[default]
	Shown,
	Leaving {
		progress: f32,
	},
	Hidden,
}

#[derive(Debug, Clone, Copy, Default)]
struct VisibilityTransition {
	phase: VisibilityPhase,
}

impl VisibilityTransition {
	fn advance(&mut self, visible: bool, delta: Duration) {
		if visible {
			self.phase = VisibilityPhase::Shown;
			return;
		}
		self.phase = match self.phase {
			VisibilityPhase::Shown => VisibilityPhase::Leaving { progress: 0.0 },
			VisibilityPhase::Leaving { progress } => {
				let step = delta.as_secs_f32() / EXIT_DURATION.as_secs_f32();
				let progress = (progress + step).min(1.0);
				if progress >= 1.0 {
					VisibilityPhase::Hidden
				} else {
					VisibilityPhase::Leaving { progress }
				}
			}
			VisibilityPhase::Hidden => VisibilityPhase::Hidden,
		};
	}

	fn exit_progress(&self) -> Option<f32> {
		match self.phase {
			VisibilityPhase::Leaving { progress } => Some(progress),
			VisibilityPhase::Shown | VisibilityPhase::Hidden => None,
		}
	}

	fn is_hidden(&self) -> bool {
		self.phase == VisibilityPhase::Hidden
	}
}

/// Data-only render plan for one card frame, consumed by
/// [`NotificationCardWidget`].
///
/// [`NotificationCardWidget`]: crate::widget::NotificationCardWidget
#[derive(Debug, Clone)]
pub struct CardView {
	pub severity: &'static SeverityStyle,
	pub status: Status,
	pub checked: bool,
	/// Description already bounded for the summary row.
	pub description: String,
	/// Whether the full text is longer than what the summary shows.
	pub description_truncated: bool,
	pub timestamp: String,
	pub actors: Vec<Actor>,
	pub expanded: bool,
	/// Detail-row body lines; empty unless expanded.
	pub metadata: Vec<String>,
	pub menu: MenuState,
	/// Exit-transition progress in `0.0..1.0` while the event is leaving
	/// visibility.
	pub exit: Option<f32>,
}

/// What a mouse event did to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardResponse {
	Ignored,
	ExpandToggled,
	CheckToggled,
	MenuOpened,
	MenuClosed,
	SharePanelToggled,
	ShareOpened(SocialPlatform),
	DeleteRequested,
	StatusToggleRequested,
}

/// Presentation and interaction state for a single notification event.
pub struct NotificationCard {
	event_id: EventId,
	config: CardConfig,
	ports: CardPorts,
	expanded: bool,
	menu: ActionMenu,
	visibility: VisibilityTransition,
}

impl NotificationCard {
	/// Creates a card for `event_id` with default settings. Local state
	/// starts collapsed and closed.
	pub fn new(event_id: impl Into<EventId>, ports: CardPorts) -> Self {
		Self::with_config(event_id, ports, CardConfig::default())
	}

	pub fn with_config(event_id: impl Into<EventId>, ports: CardPorts, config: CardConfig) -> Self {
		Self {
			event_id: event_id.into(),
			config,
			ports,
			expanded: false,
			menu: ActionMenu::new(),
			visibility: VisibilityTransition::default(),
		}
	}

	pub fn event_id(&self) -> &EventId {
		&self.event_id
	}

	pub fn is_expanded(&self) -> bool {
		self.expanded
	}

	pub fn menu(&self) -> MenuState {
		self.menu.state()
	}

	/// Advances the exit transition against the store's current
	/// visibility verdict. Call once per frame.
	pub fn tick(&mut self, delta: Duration) {
		let visible = self.ports.store.is_event_visible(&self.event_id);
		self.visibility.advance(visible, delta);
	}

	/// Derives the render plan for this frame, or `None` once the card
	/// has unmounted (event gone, or exit transition finished).
	///
	/// Everything is re-read from the collaborators on each call; nothing
	/// is cached across passes.
	pub fn view(&self, now: DateTime<Utc>) -> Option<CardView> {
		if self.visibility.is_hidden() {
			return None;
		}
		let event = self.ports.store.event_by_id(&self.event_id)?;
		let user = self
			.ports
			.users
			.user_by_id(event.user_id.as_deref().unwrap_or(""));
		let metadata = if self.expanded {
			self.ports.metadata.format(&event)
		} else {
			Vec::new()
		};
		Some(CardView {
			severity: SeverityStyle::resolve(event.severity),
			status: event.status,
			checked: event.checked,
			description: truncate(&event.description, self.config.max_description_len).into_owned(),
			description_truncated: can_truncate(&event.description, self.config.max_description_len),
			timestamp: format_timestamp(event.created_at, now),
			actors: event_actors(&event, &user),
			expanded: self.expanded,
			metadata,
			menu: self.menu.state(),
			exit: self.visibility.exit_progress(),
		})
	}

	/// [`view`](Self::view) against the current wall clock.
	pub fn view_now(&self) -> Option<CardView> {
		self.view(Utc::now())
	}

	/// Routes a mouse event through the hit-region map of the frame it
	/// was received against.
	///
	/// Containment precedence doubles as propagation isolation: the open
	/// menu owns every click first, then the checkbox, then the menu
	/// trigger, and only then does the summary row toggle expansion. A
	/// click can therefore never both select and expand, or both open the
	/// menu and expand.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &CardLayout) -> CardResponse {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return CardResponse::Ignored;
		}
		let at = Position::new(mouse.column, mouse.row);

		if let Some(menu) = &layout.menu {
			if menu.panel.contains(at) {
				if let Some(targets) = &menu.share_targets {
					for (platform, rect) in SocialPlatform::ALL.iter().zip(targets) {
						if rect.contains(at) {
							self.share(*platform);
							return CardResponse::ShareOpened(*platform);
						}
					}
				}
				if menu.share_item.contains(at) {
					self.menu.toggle_share();
					return CardResponse::SharePanelToggled;
				}
				if menu.delete_item.contains(at) {
					self.delete();
					return CardResponse::DeleteRequested;
				}
				if menu.status_item.contains(at) {
					self.toggle_status();
					return CardResponse::StatusToggleRequested;
				}
				// Popup chrome swallows the click.
				return CardResponse::Ignored;
			}
			// Anywhere else is the backdrop.
			self.menu.close();
			return CardResponse::MenuClosed;
		}

		if layout.checkbox.contains(at) {
			return self.toggle_checked();
		}
		if layout.menu_trigger.contains(at) {
			let anchor = Position::new(layout.menu_trigger.x, layout.menu_trigger.bottom());
			self.menu.open(anchor);
			return CardResponse::MenuOpened;
		}
		if layout.summary.contains(at) {
			self.expanded = !self.expanded;
			tracing::trace!(expanded = self.expanded, "card.expand_toggle");
			return CardResponse::ExpandToggled;
		}
		CardResponse::Ignored
	}

	/// Requests deletion of the event. Fire-and-forget: local state is
	/// untouched, and the card unmounts when the store drops the event.
	pub fn delete(&self) {
		let mutations = Arc::clone(&self.ports.mutations);
		let id = self.event_id.clone();
		runtime::spawn_detached(async move {
			if let Err(err) = mutations.delete_event(id).await {
				tracing::debug!(%err, "delete request failed");
			}
		});
	}

	/// Requests the complement of the read state last observed in the
	/// store. Fire-and-forget; the next render pass picks up whatever the
	/// store says.
	pub fn toggle_status(&self) {
		let Some(event) = self.ports.store.event_by_id(&self.event_id) else {
			return;
		};
		let next = event.status.complement();
		let mutations = Arc::clone(&self.ports.mutations);
		let id = self.event_id.clone();
		runtime::spawn_detached(async move {
			if let Err(err) = mutations.update_status(id, next).await {
				tracing::debug!(%err, "status update failed");
			}
		});
	}

	/// Opens the share link for `platform`, quoting the event
	/// description. No response is consumed.
	pub fn share(&self, platform: SocialPlatform) {
		let Some(event) = self.ports.store.event_by_id(&self.event_id) else {
			return;
		};
		self.ports
			.links
			.open_url(&share_url(platform, &event.description));
	}

	fn toggle_checked(&self) -> CardResponse {
		let Some(event) = self.ports.store.event_by_id(&self.event_id) else {
			return CardResponse::Ignored;
		};
		self.ports
			.store
			.set_event_checked(&self.event_id, !event.checked);
		CardResponse::CheckToggled
	}
}
