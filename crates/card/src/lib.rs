//! # Corkboard card
//!
//! Interactive notification-center card for [ratatui](https://ratatui.rs)
//! terminal applications.
//!
//! One [`NotificationCard`] owns the presentation lifecycle of a single
//! notification event: severity coding, read/unread emphasis,
//! expand/collapse of the detail row, and the contextual action menu
//! (share, delete, read-state toggle). Everything durable lives outside
//! the card: the event store, the mutation transport, the user-profile
//! directory and the link opener are injected as traits through
//! [`CardPorts`], so the card itself is a pure state machine over what
//! those collaborators report.
//!
//! ## Features
//!
//! - **Severity styling**: icon + accent color per severity tag, with
//!   unknown tags degrading to the info style
//! - **Humanized timestamps**: "5 minutes ago" under a day, calendar
//!   dates beyond
//! - **Actor stack**: human and system avatars derived per render pass;
//!   the human appears only once their profile lookup resolves
//! - **Action menu**: anchored popup with share panel, delete and
//!   read-state toggle, modeled as a tagged-enum state machine
//! - **Propagation isolation**: one hit-region map drives both painting
//!   and mouse dispatch, so the checkbox and menu can never leak a click
//!   into the row's expand toggle
//! - **Exit transition**: cards slide out over 250 ms once the store
//!   hides their event, then unmount
//!
//! ## Quick start
//!
//! The leaf pieces work standalone:
//!
//! ```
//! use corkboard_card::menu::ActionMenu;
//! use corkboard_card::truncate::{MAX_DESCRIPTION_LEN, can_truncate, truncate};
//! use corkboard_card::{Position, Severity, SeverityStyle};
//!
//! // Unknown severities never fail; they render as info.
//! let style = SeverityStyle::resolve(Severity::Unknown);
//! assert_eq!(style, SeverityStyle::resolve(Severity::Info));
//!
//! // Summary descriptions are bounded at 45 visible clusters.
//! let text = "x".repeat(60);
//! assert!(can_truncate(&text, MAX_DESCRIPTION_LEN));
//! assert!(truncate(&text, MAX_DESCRIPTION_LEN).ends_with('…'));
//!
//! // The menu is a three-state machine; share state cannot outlive it.
//! let mut menu = ActionMenu::new();
//! menu.open(Position::new(10, 2));
//! menu.toggle_share();
//! menu.close();
//! menu.open(Position::new(10, 2));
//! assert!(!menu.share_open());
//! ```
//!
//! Wiring a full card means implementing the [`ports`] traits against
//! your store and transport, building a [`NotificationCard`] per visible
//! event, and each frame: `tick` it, take its [`CardView`], render a
//! [`NotificationCardWidget`], and feed mouse events back through the
//! [`CardLayout`] you rendered with.

pub mod actors;
pub mod card;
pub mod event;
pub mod menu;
pub mod ports;
pub mod share;
pub mod style;
pub mod timefmt;
pub mod truncate;
pub mod widget;

mod runtime;

pub use actors::{Actor, event_actors};
pub use card::{CardConfig, CardPorts, CardResponse, CardView, NotificationCard};
pub use event::{Event, EventId, Severity, Status, UserProfile};
pub use menu::{ActionMenu, MenuState};
pub use ports::{
	EventMutations, EventStore, LinkOpener, Lookup, MetadataFormatter, MutationError,
	UserDirectory,
};
pub use share::{SHARE_PAGE_URL, SocialPlatform, share_url};
pub use style::SeverityStyle;
pub use timefmt::format_timestamp;
pub use truncate::{MAX_DESCRIPTION_LEN, can_truncate, truncate};
pub use widget::{CardLayout, MenuLayout, NotificationCardWidget, card_height};

// Re-export the position type used for menu anchors and hit testing.
pub use ratatui::layout::Position;
