//! Action menu state machine.
//!
//! The contextual menu has three states: closed, open with the share
//! panel tucked away, and open with the share panel unfolded. Modeling
//! the share flag inside the `Open` variant makes "share open while the
//! menu is closed" unrepresentable, and reopening always starts with the
//! panel tucked away.

use ratatui::layout::Position;

/// Menu state, with the popup anchor recorded on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
	#[default]
	Closed,
	Open { anchor: Position, share_open: bool },
}

/// Transition surface over [`MenuState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionMenu {
	state: MenuState,
}

impl ActionMenu {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> MenuState {
		self.state
	}

	pub fn is_open(&self) -> bool {
		matches!(self.state, MenuState::Open { .. })
	}

	pub fn share_open(&self) -> bool {
		matches!(
			self.state,
			MenuState::Open {
				share_open: true,
				..
			}
		)
	}

	/// Opens the menu anchored at `anchor`, share panel tucked away.
	pub fn open(&mut self, anchor: Position) {
		tracing::trace!(x = anchor.x, y = anchor.y, "menu.open");
		self.state = MenuState::Open {
			anchor,
			share_open: false,
		};
	}

	/// Closes the menu from any open state.
	pub fn close(&mut self) {
		tracing::trace!("menu.close");
		self.state = MenuState::Closed;
	}

	/// Folds or unfolds the share panel; ignored while the menu is closed.
	pub fn toggle_share(&mut self) {
		match &mut self.state {
			MenuState::Open { share_open, .. } => *share_open = !*share_open,
			MenuState::Closed => tracing::trace!("menu.toggle_share ignored while closed"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ANCHOR: Position = Position::new(10, 4);

	#[test]
	fn opening_records_the_anchor_with_share_tucked_away() {
		let mut menu = ActionMenu::new();
		menu.open(ANCHOR);
		assert_eq!(
			menu.state(),
			MenuState::Open {
				anchor: ANCHOR,
				share_open: false
			}
		);
	}

	#[test]
	fn share_panel_toggles_while_open() {
		let mut menu = ActionMenu::new();
		menu.open(ANCHOR);
		menu.toggle_share();
		assert!(menu.share_open());
		menu.toggle_share();
		assert!(!menu.share_open());
	}

	#[test]
	fn closing_works_from_either_open_state() {
		let mut menu = ActionMenu::new();
		menu.open(ANCHOR);
		menu.toggle_share();
		menu.close();
		assert_eq!(menu.state(), MenuState::Closed);
	}

	#[test]
	fn share_toggle_is_inert_while_closed() {
		let mut menu = ActionMenu::new();
		menu.toggle_share();
		assert_eq!(menu.state(), MenuState::Closed);
	}

	#[test]
	fn reopening_starts_with_the_share_panel_tucked_away() {
		let mut menu = ActionMenu::new();
		menu.open(ANCHOR);
		menu.toggle_share();
		menu.close();
		menu.open(Position::new(2, 2));
		assert!(!menu.share_open());
	}
}
