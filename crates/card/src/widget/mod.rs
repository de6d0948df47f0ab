//! Ratatui rendering for a [`CardView`].
//!
//! [`CardLayout`] is the per-frame hit-region map: the widget paints from
//! it and [`NotificationCard::handle_mouse`] dispatches against it, so
//! what you see is exactly what you can click.
//!
//! [`CardView`]: crate::card::CardView
//! [`NotificationCard::handle_mouse`]: crate::card::NotificationCard::handle_mouse

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Widget};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::card::CardView;
use crate::event::Status;
use crate::menu::MenuState;
use crate::share::SocialPlatform;

const SUMMARY_HEIGHT: u16 = 1;
const CHECKBOX_WIDTH: u16 = 3;
const ICON_WIDTH: u16 = 2;
const TRIGGER_WIDTH: u16 = 3;
const TIMESTAMP_WIDTH: u16 = 14;
/// Summary widths below this hide the timestamp cell.
const NARROW_WIDTH: u16 = 48;
/// Detail widths from this up put the avatar stack in a column beside the
/// metadata; narrower details stack avatars in a single row above it.
const WIDE_DETAIL_WIDTH: u16 = 60;
const MENU_WIDTH: u16 = 20;

/// Hit-region map for one rendered card frame.
///
/// Compute it from the same [`CardView`] and area the widget renders
/// with, and feed mouse events through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
	/// Full card rect after the exit transition is applied.
	pub card: Rect,
	/// Summary row (expansion toggle surface).
	pub summary: Rect,
	pub checkbox: Rect,
	pub menu_trigger: Rect,
	/// Absent on narrow layouts.
	pub timestamp: Option<Rect>,
	pub description: Rect,
	/// Present only while expanded.
	pub detail: Option<Rect>,
	/// Present only while the action menu is open.
	pub menu: Option<MenuLayout>,
}

/// Hit regions of the action menu popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
	pub panel: Rect,
	pub share_item: Rect,
	/// One rect per platform, present while the share panel is unfolded.
	/// Ordered as [`SocialPlatform::ALL`].
	pub share_targets: Option<[Rect; 3]>,
	pub delete_item: Rect,
	pub status_item: Rect,
}

impl CardLayout {
	/// Computes the hit-region map for `view` rendered into `area`.
	pub fn compute(view: &CardView, area: Rect) -> Self {
		let card = exit_rect(area, view.exit);
		let inner = Rect::new(
			card.x.saturating_add(1),
			card.y.saturating_add(1),
			card.width.saturating_sub(2),
			card.height.saturating_sub(2),
		);
		let summary = Rect::new(inner.x, inner.y, inner.width, SUMMARY_HEIGHT.min(inner.height));
		let checkbox = Rect::new(
			summary.x,
			summary.y,
			CHECKBOX_WIDTH.min(summary.width),
			summary.height,
		);
		let trigger_x = summary.right().saturating_sub(TRIGGER_WIDTH).max(summary.x);
		let menu_trigger = Rect::new(
			trigger_x,
			summary.y,
			TRIGGER_WIDTH.min(summary.width),
			summary.height,
		);
		let timestamp = (summary.width >= NARROW_WIDTH).then(|| {
			Rect::new(
				trigger_x.saturating_sub(TIMESTAMP_WIDTH + 1),
				summary.y,
				TIMESTAMP_WIDTH,
				summary.height,
			)
		});
		let desc_start = summary
			.x
			.saturating_add(CHECKBOX_WIDTH + 1 + ICON_WIDTH + 1);
		let desc_end = timestamp
			.map_or(trigger_x, |rect| rect.x)
			.saturating_sub(1);
		let description = Rect::new(
			desc_start,
			summary.y,
			desc_end.saturating_sub(desc_start),
			summary.height,
		);
		let detail = (view.expanded && inner.height > SUMMARY_HEIGHT).then(|| {
			Rect::new(
				inner.x,
				inner.y + SUMMARY_HEIGHT,
				inner.width,
				inner.height - SUMMARY_HEIGHT,
			)
		});
		let menu = match view.menu {
			MenuState::Open { anchor, share_open } => {
				Some(menu_layout(anchor, share_open, area))
			}
			MenuState::Closed => None,
		};
		Self {
			card,
			summary,
			checkbox,
			menu_trigger,
			timestamp,
			description,
			detail,
			menu,
		}
	}
}

/// Rows the card wants when rendered at `width`: bordered summary plus
/// the detail body when expanded.
pub fn card_height(view: &CardView, width: u16) -> u16 {
	let mut height = SUMMARY_HEIGHT + 2;
	if view.expanded {
		let inner = width.saturating_sub(2);
		let badge_rows = if view.actors.is_empty() {
			0
		} else if inner >= WIDE_DETAIL_WIDTH {
			view.actors.len()
		} else {
			1
		};
		let rows = if inner >= WIDE_DETAIL_WIDTH {
			badge_rows.max(view.metadata.len())
		} else {
			badge_rows + view.metadata.len()
		};
		height += rows as u16;
	}
	height
}

/// Paints one [`CardView`] frame.
pub struct NotificationCardWidget<'a> {
	view: &'a CardView,
}

impl<'a> NotificationCardWidget<'a> {
	pub fn new(view: &'a CardView) -> Self {
		Self { view }
	}
}

impl Widget for NotificationCardWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let view = self.view;
		let layout = CardLayout::compute(view, area);
		if layout.card.width < 4 || layout.card.height < 3 {
			return;
		}

		// Unread events get the thicker accent border; read ones the
		// plain one. Derived from the store snapshot, never cached.
		let border_type = match view.status {
			Status::Unread => BorderType::Thick,
			Status::Read => BorderType::Plain,
		};
		Block::bordered()
			.border_type(border_type)
			.border_style(Style::new().fg(view.severity.color))
			.render(layout.card, buf);

		let checkbox = if view.checked { "[x]" } else { "[ ]" };
		Line::raw(checkbox).render(layout.checkbox, buf);

		let icon_rect = Rect::new(
			layout.checkbox.right().saturating_add(1),
			layout.summary.y,
			ICON_WIDTH.min(layout.summary.width),
			layout.summary.height,
		);
		Line::styled(view.severity.icon, Style::new().fg(view.severity.color))
			.render(icon_rect, buf);

		Line::raw(view.description.as_str()).render(layout.description, buf);

		if let Some(timestamp) = layout.timestamp {
			Line::styled(view.timestamp.as_str(), Style::new().dim())
				.right_aligned()
				.render(timestamp, buf);
		}

		Line::raw(" ⋮ ").render(layout.menu_trigger, buf);

		if let Some(detail) = layout.detail {
			render_detail(view, detail, buf);
		}

		// Popup last so it paints over everything beneath it.
		if let Some(menu) = &layout.menu {
			render_menu(view, menu, buf);
		}
	}
}

fn exit_rect(area: Rect, exit: Option<f32>) -> Rect {
	match exit {
		Some(progress) => {
			let remaining = 1.0 - progress.clamp(0.0, 1.0);
			let width = (f32::from(area.width) * remaining).round() as u16;
			Rect { width, ..area }
		}
		None => area,
	}
}

fn menu_layout(anchor: Position, share_open: bool, frame: Rect) -> MenuLayout {
	let rows = 3 + u16::from(share_open);
	let panel = clamp_panel(anchor, MENU_WIDTH, rows + 2, frame);
	let item_x = panel.x.saturating_add(1);
	let item_width = panel.width.saturating_sub(2);
	let item = |row: u16| Rect::new(item_x, panel.y.saturating_add(1 + row), item_width, 1);

	let share_item = item(0);
	let share_targets = share_open.then(|| {
		let row_y = share_item.y + 1;
		let base = item_x.saturating_add(2);
		let mut x = base;
		let mut targets = [Rect::default(); 3];
		for (slot, platform) in targets.iter_mut().zip(SocialPlatform::ALL) {
			let width = platform.label().len() as u16;
			*slot = Rect::new(x, row_y, width, 1);
			x = x.saturating_add(width + 2);
		}
		targets
	});
	let action_offset = 1 + u16::from(share_open);
	MenuLayout {
		panel,
		share_item,
		share_targets,
		delete_item: item(action_offset),
		status_item: item(action_offset + 1),
	}
}

// Anchor placement with frame clamping, so the popup never paints outside
// the widget's area.
fn clamp_panel(anchor: Position, width: u16, height: u16, frame: Rect) -> Rect {
	let width = width.min(frame.width);
	let height = height.min(frame.height);
	let x = anchor
		.x
		.max(frame.x)
		.min(frame.right().saturating_sub(width));
	let y = anchor
		.y
		.max(frame.y)
		.min(frame.bottom().saturating_sub(height));
	Rect::new(x, y, width, height)
}

fn actor_initials(name: &str) -> String {
	let initials: String = name
		.split_whitespace()
		.filter_map(|word| word.graphemes(true).next())
		.take(2)
		.collect::<String>()
		.to_uppercase();
	if initials.is_empty() {
		"?".to_owned()
	} else {
		initials
	}
}

fn render_detail(view: &CardView, area: Rect, buf: &mut Buffer) {
	let badges: Vec<String> = view
		.actors
		.iter()
		.map(|actor| format!("({}) {}", actor_initials(&actor.name), actor.name))
		.collect();

	if area.width >= WIDE_DETAIL_WIDTH && !badges.is_empty() {
		// First actor on top of the stack.
		let column = badges
			.iter()
			.map(|badge| badge.as_str().width())
			.max()
			.unwrap_or(0)
			.min(usize::from(area.width / 2)) as u16;
		for (row, badge) in badges.iter().enumerate() {
			let y = area.y.saturating_add(row as u16);
			if y >= area.bottom() {
				break;
			}
			Line::raw(badge.as_str()).render(Rect::new(area.x, y, column, 1), buf);
		}
		let meta_x = area.x.saturating_add(column + 2);
		let metadata = Rect::new(
			meta_x,
			area.y,
			area.right().saturating_sub(meta_x),
			area.height,
		);
		render_lines(&view.metadata, metadata, buf);
	} else {
		let mut y = area.y;
		if !badges.is_empty() && area.height > 0 {
			Line::raw(badges.join("  ")).render(Rect::new(area.x, y, area.width, 1), buf);
			y = y.saturating_add(1);
		}
		let metadata = Rect::new(area.x, y, area.width, area.bottom().saturating_sub(y));
		render_lines(&view.metadata, metadata, buf);
	}
}

fn render_lines(lines: &[String], area: Rect, buf: &mut Buffer) {
	for (row, line) in lines.iter().enumerate() {
		let y = area.y.saturating_add(row as u16);
		if y >= area.bottom() {
			break;
		}
		Line::raw(line.as_str()).render(Rect::new(area.x, y, area.width, 1), buf);
	}
}

fn render_menu(view: &CardView, layout: &MenuLayout, buf: &mut Buffer) {
	Clear.render(layout.panel, buf);
	Block::bordered()
		.border_type(BorderType::Plain)
		.render(layout.panel, buf);

	Line::raw("Share").render(layout.share_item, buf);
	if let Some(targets) = &layout.share_targets {
		for (platform, rect) in SocialPlatform::ALL.iter().zip(targets) {
			Line::raw(platform.label()).render(*rect, buf);
		}
	}
	Line::raw("Delete").render(layout.delete_item, buf);
	let status_label = match view.status {
		Status::Read => "Mark as unread",
		Status::Unread => "Mark as read",
	};
	Line::raw(status_label).render(layout.status_item, buf);
}

#[cfg(test)]
mod tests;
