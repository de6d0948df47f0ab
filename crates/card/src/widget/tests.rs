use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::style::Color;

use super::*;
use crate::actors::Actor;
use crate::event::Severity;
use crate::style::SeverityStyle;

const AREA: Rect = Rect::new(0, 0, 80, 10);

fn sample_view() -> CardView {
	CardView {
		severity: SeverityStyle::resolve(Severity::Info),
		status: Status::Unread,
		checked: false,
		description: "disk pressure rising on node worker-3".into(),
		description_truncated: false,
		timestamp: "2 hours ago".into(),
		actors: Vec::new(),
		expanded: false,
		metadata: Vec::new(),
		menu: MenuState::Closed,
		exit: None,
	}
}

fn rendered(view: &CardView) -> Buffer {
	let mut buf = Buffer::empty(AREA);
	NotificationCardWidget::new(view).render(AREA, &mut buf);
	buf
}

fn row(buf: &Buffer, y: u16) -> String {
	(AREA.x..AREA.right())
		.map(|x| buf.cell(Position::new(x, y)).unwrap().symbol())
		.collect()
}

#[test]
fn unread_cards_get_the_thick_border() {
	let buf = rendered(&sample_view());
	assert_eq!(buf.cell(Position::new(0, 0)).unwrap().symbol(), "┏");
}

#[test]
fn read_cards_get_the_plain_border() {
	let view = CardView {
		status: Status::Read,
		..sample_view()
	};
	let buf = rendered(&view);
	assert_eq!(buf.cell(Position::new(0, 0)).unwrap().symbol(), "┌");
}

#[test]
fn border_carries_the_severity_accent_color() {
	let view = CardView {
		severity: SeverityStyle::resolve(Severity::Error),
		..sample_view()
	};
	let buf = rendered(&view);
	let style = buf.cell(Position::new(0, 0)).unwrap().style();
	assert_eq!(style.fg, Some(Color::Red));
}

#[test]
fn checkbox_reflects_the_selection_flag() {
	let buf = rendered(&sample_view());
	assert_eq!(buf.cell(Position::new(2, 1)).unwrap().symbol(), " ");

	let view = CardView {
		checked: true,
		..sample_view()
	};
	let buf = rendered(&view);
	assert_eq!(buf.cell(Position::new(2, 1)).unwrap().symbol(), "x");
}

#[test]
fn summary_shows_description_and_timestamp() {
	let buf = rendered(&sample_view());
	let summary = row(&buf, 1);
	assert!(summary.contains("disk pressure rising"));
	assert!(summary.contains("2 hours ago"));
}

#[test]
fn narrow_layouts_drop_the_timestamp_cell() {
	let view = sample_view();
	let narrow = CardLayout::compute(&view, Rect::new(0, 0, 40, 10));
	assert_eq!(narrow.timestamp, None);
	let wide = CardLayout::compute(&view, AREA);
	assert!(wide.timestamp.is_some());
}

#[test]
fn detail_regions_exist_only_while_expanded() {
	let view = sample_view();
	assert_eq!(CardLayout::compute(&view, AREA).detail, None);

	let expanded = CardView {
		expanded: true,
		..view
	};
	assert!(CardLayout::compute(&expanded, AREA).detail.is_some());
}

#[test]
fn expanded_cards_render_actors_and_metadata() {
	let view = CardView {
		expanded: true,
		actors: vec![
			Actor {
				name: "Ada Lovelace".into(),
				avatar_url: String::new(),
				tooltip: "Ada Lovelace".into(),
			},
			Actor {
				name: "Corkboard".into(),
				avatar_url: String::new(),
				tooltip: "System ID: sys-1".into(),
			},
		],
		metadata: vec!["source: worker-3".into()],
		..sample_view()
	};
	let buf = rendered(&view);
	// Wide detail: badges in a column, first actor on top, metadata
	// alongside.
	assert!(row(&buf, 2).contains("(AL) Ada Lovelace"));
	assert!(row(&buf, 2).contains("source: worker-3"));
	assert!(row(&buf, 3).contains("(C) Corkboard"));
}

#[test]
fn open_menu_paints_items_over_the_card() {
	let view = CardView {
		menu: MenuState::Open {
			anchor: Position::new(76, 2),
			share_open: false,
		},
		..sample_view()
	};
	let buf = rendered(&view);
	assert!(row(&buf, 3).contains("Share"));
	assert!(row(&buf, 4).contains("Delete"));
	assert!(row(&buf, 5).contains("Mark as read"));
}

#[test]
fn unfolded_share_panel_lists_the_three_platforms() {
	let view = CardView {
		menu: MenuState::Open {
			anchor: Position::new(76, 2),
			share_open: true,
		},
		..sample_view()
	};
	let buf = rendered(&view);
	let share_row = row(&buf, 4);
	assert!(share_row.contains("[f]"));
	assert!(share_row.contains("[in]"));
	assert!(share_row.contains("[t]"));
}

#[test]
fn status_item_label_is_the_complement_of_the_current_status() {
	let view = CardView {
		status: Status::Read,
		menu: MenuState::Open {
			anchor: Position::new(76, 2),
			share_open: false,
		},
		..sample_view()
	};
	let buf = rendered(&view);
	assert!(row(&buf, 5).contains("Mark as unread"));
}

#[test]
fn exit_progress_shrinks_the_card() {
	let view = CardView {
		exit: Some(0.5),
		..sample_view()
	};
	let layout = CardLayout::compute(&view, AREA);
	assert_eq!(layout.card.width, 40);
}

#[test]
fn fully_exited_cards_paint_nothing() {
	let view = CardView {
		exit: Some(1.0),
		..sample_view()
	};
	let buf = rendered(&view);
	assert_eq!(buf, Buffer::empty(AREA));
}

#[test]
fn card_height_accounts_for_the_expanded_detail() {
	let collapsed = sample_view();
	assert_eq!(card_height(&collapsed, 80), 3);

	let expanded = CardView {
		expanded: true,
		actors: vec![Actor {
			name: "Ada Lovelace".into(),
			avatar_url: String::new(),
			tooltip: "Ada Lovelace".into(),
		}],
		metadata: vec!["a".into(), "b".into(), "c".into()],
		..collapsed
	};
	// Wide layout: the avatar column and metadata share rows.
	assert_eq!(card_height(&expanded, 80), 3 + 3);
	// Narrow layout: the avatar row sits above the metadata.
	assert_eq!(card_height(&expanded, 50), 3 + 1 + 3);
}

#[test]
fn popup_is_clamped_inside_the_frame() {
	let view = CardView {
		menu: MenuState::Open {
			anchor: Position::new(76, 8),
			share_open: false,
		},
		..sample_view()
	};
	let layout = CardLayout::compute(&view, AREA);
	let panel = layout.menu.unwrap().panel;
	assert!(panel.right() <= AREA.right());
	assert!(panel.bottom() <= AREA.bottom());
}

// Timestamp text itself is owned by timefmt; this is just the plumbing
// check that what the view carries is what gets painted.
#[test]
fn timestamp_cell_paints_the_view_text() {
	let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
	let view = CardView {
		timestamp: crate::timefmt::format_timestamp(now - chrono::Duration::minutes(5), now),
		..sample_view()
	};
	let buf = rendered(&view);
	assert!(row(&buf, 1).contains("5 minutes ago"));
}
