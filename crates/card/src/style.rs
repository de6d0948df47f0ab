//! Severity-to-presentation lookup.

use ratatui::style::Color;

use crate::event::Severity;

/// Visual encoding for a severity tag: a one-cell icon plus an accent color
/// applied to the icon and the card border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
	pub icon: &'static str,
	pub color: Color,
}

const INFO_STYLE: SeverityStyle = SeverityStyle {
	icon: "•",
	color: Color::Cyan,
};
const SUCCESS_STYLE: SeverityStyle = SeverityStyle {
	icon: "✓",
	color: Color::Green,
};
const WARNING_STYLE: SeverityStyle = SeverityStyle {
	icon: "!",
	color: Color::Yellow,
};
const ERROR_STYLE: SeverityStyle = SeverityStyle {
	icon: "✗",
	color: Color::Red,
};

impl SeverityStyle {
	/// Looks up the style for a severity tag.
	///
	/// Tags outside the table resolve to the info entry; there is no
	/// failure path.
	pub fn resolve(severity: Severity) -> &'static SeverityStyle {
		match severity {
			Severity::Info => &INFO_STYLE,
			Severity::Success => &SUCCESS_STYLE,
			Severity::Warning => &WARNING_STYLE,
			Severity::Error => &ERROR_STYLE,
			Severity::Unknown => &INFO_STYLE,
		}
	}
}
