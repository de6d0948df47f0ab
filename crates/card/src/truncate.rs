//! Description truncation.
//!
//! Summary rows bound the free-text description to a fixed number of
//! grapheme clusters; the full text stays available in the expanded view.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Default display bound for summary-row descriptions, in grapheme
/// clusters. Carried through [`CardConfig`] so callers and tests can
/// override it.
///
/// [`CardConfig`]: crate::card::CardConfig
pub const MAX_DESCRIPTION_LEN: usize = 45;

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Whether [`truncate`] would shorten `text` at this bound.
///
/// Used to decide elsewhere whether an "expand to read the full text"
/// affordance is worth offering.
pub fn can_truncate(text: &str, max_graphemes: usize) -> bool {
	text.graphemes(true).nth(max_graphemes).is_some()
}

/// Bounds `text` to `max_graphemes` visible clusters plus an ellipsis;
/// shorter text passes through unchanged (and unallocated).
pub fn truncate(text: &str, max_graphemes: usize) -> Cow<'_, str> {
	match text.grapheme_indices(true).nth(max_graphemes) {
		Some((cut, _)) => {
			let mut bounded = String::with_capacity(cut + ELLIPSIS.len_utf8());
			bounded.push_str(&text[..cut]);
			bounded.push(ELLIPSIS);
			Cow::Owned(bounded)
		}
		None => Cow::Borrowed(text),
	}
}
