//! Share links for the action menu's social panel.
//!
//! Every share carries the same fixed page URL; the event description
//! rides along as the platform's quote/summary/text parameter. Opening the
//! resulting link is the host's job, via [`LinkOpener`].
//!
//! [`LinkOpener`]: crate::ports::LinkOpener

use url::Url;

/// Page every share link points at.
pub const SHARE_PAGE_URL: &str = "https://corkboard.dev";

/// External networks reachable from the share panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
	Facebook,
	LinkedIn,
	Twitter,
}

impl SocialPlatform {
	/// All platforms, in the order the share panel lists them.
	pub const ALL: [Self; 3] = [Self::Facebook, Self::LinkedIn, Self::Twitter];

	/// Short label rendered on the share panel.
	pub fn label(self) -> &'static str {
		match self {
			Self::Facebook => "[f]",
			Self::LinkedIn => "[in]",
			Self::Twitter => "[t]",
		}
	}
}

/// Builds the share URL for a platform, quoting `text` as the payload.
pub fn share_url(platform: SocialPlatform, text: &str) -> String {
	let (endpoint, url_param, text_param) = match platform {
		SocialPlatform::Facebook => ("https://www.facebook.com/sharer/sharer.php", "u", "quote"),
		SocialPlatform::LinkedIn => ("https://www.linkedin.com/shareArticle", "url", "summary"),
		SocialPlatform::Twitter => ("https://twitter.com/intent/tweet", "url", "text"),
	};
	Url::parse_with_params(endpoint, [(url_param, SHARE_PAGE_URL), (text_param, text)])
		.expect("share endpoints are valid urls")
		.into()
}
