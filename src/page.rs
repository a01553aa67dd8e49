//! Download-button output for the landing page

use crate::feed::source::FeedSource;
use crate::release::selector::{SelectedRelease, select_latest};
use serde::Serialize;
use tracing::warn;

/// The resolved download button, injected into the page at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadButton {
    /// `"Download vX.Y.Z"` when a versioned release was selected, otherwise
    /// the bare `"Download"`.
    pub label: String,
    pub href: String,
}

impl DownloadButton {
    /// Build the button from a selection result, falling back to the static
    /// download URL when nothing was selected.
    pub fn from_selection(selection: Option<SelectedRelease>, fallback_url: &str) -> Self {
        match selection {
            Some(release) if !release.version.is_empty() => Self {
                label: format!("Download v{}", release.version),
                href: release.download_url,
            },
            Some(release) => Self {
                label: "Download".to_string(),
                href: release.download_url,
            },
            None => Self {
                label: "Download".to_string(),
                href: fallback_url.to_string(),
            },
        }
    }
}

/// Fetch the feed once and resolve the download button.
///
/// Fetch and parse failures are logged and absorbed here: the page must still
/// render, so the result degrades to the fallback link instead of erroring.
pub async fn resolve_download_button(source: &dyn FeedSource, fallback_url: &str) -> DownloadButton {
    match source.fetch().await {
        Ok(feed) => DownloadButton::from_selection(select_latest(&feed), fallback_url),
        Err(e) => {
            warn!("appcast unavailable, using fallback link: {}", e);
            DownloadButton::from_selection(None, fallback_url)
        }
    }
}
