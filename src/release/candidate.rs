//! Release candidate derivation

use crate::feed::document::Item;
use chrono::{DateTime, FixedOffset};

/// A normalized view of one feed item, eligible for selection.
///
/// Candidates are ephemeral: derived per selection run, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Identifier used for ordering: the machine version if present, else the
    /// display version. `None` sorts behind every keyed candidate.
    pub version_key: Option<String>,
    /// Version string shown to the user; prefers the human-readable form and
    /// may be empty.
    pub display_version: String,
    pub download_url: String,
    /// Parsed publish instant. `None` means unknown and compares strictly
    /// older than any parsed date (not epoch).
    pub pub_date: Option<DateTime<FixedOffset>>,
}

impl Candidate {
    /// Derive a candidate from a feed item, or `None` if the item does not
    /// qualify (no enclosure, or a blank download URL).
    pub fn from_item(item: &Item) -> Option<Self> {
        let enclosure = item.enclosure.as_ref()?;

        let url = enclosure.url.trim();
        if url.is_empty() {
            return None;
        }

        let version = non_blank(enclosure.version.as_deref());
        let short_version = non_blank(enclosure.short_version.as_deref());

        Some(Self {
            version_key: version.or(short_version).map(str::to_string),
            display_version: short_version.or(version).unwrap_or("").to_string(),
            download_url: url.to_string(),
            pub_date: item.pub_date.as_deref().and_then(parse_pub_date),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a `<pubDate>` value. RSS convention is RFC 2822; some generators
/// emit RFC 3339, so try that second. Anything else is unknown.
fn parse_pub_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    DateTime::parse_from_rfc2822(text)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::document::Enclosure;
    use rstest::rstest;

    fn item(url: &str, version: Option<&str>, short: Option<&str>, date: Option<&str>) -> Item {
        Item {
            enclosure: Some(Enclosure {
                url: url.to_string(),
                version: version.map(str::to_string),
                short_version: short.map(str::to_string),
            }),
            pub_date: date.map(str::to_string),
        }
    }

    #[test]
    fn from_item_skips_items_without_enclosure() {
        let item = Item {
            enclosure: None,
            pub_date: Some("Wed, 10 Jan 2024 10:00:00 +0000".to_string()),
        };

        assert_eq!(Candidate::from_item(&item), None);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn from_item_skips_blank_urls(#[case] url: &str) {
        assert_eq!(Candidate::from_item(&item(url, Some("1.0"), None, None)), None);
    }

    #[rstest]
    // version_key prefers the machine version; display prefers the short form
    #[case(Some("120"), Some("1.2.0"), Some("120"), "1.2.0")]
    #[case(Some("120"), None, Some("120"), "120")]
    #[case(None, Some("1.2.0"), Some("1.2.0"), "1.2.0")]
    #[case(None, None, None, "")]
    #[case(Some("  "), Some(" 1.2.0 "), Some("1.2.0"), "1.2.0")] // blank trims to absent
    fn from_item_derives_version_key_and_display(
        #[case] version: Option<&str>,
        #[case] short: Option<&str>,
        #[case] expected_key: Option<&str>,
        #[case] expected_display: &str,
    ) {
        let candidate =
            Candidate::from_item(&item("https://dl.hexbit.app/a.dmg", version, short, None))
                .unwrap();

        assert_eq!(candidate.version_key.as_deref(), expected_key);
        assert_eq!(candidate.display_version, expected_display);
    }

    #[test]
    fn from_item_trims_download_url() {
        let candidate =
            Candidate::from_item(&item("  https://dl.hexbit.app/a.dmg  ", None, None, None))
                .unwrap();

        assert_eq!(candidate.download_url, "https://dl.hexbit.app/a.dmg");
    }

    #[rstest]
    #[case("Wed, 10 Jan 2024 10:00:00 +0000", true)] // RFC 2822
    #[case("2024-01-10T10:00:00Z", true)] // RFC 3339 fallback
    #[case("yesterday-ish", false)]
    #[case("", false)]
    fn from_item_parses_pub_date_or_leaves_unknown(#[case] date: &str, #[case] parsed: bool) {
        let candidate =
            Candidate::from_item(&item("https://dl.hexbit.app/a.dmg", None, None, Some(date)))
                .unwrap();

        assert_eq!(candidate.pub_date.is_some(), parsed);
    }

    #[test]
    fn rfc2822_and_rfc3339_forms_of_same_instant_agree() {
        let a = Candidate::from_item(&item(
            "https://dl.hexbit.app/a.dmg",
            None,
            None,
            Some("Wed, 10 Jan 2024 10:00:00 +0000"),
        ))
        .unwrap();
        let b = Candidate::from_item(&item(
            "https://dl.hexbit.app/b.dmg",
            None,
            None,
            Some("2024-01-10T10:00:00+00:00"),
        ))
        .unwrap();

        assert_eq!(a.pub_date, b.pub_date);
    }
}
