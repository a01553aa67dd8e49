//! Selection of the newest usable release

use crate::feed::document::Appcast;
use crate::release::candidate::Candidate;
use crate::release::compare::compare_versions;
use std::cmp::Ordering;

/// The selected release, as consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRelease {
    /// Display version; may be empty when the feed carries only a URL.
    pub version: String,
    pub download_url: String,
}

/// Pick the newest usable release from a parsed appcast.
///
/// A pure function of the feed: items are reduced left-to-right with
/// [`prefer`], so tie-breaking precedence lives in one comparator and ties
/// keep the earlier-seen candidate. Returns `None` when no item qualifies.
pub fn select_latest(feed: &Appcast) -> Option<SelectedRelease> {
    feed.items
        .iter()
        .filter_map(Candidate::from_item)
        .fold(None, |best, challenger| match best {
            None => Some(challenger),
            Some(best) => Some(prefer(best, challenger)),
        })
        .map(|candidate| SelectedRelease {
            version: candidate.display_version,
            download_url: candidate.download_url,
        })
}

/// Decide between the running best and a challenger.
///
/// Version keys dominate: when both are present they are compared as version
/// strings, and a keyed candidate always beats an unkeyed one. Publish dates
/// only break version ties (or order entirely unkeyed candidates), with
/// unknown dates sorting below every parsed date.
fn prefer(best: Candidate, challenger: Candidate) -> Candidate {
    match (&best.version_key, &challenger.version_key) {
        (Some(b), Some(c)) => match compare_versions(c, b) {
            Ordering::Greater => challenger,
            Ordering::Less => best,
            Ordering::Equal => newer_by_date(best, challenger),
        },
        (None, Some(_)) => challenger,
        (Some(_), None) => best,
        (None, None) => newer_by_date(best, challenger),
    }
}

fn newer_by_date(best: Candidate, challenger: Candidate) -> Candidate {
    // Option<DateTime> orders None first, which is exactly the
    // unknown-is-oldest rule; ties keep the incumbent.
    if challenger.pub_date > best.pub_date {
        challenger
    } else {
        best
    }
}
