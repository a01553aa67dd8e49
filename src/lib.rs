//! Resolves the newest release from a Sparkle-style appcast feed.
//!
//! The landing page's download button needs two things from the app's update
//! feed: the newest release's display version and its download URL. This crate
//! fetches and parses the appcast, ranks the release entries, and emits that
//! pair (with a static fallback when the feed is unreachable or empty).
//!
//! # Modules
//!
//! - [`feed`]: appcast document model, XML parsing, and the fetch boundary
//! - [`release`]: candidate derivation, version comparison, and selection
//! - [`page`]: the download-button output consumed by the site build
//! - [`config`]: feed URL and fallback configuration

pub mod config;
pub mod feed;
pub mod page;
pub mod release;
