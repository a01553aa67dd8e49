//! Release selection layer
//!
//! Turns parsed feed items into release candidates and picks the newest one.
//!
//! # Modules
//!
//! - [`segment`]: version-string tokenization into numeric/text segments
//! - [`compare`]: total order over version strings
//! - [`candidate`]: per-item candidate derivation (URL, version key, date)
//! - [`selector`]: the selection fold over all candidates

pub mod candidate;
pub mod compare;
pub mod segment;
pub mod selector;

pub use candidate::Candidate;
pub use compare::compare_versions;
pub use segment::Segment;
pub use selector::{SelectedRelease, select_latest};
