//! Appcast feed layer
//! - document.rs: Appcast/Item/Enclosure document model
//! - parser.rs: XML parsing into the document model
//! - source.rs: FeedSource trait and HTTP implementation
//! - error.rs: Error types for fetching and parsing

pub mod document;
pub mod error;
pub mod parser;
pub mod source;

pub use document::{Appcast, Enclosure, Item};
pub use error::FeedError;
pub use parser::parse_appcast;
pub use source::{FeedSource, HttpFeedSource};
