//! Document model for a parsed appcast feed

/// A parsed appcast document: the channel's items in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appcast {
    pub items: Vec<Item>,
}

impl Appcast {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One `<item>` of the channel.
///
/// Both fields are optional on the wire; items without an enclosure never
/// become release candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub enclosure: Option<Enclosure>,
    /// Raw `<pubDate>` text, unparsed.
    pub pub_date: Option<String>,
}

/// The `<enclosure>` describing a release's downloadable payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enclosure {
    /// `url` attribute. May be blank; blank URLs disqualify the item.
    pub url: String,
    /// `sparkle:version` attribute (machine-oriented identifier).
    pub version: Option<String>,
    /// `sparkle:shortVersionString` attribute (human-readable form).
    pub short_version: Option<String>,
}
