//! Appcast XML parser

use crate::feed::document::{Appcast, Enclosure, Item};
use crate::feed::error::FeedError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::warn;

/// Parse an appcast document into its item list.
///
/// Only document-level failures (unparsable XML) are errors. Per-item defects
/// never fail the parse: items without an enclosure, enclosures without
/// attributes, and unknown elements all pass through silently and are dealt
/// with at selection time.
///
/// A bare `<enclosure>` outside any `<item>` (the legacy single-release feed
/// shape) is folded into a one-item channel.
pub fn parse_appcast(xml: &str) -> Result<Appcast, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current_item: Option<Item> = None;
    let mut in_pub_date = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"item" if current_item.is_none() => current_item = Some(Item::default()),
                b"enclosure" => record_enclosure(&e, &mut current_item, &mut items)?,
                b"pubDate" if current_item.is_some() => in_pub_date = true,
                _ => {}
            },
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"enclosure" {
                    record_enclosure(&e, &mut current_item, &mut items)?;
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"item" => {
                    if let Some(item) = current_item.take() {
                        items.push(item);
                    }
                }
                b"pubDate" => in_pub_date = false,
                _ => {}
            },
            Event::Text(t) if in_pub_date => {
                let text = t.unescape().map_err(|e| FeedError::Parse(e.to_string()))?;
                if let Some(item) = current_item.as_mut() {
                    item.pub_date = Some(text.into_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Appcast { items })
}

/// Attach an enclosure to the open item, or emit a one-item channel for the
/// legacy bare-enclosure shape. An item's first enclosure wins.
fn record_enclosure(
    element: &BytesStart<'_>,
    current_item: &mut Option<Item>,
    items: &mut Vec<Item>,
) -> Result<(), FeedError> {
    let enclosure = read_enclosure(element)?;

    match current_item {
        Some(item) => {
            if item.enclosure.is_none() {
                item.enclosure = Some(enclosure);
            } else {
                warn!("item has multiple enclosures; keeping the first");
            }
        }
        None => items.push(Item {
            enclosure: Some(enclosure),
            pub_date: None,
        }),
    }

    Ok(())
}

fn read_enclosure(element: &BytesStart<'_>) -> Result<Enclosure, FeedError> {
    let mut enclosure = Enclosure::default();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| FeedError::Parse(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        // Matching on local names accepts both `sparkle:version` and the
        // unprefixed form some feed generators emit.
        match attr.key.local_name().as_ref() {
            b"url" => enclosure.url = value.into_owned(),
            b"version" => enclosure.version = Some(value.into_owned()),
            b"shortVersionString" => enclosure.short_version = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(enclosure)
}
