//! RSS document decoding
//!
//! Maps `<root><channel>...<item>...</item></channel></root>` onto the feed
//! model. The root element name is not checked and unknown elements are
//! skipped. Element names are compared by local name, so a namespaced
//! `atom:link` or `dc:title` lands in the same field as `link` or `title`.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::domain::entities::{Channel, Feed, FeedItem};
use crate::error::ParseError;

#[derive(Clone, Copy)]
enum ChannelField {
    Title,
    Link,
    Description,
    Language,
}

#[derive(Clone, Copy)]
enum ItemField {
    Title,
    Link,
    Description,
    PubDate,
}

/// What the element at the top of the path maps to
#[derive(Clone, Copy)]
enum Target {
    Channel,
    Item,
    ChannelField(ChannelField),
    ItemField(ItemField),
    Other,
}

impl Target {
    fn is_field(self) -> bool {
        matches!(self, Target::ChannelField(_) | Target::ItemField(_))
    }
}

fn classify(path: &[Vec<u8>]) -> Target {
    match path {
        [_, channel] if channel.as_slice() == b"channel" => Target::Channel,
        [_, channel, item] if channel.as_slice() == b"channel" && item.as_slice() == b"item" => {
            Target::Item
        }
        [_, channel, field] if channel.as_slice() == b"channel" => match field.as_slice() {
            b"title" => Target::ChannelField(ChannelField::Title),
            b"link" => Target::ChannelField(ChannelField::Link),
            b"description" => Target::ChannelField(ChannelField::Description),
            b"language" => Target::ChannelField(ChannelField::Language),
            _ => Target::Other,
        },
        [_, channel, item, field]
            if channel.as_slice() == b"channel" && item.as_slice() == b"item" =>
        {
            match field.as_slice() {
                b"title" => Target::ItemField(ItemField::Title),
                b"link" => Target::ItemField(ItemField::Link),
                b"description" => Target::ItemField(ItemField::Description),
                b"pubDate" => Target::ItemField(ItemField::PubDate),
                _ => Target::Other,
            }
        }
        _ => Target::Other,
    }
}

fn set_channel_field(channel: &mut Channel, field: ChannelField, value: String) {
    match field {
        ChannelField::Title => channel.title = value,
        ChannelField::Link => channel.link = value,
        ChannelField::Description => channel.description = value,
        ChannelField::Language => channel.language = value,
    }
}

fn set_item_field(item: &mut FeedItem, field: ItemField, value: String) {
    match field {
        ItemField::Title => item.title = value,
        ItemField::Link => item.link = value,
        ItemField::Description => item.description = value,
        ItemField::PubDate => item.pub_date = value,
    }
}

/// Accumulates decoded state while walking the event stream
#[derive(Default)]
struct FeedBuilder {
    feed: Feed,
    current_item: Option<FeedItem>,
    text: String,
}

impl FeedBuilder {
    fn open(&mut self, target: Target) {
        match target {
            Target::Item => self.current_item = Some(FeedItem::default()),
            Target::ChannelField(_) | Target::ItemField(_) => self.text.clear(),
            Target::Channel | Target::Other => {}
        }
    }

    fn close(&mut self, target: Target) {
        match target {
            Target::ChannelField(field) => {
                let value = std::mem::take(&mut self.text);
                set_channel_field(&mut self.feed.channel, field, value);
            }
            Target::ItemField(field) => {
                let value = std::mem::take(&mut self.text);
                if let Some(item) = self.current_item.as_mut() {
                    set_item_field(item, field, value);
                }
            }
            Target::Item => {
                if let Some(item) = self.current_item.take() {
                    self.feed.channel.items.push(item);
                }
            }
            Target::Channel | Target::Other => {}
        }
    }
}

/// Decode an RSS document from raw XML bytes.
///
/// Text is kept verbatim apart from entity unescaping. A field's value is
/// its own character data and CDATA; text of nested child elements is
/// skipped. When a field element repeats, the last one wins.
pub fn parse_feed(xml: &[u8]) -> Result<Feed, ParseError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut builder = FeedBuilder::default();
    let mut seen_root = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            ParseError::Xml(format!("{} at position {}", e, reader.error_position()))
        })?;

        match event {
            Event::Decl(e) => {
                if let Some(encoding) = e.encoding() {
                    let encoding = encoding.map_err(|e| ParseError::Xml(e.to_string()))?;
                    if !encoding.eq_ignore_ascii_case(b"utf-8") {
                        return Err(ParseError::UnsupportedEncoding(
                            String::from_utf8_lossy(&encoding).into_owned(),
                        ));
                    }
                }
            }
            Event::Start(e) => {
                path.push(e.local_name().as_ref().to_vec());
                seen_root = true;
                builder.open(classify(&path));
            }
            Event::Empty(e) => {
                path.push(e.local_name().as_ref().to_vec());
                seen_root = true;
                let target = classify(&path);
                builder.open(target);
                builder.close(target);
                path.pop();
                if path.is_empty() {
                    return Ok(builder.feed);
                }
            }
            Event::End(_) => {
                builder.close(classify(&path));
                path.pop();
                if path.is_empty() {
                    return Ok(builder.feed);
                }
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| ParseError::Xml(e.to_string()))?;
                if classify(&path).is_field() {
                    builder.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                let text =
                    std::str::from_utf8(&e).map_err(|e| ParseError::Xml(e.to_string()))?;
                if classify(&path).is_field() {
                    builder.text.push_str(text);
                }
            }
            Event::Eof => {
                return if seen_root {
                    Err(ParseError::Xml(format!(
                        "unexpected end of document, unclosed <{}>",
                        String::from_utf8_lossy(path.last().map(Vec::as_slice).unwrap_or_default())
                    )))
                } else {
                    Err(ParseError::Empty)
                };
            }
            _ => {}
        }
        buf.clear();
    }
}
