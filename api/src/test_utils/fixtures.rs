//! Test fixtures
//!
//! A small RSS 2.0 document and the feed it decodes to.

use crate::domain::entities::{Channel, Feed, FeedItem};

/// A well-formed RSS document with three items
pub const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Blog</title>
    <link>https://blog.example.com/</link>
    <description>Notes &amp; essays</description>
    <language>en-us</language>
    <item>
      <title>First post</title>
      <link>https://blog.example.com/first</link>
      <description>The very first one</description>
      <pubDate>Mon, 06 Sep 2021 16:45:00 +0000</pubDate>
    </item>
    <item>
      <title>Second post</title>
      <link>https://blog.example.com/second</link>
      <description><![CDATA[<p>Some <b>HTML</b></p>]]></description>
      <pubDate>Tue, 07 Sep 2021 09:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Third post</title>
      <link>https://blog.example.com/third</link>
      <description>Last</description>
      <pubDate>not a date at all</pubDate>
    </item>
  </channel>
</rss>
"#;

fn item(title: &str, slug: &str, description: &str, pub_date: &str) -> FeedItem {
    FeedItem {
        title: title.to_string(),
        link: format!("https://blog.example.com/{}", slug),
        description: description.to_string(),
        pub_date: pub_date.to_string(),
    }
}

/// The feed `SAMPLE_RSS` decodes to
pub fn sample_rss() -> Feed {
    Feed {
        channel: Channel {
            title: "Example Blog".to_string(),
            link: "https://blog.example.com/".to_string(),
            description: "Notes & essays".to_string(),
            language: "en-us".to_string(),
            items: vec![
                item(
                    "First post",
                    "first",
                    "The very first one",
                    "Mon, 06 Sep 2021 16:45:00 +0000",
                ),
                item(
                    "Second post",
                    "second",
                    "<p>Some <b>HTML</b></p>",
                    "Tue, 07 Sep 2021 09:00:00 +0000",
                ),
                item("Third post", "third", "Last", "not a date at all"),
            ],
        },
    }
}
