use crate::types::{FeedEntry, PressError, Result};
use feed_rs::parser;
use tracing::{debug, info};

pub struct FeedParser;

impl FeedParser {
    /// Parse an RSS or Atom document into entries, keeping the feed's own order.
    ///
    /// Every entry must carry a link and a timestamp; a feed with an entry
    /// missing either is treated as malformed.
    pub fn parse_entries(url: &str, content: &str) -> Result<Vec<FeedEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| PressError::fetch(url, format!("failed to parse feed: {}", e)))?;

        let entries = feed
            .entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| Self::parse_entry(url, position, entry))
            .collect::<Result<Vec<_>>>()?;

        info!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    fn parse_entry(url: &str, position: usize, entry: feed_rs::model::Entry) -> Result<FeedEntry> {
        let title = entry.title.map(|t| t.content).unwrap_or_default();

        let link = entry
            .links
            .first()
            .map(|l| l.href.trim().to_string())
            .filter(|href| !href.is_empty())
            .ok_or_else(|| {
                PressError::fetch(url, format!("entry {} ({:?}) has no link", position, title))
            })?;

        let published = entry.published.or(entry.updated).ok_or_else(|| {
            PressError::fetch(url, format!("entry {} ({}) has no publish date", position, link))
        })?;

        let summary = entry.summary.map(|s| s.content).unwrap_or_default();

        Ok(FeedEntry {
            link,
            title,
            summary,
            published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FEED_URL: &str = "https://example.com/feed.xml";

    #[test]
    fn keeps_feed_order_and_fields() {
        let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Newsroom</title>
    <link>https://example.com/</link>
    <description>Press releases</description>
    <item>
      <title>Second release</title>
      <link>https://example.com/2</link>
      <pubDate>Mon, 21 Oct 2024 08:00:00 GMT</pubDate>
      <description>Newer</description>
    </item>
    <item>
      <title>First release</title>
      <link>https://example.com/1</link>
      <pubDate>Mon, 21 Oct 2024 07:28:00 GMT</pubDate>
      <description>Older</description>
    </item>
  </channel>
</rss>"#;

        let entries = FeedParser::parse_entries(FEED_URL, rss).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].link, "https://example.com/2");
        assert_eq!(entries[0].title, "Second release");
        assert_eq!(entries[0].summary, "Newer");
        assert_eq!(
            entries[1].published,
            Utc.with_ymd_and_hms(2024, 10, 21, 7, 28, 0).unwrap()
        );
    }

    #[test]
    fn entry_without_date_is_malformed() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Newsroom</title>
    <link>https://example.com/</link>
    <description>Press releases</description>
    <item>
      <title>Undated</title>
      <link>https://example.com/undated</link>
    </item>
  </channel>
</rss>"#;

        let err = FeedParser::parse_entries(FEED_URL, rss).unwrap_err();
        assert!(matches!(err, PressError::Fetch { .. }));
    }

    #[test]
    fn entry_without_link_is_malformed() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Newsroom</title>
    <link>https://example.com/</link>
    <description>Press releases</description>
    <item>
      <title>Unlinked</title>
      <pubDate>Mon, 21 Oct 2024 08:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

        let err = FeedParser::parse_entries(FEED_URL, rss).unwrap_err();
        assert!(matches!(err, PressError::Fetch { ref reason, .. } if reason.contains("link")));
    }

    #[test]
    fn garbage_is_a_fetch_error() {
        let err = FeedParser::parse_entries(FEED_URL, "<html>not a feed</html>").unwrap_err();
        assert!(matches!(err, PressError::Fetch { .. }));
    }

    #[test]
    fn empty_channel_yields_no_entries() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title><link>https://example.com/</link><description>d</description></channel></rss>"#;
        assert!(FeedParser::parse_entries(FEED_URL, rss).unwrap().is_empty());
    }
}
