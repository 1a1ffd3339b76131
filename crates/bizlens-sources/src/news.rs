//! Local news mentions from an RSS search endpoint.

use bizlens_core::BusinessProfile;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::fetched::Fetched;
use crate::scorer::lexicon_score;

const SOURCE: &str = "news";
const MAX_ARTICLES: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// `pubDate` exactly as the feed printed it.
    pub published: Option<String>,
    pub sentiment_score: f32,
}

/// RSS news search. Needs no key.
#[derive(Debug, Clone)]
pub struct NewsSource {
    client: SourceClient,
}

impl NewsSource {
    #[must_use]
    pub fn new(client: SourceClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, profile: &BusinessProfile) -> Fetched<Vec<NewsArticle>> {
        let result = self.fetch(profile).await;
        Fetched::settle(SOURCE, result, || canned(profile))
    }

    async fn fetch(&self, profile: &BusinessProfile) -> Result<Vec<NewsArticle>, SourceError> {
        let query = format!("{} {}", profile.name, profile.zip_code);
        let encoded = utf8_percent_encode(&query, NON_ALPHANUMERIC).to_string();
        let mut url = self.client.build_url("rss/search", &[]);
        url.set_query(Some(&format!("q={encoded}&hl=en-US&gl=US&ceid=US:en")));

        let body = self.client.get_text(url, false).await?;
        parse_rss_feed(&body, MAX_ARTICLES)
    }
}

/// Parse RSS `<item>`s into articles, keeping those with a title and link.
///
/// # Errors
///
/// Returns [`SourceError::Xml`] if the XML is malformed.
pub fn parse_rss_feed(xml: &str, max_articles: usize) -> Result<Vec<NewsArticle>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut title = String::new();
    let mut link = String::new();
    let mut description = String::new();
    let mut published: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "item" {
                    in_item = true;
                    title.clear();
                    link.clear();
                    description.clear();
                    published = None;
                }
                current_tag = name;
            }
            Event::End(e) => {
                if e.name().as_ref() == b"item" && in_item {
                    in_item = false;
                    if !title.is_empty() && !link.is_empty() {
                        let summary = strip_html(&description);
                        let sentiment_score = lexicon_score(&format!("{title} {summary}"));
                        articles.push(NewsArticle {
                            title: title.clone(),
                            link: link.clone(),
                            summary,
                            published: published.take(),
                            sentiment_score,
                        });
                        if articles.len() >= max_articles {
                            break;
                        }
                    }
                }
                current_tag.clear();
            }
            Event::Text(e) if in_item => {
                let text = e.unescape().unwrap_or_default().into_owned();
                assign(&current_tag, text, &mut title, &mut link, &mut description, &mut published);
            }
            Event::CData(e) if in_item => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                assign(&current_tag, text, &mut title, &mut link, &mut description, &mut published);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(articles)
}

fn assign(
    tag: &str,
    text: String,
    title: &mut String,
    link: &mut String,
    description: &mut String,
    published: &mut Option<String>,
) {
    match tag {
        "title" => *title = text,
        "link" => *link = text,
        "description" => {
            if !description.is_empty() {
                description.push(' ');
            }
            description.push_str(&text);
        }
        "pubDate" => *published = Some(text),
        _ => {}
    }
}

/// Strip HTML tags and collapse whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn canned(profile: &BusinessProfile) -> Vec<NewsArticle> {
    let industry = profile.industry.label().to_lowercase();
    [
        (
            format!("New {industry} openings reshape the {} market", profile.zip_code),
            "Two new competitors opened nearby this quarter, with aggressive introductory pricing.",
        ),
        (
            format!("Survey: what customers want from local {industry}"),
            "Fast responses and transparent pricing top the list for local customers.",
        ),
        (
            "Small businesses lean on online reviews to win customers".to_string(),
            "Owners who reply to reviews see better ratings within months, a regional study finds.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, summary))| NewsArticle {
        sentiment_score: lexicon_score(&format!("{title} {summary}")),
        title,
        link: format!("https://news.example.com/local/{}", i + 1),
        summary: summary.to_string(),
        published: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Search results</title>
    <item>
      <title>Bellini's Trattoria named best brunch in the West Village</title>
      <link>https://example.com/bellini-brunch</link>
      <description><![CDATA[<p>Readers <b>loved</b> the friendly service.</p>]]></description>
      <pubDate>Mon, 02 Jun 2025 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Restaurant week returns</title>
      <link>https://example.com/restaurant-week</link>
      <description>Over 40 spots take part.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_with_summary_and_date() {
        let articles = parse_rss_feed(SAMPLE_RSS, 10).expect("valid RSS");
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].link, "https://example.com/bellini-brunch");
        assert_eq!(articles[0].summary, "Readers loved the friendly service.");
        assert_eq!(
            articles[0].published.as_deref(),
            Some("Mon, 02 Jun 2025 10:00:00 GMT")
        );
        assert!(articles[0].sentiment_score > 0.0);
        assert!(articles[1].published.is_none());
    }

    #[test]
    fn respects_max_articles() {
        let articles = parse_rss_feed(SAMPLE_RSS, 1).expect("valid RSS");
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn empty_channel_yields_no_articles() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        assert!(parse_rss_feed(xml, 10).expect("valid RSS").is_empty());
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let xml = "<rss><channel><item><title>x</link></item></channel></rss>";
        assert!(matches!(parse_rss_feed(xml, 10), Err(SourceError::Xml(_))));
    }

    #[test]
    fn strip_html_collapses_whitespace() {
        assert_eq!(strip_html("<p>a\n  <i>b</i></p>  c"), "a b c");
    }
}
