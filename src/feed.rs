//! RSS 2.0 feed generation.
//!
//! Builds the syndication feed served at `/rss.xml`. The feed is a public
//! production artifact built once per site, so drafts are excluded
//! unconditionally here — unlike the environment-aware listing policy in
//! [`crate::select`], which lets development builds preview drafts.
//!
//! Item content is the markdown body rendered to HTML and then sanitized:
//! feed readers render channel content in untrusted contexts, so scripts,
//! styles, and event-handler attributes are stripped while ordinary
//! formatting tags survive.
//!
//! A post whose datetime does not parse still gets an item; its `pubDate`
//! carries the raw frontmatter string. Consumers may reject it — that is a
//! content error for the author to fix, not a build failure.

use crate::config::SiteConfig;
use crate::datetime;
use crate::post::PostRecord;
use pulldown_cmark::{html as md_html, Parser};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the RSS channel for a post collection.
///
/// Drafts are dropped regardless of environment; the remainder is ordered
/// newest-first by publish time (stable for equal timestamps).
pub fn build_channel(posts: &[PostRecord], config: &SiteConfig) -> Channel {
    let mut published: Vec<&PostRecord> =
        posts.iter().filter(|p| !p.frontmatter.draft).collect();
    published.sort_by_key(|p| {
        std::cmp::Reverse(datetime::epoch_seconds(&p.frontmatter.datetime).unwrap_or(i64::MIN))
    });

    let items: Vec<Item> = published
        .iter()
        .map(|post| post_to_item(post, config))
        .collect();

    ChannelBuilder::default()
        .title(&config.title)
        .link(config.site_url().to_string())
        .description(&config.description)
        .generator(Some(format!("quillpost {}", env!("CARGO_PKG_VERSION"))))
        .items(items)
        .build()
}

/// Render the channel and write it to `<output>/rss.xml`.
pub fn write_feed(channel: &Channel, output_dir: &Path) -> Result<(), FeedError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("rss.xml");
    fs::write(&path, channel.to_string())?;
    Ok(())
}

fn post_to_item(post: &PostRecord, config: &SiteConfig) -> Item {
    let link = format!("{}/{}", config.site_url(), post.route());

    // Best-effort markdown render; malformed input degrades, never fails
    let parser = Parser::new(&post.body);
    let mut rendered = String::new();
    md_html::push_html(&mut rendered, parser);
    let content = ammonia::clean(&rendered);

    // Invalid datetimes pass through raw — not validated at this layer
    let pub_date = datetime::to_rfc2822(&post.frontmatter.datetime)
        .unwrap_or_else(|| post.frontmatter.datetime.clone());

    ItemBuilder::default()
        .title(post.frontmatter.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.frontmatter.description.clone())
        .content(Some(content))
        .pub_date(Some(pub_date))
        .build()
}
