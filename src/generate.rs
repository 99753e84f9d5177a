//! HTML site generation.
//!
//! Stage 2 of the quillpost build pipeline. Takes the scan manifest and
//! generates the final static site: listing pages, one page per post, and
//! the RSS feed.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): newest posts, first listing page
//! - **Listing pages** (`/page/{n}/index.html`): older posts, `posts_per_page` each
//! - **Post pages** (`/posts/{slug}/index.html`): rendered markdown body
//! - **Feed** (`/rss.xml`): RSS 2.0 channel, see [`crate::feed`]
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── rss.xml
//! ├── page/
//! │   └── 2/index.html
//! └── posts/
//!     ├── hello-world/index.html
//!     └── year-in-review/index.html
//! ```
//!
//! Every generated page yields a [`Route`]; the route list feeds the
//! preview-image pass after generation completes.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The
//! stylesheet is embedded at compile time from `static/style.css`.

use crate::config::SiteConfig;
use crate::datetime::format_datetime;
use crate::feed::{self, FeedError};
use crate::ogimage;
use crate::post::PostRecord;
use crate::scan::Manifest;
use crate::select::{select_posts, Environment};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Parser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// One generated page, identified by its site-relative pathname.
///
/// The empty pathname is the index; every other pathname ends with `/`
/// (pages are emitted as `<pathname>/index.html`). Produced once per build,
/// consumed exactly once by the preview-image pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub pathname: String,
}

const CSS: &str = include_str!("../static/style.css");

/// Load a scan manifest written by stage 1.
pub fn load_manifest(path: &Path) -> Result<Manifest, GenerateError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Generate the static site from a manifest.
///
/// Returns the list of generated routes in emission order (index first,
/// then listing pages, then posts).
pub fn generate(
    manifest: &Manifest,
    output_dir: &Path,
    env: Environment,
) -> Result<Vec<Route>, GenerateError> {
    let config = &manifest.config;
    let posts = select_posts(&manifest.posts, env);

    fs::create_dir_all(output_dir)?;
    let mut routes = Vec::new();

    // Listing pages: index.html is page 1, older pages at /page/<n>/
    let per_page = config.posts_per_page;
    let total_pages = posts.len().div_ceil(per_page).max(1);
    for page_no in 1..=total_pages {
        let start = (page_no - 1) * per_page;
        let page_posts = &posts[start.min(posts.len())..(start + per_page).min(posts.len())];

        let pathname = if page_no == 1 {
            String::new()
        } else {
            format!("page/{page_no}/")
        };
        let listing = render_listing_page(page_posts, page_no, total_pages, config, &pathname);

        let page_dir = output_dir.join(&pathname);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), listing.into_string())?;
        routes.push(Route { pathname });
    }

    // Post pages
    for post in &posts {
        let pathname = post.route();
        let post_dir = output_dir.join(&pathname);
        fs::create_dir_all(&post_dir)?;
        let page = render_post_page(post, config, &pathname);
        fs::write(post_dir.join("index.html"), page.into_string())?;
        routes.push(Route { pathname });
    }

    // Feed: built from the full manifest, its own draft policy applies
    let channel = feed::build_channel(&manifest.posts, config);
    feed::write_feed(&channel, output_dir)?;

    Ok(routes)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure with per-page social meta tags.
fn base_document(
    title: &str,
    description: &str,
    config: &SiteConfig,
    pathname: &str,
    content: Markup,
) -> Markup {
    let og_image = format!(
        "{}/assets/ogs/{}.png",
        config.site_url(),
        ogimage::image_filename(pathname)
    );
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:image" content=(og_image);
                link rel="alternate" type="application/rss+xml" title=(config.title) href="/rss.xml";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header with home link and feed link.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (config.title) }
            nav.site-nav {
                a href="/rss.xml" { "rss" }
            }
        }
    }
}

/// Renders the footer with author credit and social links.
fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            span.author { (config.author) }
            @if !config.socials.is_empty() {
                nav.socials {
                    @for social in &config.socials {
                        a href=(social.href) target="_blank" rel="noopener" { (social.name) }
                    }
                }
            }
        }
    }
}

/// Renders one post entry in a listing: linked title, date, description.
fn post_entry(post: &PostRecord) -> Markup {
    html! {
        li.post-entry {
            a.post-title href={ "/" (post.route()) } { (post.frontmatter.title) }
            time.post-date { (format_datetime(&post.frontmatter.datetime)) }
            p.post-description { (post.frontmatter.description) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a listing page (the index is listing page 1).
fn render_listing_page(
    posts: &[PostRecord],
    page_no: usize,
    total_pages: usize,
    config: &SiteConfig,
    pathname: &str,
) -> Markup {
    let content = html! {
        (site_header(config))
        main.listing-page {
            @if page_no == 1 {
                p.site-description { (config.description) }
            }
            ul.post-list {
                @for post in posts {
                    (post_entry(post))
                }
            }
            @if total_pages > 1 {
                nav.pagination {
                    @if page_no > 2 {
                        a href={ "/page/" (page_no - 1) "/" } { "← Newer" }
                    } @else if page_no == 2 {
                        a href="/" { "← Newer" }
                    }
                    span.page-counter { "Page " (page_no) " of " (total_pages) }
                    @if page_no < total_pages {
                        a href={ "/page/" (page_no + 1) "/" } { "Older →" }
                    }
                }
            }
        }
        (site_footer(config))
    };

    let title = if page_no == 1 {
        config.title.clone()
    } else {
        format!("{} - page {}", config.title, page_no)
    };
    base_document(&title, &config.description, config, pathname, content)
}

/// Renders a post page: title, date, tags, rendered markdown body.
fn render_post_page(post: &PostRecord, config: &SiteConfig, pathname: &str) -> Markup {
    // Best-effort markdown render; maud escapes everything else, the body
    // is trusted author content
    let parser = Parser::new(&post.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        (site_header(config))
        main.post-page {
            article {
                header.post-header {
                    h1 { (post.frontmatter.title) }
                    time.post-date { (format_datetime(&post.frontmatter.datetime)) }
                    @if !post.frontmatter.tags.is_empty() {
                        ul.post-tags {
                            @for tag in &post.frontmatter.tags {
                                li { "#" (tag) }
                            }
                        }
                    }
                }
                div.post-body {
                    (PreEscaped(body_html))
                }
            }
        }
        (site_footer(config))
    };

    let title = format!("{} - {}", post.frontmatter.title, config.title);
    base_document(
        &title,
        &post.frontmatter.description,
        config,
        pathname,
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
