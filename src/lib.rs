//! # quillpost
//!
//! A minimal static site generator for personal blogs. Markdown files with
//! YAML frontmatter become a static HTML site with a paginated post listing,
//! an RSS feed, and a social preview image per page.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! quillpost processes content through three independent stages:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json           (markdown → post records)
//! 2. Generate  manifest  →  dist/ + routes.json     (HTML pages + rss.xml)
//! 3. Previews  routes    →  dist/assets/ogs/*.png   (headless-Chrome captures)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest and route list are human-readable JSON
//!   you can inspect between stages.
//! - **Partial runs**: the preview stage needs a local Chrome; everything
//!   before it runs anywhere, and `build` can skip previews entirely.
//! - **Testability**: selection, feed building, and naming are pure
//!   functions over post records, so unit tests never touch a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses frontmatter, produces the manifest |
//! | [`generate`] | Stage 2 — renders listing and post pages with Maud, writes the feed, emits routes |
//! | [`ogimage`] | Stage 3 — stamps the card template per route and captures 1200x630 PNGs |
//! | [`post`] | Frontmatter parsing and slug derivation |
//! | [`select`] | Draft filtering and publish-date ordering |
//! | [`feed`] | RSS 2.0 channel construction (sanitized HTML content) |
//! | [`datetime`] | Lenient datetime parsing and "Month DD, YYYY" display |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Drafts Are Data, Not Absence
//!
//! The scanner keeps drafts in the manifest. Visibility is a policy applied
//! at selection time: listings include drafts outside production builds,
//! while the feed — a public artifact built once — excludes them always.
//! Draft routes never exist in production, so no preview image is ever
//! produced for them.
//!
//! ## One Browser, Many Tabs
//!
//! The preview pass launches a single Chrome process and walks the routes
//! sequentially, one fresh tab each. Process launch is the expensive part;
//! tabs are cheap. The handle is scoped, so the process is released on
//! error paths too.
//!
//! ## Content Errors Degrade, Build Errors Abort
//!
//! A bad frontmatter date renders as `"Invalid Date"` and drops the post
//! from ordered listings; it never aborts a build. Structural problems —
//! unparseable frontmatter, duplicate slugs, a failed screenshot pass — are
//! hard errors surfaced immediately.

pub mod config;
pub mod datetime;
pub mod feed;
pub mod generate;
pub mod ogimage;
pub mod output;
pub mod post;
pub mod scan;
pub mod select;
