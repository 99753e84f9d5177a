//! Post parsing: frontmatter extraction and slug derivation.
//!
//! A post is a markdown file opening with a YAML frontmatter block:
//!
//! ```text
//! ---
//! title: Hello World
//! description: The first post.
//! datetime: 2023-01-15T09:30:00Z
//! draft: false
//! ---
//!
//! Markdown body...
//! ```
//!
//! ## Frontmatter fields
//!
//! - `title` (required): post title, also the slug source
//! - `description` (required): one-line summary for listings and the feed
//! - `datetime` (required): publish instant, see [`crate::datetime`]
//! - `draft` (optional, default false): excluded from production output
//! - `slug` (optional): explicit URL slug, overrides the title-derived one
//! - `tags` (optional): free-form labels shown on the post page
//!
//! The `datetime` value is carried as a raw string and NOT validated here —
//! a bad date surfaces downstream as `"Invalid Date"` display output or a
//! post dropped from the selection, never as a parse failure.
//!
//! ## Slug derivation
//!
//! Slugs end up in URLs and preview-image filenames, so title-derived slugs
//! are sanitized: lowercased, non-alphanumeric runs collapsed to single
//! dashes, trimmed, and capped at a word boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("missing frontmatter block (expected leading `---` fence)")]
    MissingFrontmatter,
    #[error("unterminated frontmatter block (no closing `---` fence)")]
    UnterminatedFrontmatter,
    #[error("frontmatter parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Structured metadata block at the top of a post file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    /// Publish instant as written by the author; parsed lazily downstream.
    pub datetime: String,
    /// Drafts are excluded from production listings, the feed, and previews.
    #[serde(default)]
    pub draft: bool,
    /// Explicit URL slug. When absent the slug is derived from the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// One parsed content entry: frontmatter, raw markdown body, derived slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub frontmatter: Frontmatter,
    /// Unrendered markdown body (frontmatter fences stripped).
    pub body: String,
    /// Canonical URL slug, stable for a given frontmatter.
    pub slug: String,
}

impl PostRecord {
    /// Canonical site-relative path of this post's page, with trailing slash.
    pub fn route(&self) -> String {
        format!("posts/{}/", self.slug)
    }
}

/// Parse one markdown document into a [`PostRecord`].
///
/// The frontmatter block is required; everything after the closing fence is
/// the raw body.
pub fn parse_post(content: &str) -> Result<PostRecord, PostError> {
    let (fm_text, body) = split_frontmatter(content)?;
    let frontmatter: Frontmatter = serde_yaml::from_str(fm_text)?;
    let slug = derive_slug(&frontmatter);
    Ok(PostRecord {
        frontmatter,
        body: body.to_string(),
        slug,
    })
}

/// Split a document into (frontmatter yaml, body).
fn split_frontmatter(content: &str) -> Result<(&str, &str), PostError> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
        .ok_or(PostError::MissingFrontmatter)?;

    // Closing fence: a line that is exactly `---`
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let fm = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((fm, body));
        }
        offset += line.len();
    }
    Err(PostError::UnterminatedFrontmatter)
}

/// Resolve the canonical slug for a frontmatter: explicit `slug` field wins,
/// otherwise sanitize the title.
fn derive_slug(fm: &Frontmatter) -> String {
    match fm.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => sanitize_slug(&fm.title),
    }
}

const MAX_SLUG_LEN: usize = 80;

/// Sanitize a title string for use in URLs and filenames.
///
/// - Lowercases ASCII letters
/// - Replaces non-alphanumeric characters (except dashes) with dashes
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at last dash before limit)
pub fn sanitize_slug(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive dashes
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_dash = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }

    // Strip leading/trailing dashes
    let trimmed = collapsed.trim_matches('-');

    // Truncate at word boundary (last dash before limit)
    if trimmed.len() <= MAX_SLUG_LEN {
        trimmed.to_string()
    } else {
        let truncated = &trimmed[..MAX_SLUG_LEN];
        match truncated.rfind('-') {
            Some(pos) => truncated[..pos].to_string(),
            None => truncated.to_string(),
        }
    }
}
