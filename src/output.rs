//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every post is its semantic identity — positional index, title, and
//! publish date — with slugs and routes shown as secondary context via
//! indented lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts
//! 001 Hello World — January 15, 2023
//!     Slug: hello-world
//! 002 Work In Progress — March 5, 2023 [draft]
//!     Slug: work-in-progress
//!
//! Config
//!     title: My Blog
//!     base_url: https://example.com
//! ```
//!
//! ## Generate
//!
//! ```text
//! Routes
//! 001 /
//! 002 /page/2/
//! 003 /posts/hello-world/
//!
//! Generated 3 pages, 1 feed
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::datetime::format_datetime;
use crate::generate::Route;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format scan stage output: discovered posts plus the loaded config.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Posts".to_string());
    if manifest.posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in manifest.posts.iter().enumerate() {
        let marker = if post.frontmatter.draft { " [draft]" } else { "" };
        lines.push(format!(
            "{} {} — {}{}",
            format_index(i + 1),
            post.frontmatter.title,
            format_datetime(&post.frontmatter.datetime),
            marker
        ));
        lines.push(format!("    Slug: {}", post.slug));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    title: {}", manifest.config.title));
    lines.push(format!("    base_url: {}", manifest.config.base_url));

    lines
}

/// Format generate stage output: emitted routes and totals.
pub fn format_generate_output(routes: &[Route]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Routes".to_string());
    for (i, route) in routes.iter().enumerate() {
        lines.push(format!("{} /{}", format_index(i + 1), route.pathname));
    }

    lines.push(String::new());
    lines.push(format!("Generated {} pages, 1 feed", routes.len()));

    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

pub fn print_generate_output(routes: &[Route]) {
    for line in format_generate_output(routes) {
        println!("{line}");
    }
}
