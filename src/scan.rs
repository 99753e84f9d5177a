//! Content scanning and manifest generation.
//!
//! Stage 1 of the quillpost build pipeline. Walks the content directory for
//! markdown posts, parses frontmatter, and produces a structured manifest
//! that subsequent stages consume.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── hello-world.md               # Post (any filename, slug from frontmatter)
//! ├── 2023/
//! │   └── year-in-review.md        # Posts may be nested arbitrarily
//! └── wip/
//!     └── upcoming.md              # draft: true → excluded in production
//! ```
//!
//! Any `.md` file anywhere under the root is a post; directory layout is the
//! author's filing system and carries no meaning. Identity comes from the
//! frontmatter-derived slug, which must therefore be unique across the tree.
//!
//! ## Output
//!
//! Produces a [`Manifest`] containing every parsed post (drafts included —
//! environment filtering happens at selection time, not scan time) plus the
//! site configuration.
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Every post must carry a parseable frontmatter block
//! - No two posts may resolve to the same slug

use crate::config::{self, SiteConfig};
use crate::post::{self, PostRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{}: {source}", path.display())]
    Post {
        path: PathBuf,
        source: post::PostError,
    },
    #[error("duplicate slug '{0}' ({first} and {second})", first = .1.display(), second = .2.display())]
    DuplicateSlug(String, PathBuf, PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub posts: Vec<PostRecord>,
    pub config: SiteConfig,
}

/// Scan a content root into a [`Manifest`].
///
/// Posts are collected in path order (deterministic across runs). Drafts are
/// kept — the selector decides visibility per environment.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let mut md_files: Vec<PathBuf> = Vec::new();
    // Hidden entries are pruned wholesale — nothing under .git or editor
    // state dirs is content
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
    });
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        {
            md_files.push(path.to_path_buf());
        }
    }
    md_files.sort();

    let mut posts = Vec::new();
    let mut seen_slugs: HashMap<String, PathBuf> = HashMap::new();
    for md_path in &md_files {
        let content = fs::read_to_string(md_path)?;
        let record = post::parse_post(&content).map_err(|source| ScanError::Post {
            path: md_path.clone(),
            source,
        })?;

        if let Some(first) = seen_slugs.get(&record.slug) {
            return Err(ScanError::DuplicateSlug(
                record.slug.clone(),
                first.clone(),
                md_path.clone(),
            ));
        }
        seen_slugs.insert(record.slug.clone(), md_path.clone());
        posts.push(record);
    }

    let config = config::load_config(root)?;

    Ok(Manifest { posts, config })
}
