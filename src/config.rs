//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root. The
//! configuration is an immutable value constructed once per run and passed
//! by reference into every component that needs it — site metadata for page
//! rendering, channel metadata for the feed, template location for the
//! preview-image pass.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Blog"                  # Site title (pages, feed channel)
//! description = "A personal blog"    # Site description (meta, feed channel)
//! base_url = "https://example.com"   # Canonical site URL (feed links, og tags)
//! author = "Anonymous"               # Author name (footer, feed)
//! posts_per_page = 5                 # Posts per index/listing page
//!
//! [[socials]]                        # Footer links (repeat per entry)
//! name = "Github"
//! href = "https://github.com/example"
//!
//! [og]
//! enable = true                      # Generate social preview images
//! template = ""                      # Path to an og-image.html template;
//!                                    # empty = built-in template
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used in page titles and as the feed channel title.
    pub title: String,
    /// One-line site description for meta tags and the feed channel.
    pub description: String,
    /// Canonical site URL, no trailing slash (e.g. "https://example.com").
    pub base_url: String,
    /// Author name shown in the footer and feed.
    pub author: String,
    /// Number of posts per listing page.
    pub posts_per_page: usize,
    /// Social links rendered in the footer.
    pub socials: Vec<Social>,
    /// Social preview image settings.
    pub og: OgConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "A personal blog".to_string(),
            base_url: "https://example.com".to_string(),
            author: "Anonymous".to_string(),
            posts_per_page: 5,
            socials: Vec::new(),
            og: OgConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_per_page == 0 {
            return Err(ConfigError::Validation(
                "posts_per_page must be at least 1".into(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        for social in &self.socials {
            if social.name.is_empty() || social.href.is_empty() {
                return Err(ConfigError::Validation(
                    "socials entries need both name and href".into(),
                ));
            }
        }
        Ok(())
    }

    /// Canonical URL with no trailing slash, for link building.
    pub fn site_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// A footer social link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    pub name: String,
    pub href: String,
}

/// Social preview image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OgConfig {
    /// Whether the preview-image pass runs as part of `build`.
    pub enable: bool,
    /// Path to a template HTML file containing a `${title}` placeholder,
    /// relative to the content root. Empty string = built-in template.
    pub template: String,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            enable: true,
            template: String::new(),
        }
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml` with every option at its default,
/// printed by the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    r#"# quillpost site configuration
# All options are optional - defaults shown below.

# Site title, used in page titles and as the feed channel title.
title = "My Blog"

# One-line site description for meta tags and the feed channel.
description = "A personal blog"

# Canonical site URL, no trailing slash. Used for feed links and og tags.
base_url = "https://example.com"

# Author name shown in the footer and feed.
author = "Anonymous"

# Number of posts per listing page.
posts_per_page = 5

# Social links rendered in the footer. Repeat the block per entry.
# [[socials]]
# name = "Github"
# href = "https://github.com/example"

[og]
# Generate a 1200x630 social preview image per page (requires Chrome).
enable = true
# Path to an HTML template with a ${title} placeholder, relative to the
# content root. Leave empty to use the built-in template.
template = ""
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_per_page, 5);
        assert!(config.og.enable);
    }

    #[test]
    fn partial_config_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "title = \"Field Notes\"\nposts_per_page = 10\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Field Notes");
        assert_eq!(config.posts_per_page, 10);
        // Untouched fields keep defaults
        assert_eq!(config.author, "Anonymous");
    }

    #[test]
    fn socials_parsed() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[[socials]]\nname = \"Github\"\nhref = \"https://github.com/x\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.socials.len(), 1);
        assert_eq!(config.socials[0].name, "Github");
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "titel = \"typo\"\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_posts_per_page_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "posts_per_page = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "base_url = \"example.com\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn site_url_strips_trailing_slash() {
        let config = SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.site_url(), "https://example.com");
    }

    #[test]
    fn stock_config_parses_and_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.title, defaults.title);
        assert_eq!(parsed.posts_per_page, defaults.posts_per_page);
        assert_eq!(parsed.og.enable, defaults.og.enable);
    }
}
