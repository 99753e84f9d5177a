//! Post selection: draft filtering and publish-date ordering.
//!
//! Pure transformation over a post collection. Page rendering uses the
//! environment-aware policy (drafts visible outside production); the feed
//! has its own stricter policy in [`crate::feed`].

use crate::datetime::epoch_seconds;
use crate::post::PostRecord;
use serde::{Deserialize, Serialize};

/// Build environment. Drafts are visible everywhere except production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

/// Filter and order a post collection for listing.
///
/// - Keeps a post iff `!draft` or the environment is not production.
/// - Drops posts whose datetime does not parse; a post without a valid
///   publish instant has no defined position in the listing.
/// - Sorts descending by whole-second publish time. The sort is stable, so
///   posts stamped within the same second keep their input order.
pub fn select_posts(posts: &[PostRecord], env: Environment) -> Vec<PostRecord> {
    let mut selected: Vec<(i64, PostRecord)> = posts
        .iter()
        .filter(|p| !p.frontmatter.draft || env != Environment::Production)
        .filter_map(|p| epoch_seconds(&p.frontmatter.datetime).map(|ts| (ts, p.clone())))
        .collect();

    selected.sort_by_key(|(ts, _)| std::cmp::Reverse(*ts));
    selected.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Frontmatter;

    fn post(title: &str, datetime: &str, draft: bool) -> PostRecord {
        PostRecord {
            frontmatter: Frontmatter {
                title: title.to_string(),
                description: format!("{title} description"),
                datetime: datetime.to_string(),
                draft,
                slug: None,
                tags: vec![],
            },
            body: String::new(),
            slug: crate::post::sanitize_slug(title),
        }
    }

    #[test]
    fn sorts_descending_by_datetime() {
        let posts = vec![
            post("Old", "2022-01-01", false),
            post("New", "2024-01-01", false),
            post("Mid", "2023-01-01", false),
        ];
        let selected = select_posts(&posts, Environment::Production);
        let titles: Vec<&str> = selected
            .iter()
            .map(|p| p.frontmatter.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn production_excludes_drafts() {
        let posts = vec![
            post("Published", "2023-01-01", false),
            post("Draft", "2023-06-01", true),
        ];
        let selected = select_posts(&posts, Environment::Production);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].frontmatter.title, "Published");
    }

    #[test]
    fn development_includes_drafts() {
        let posts = vec![
            post("Published", "2023-01-01", false),
            post("Draft", "2023-06-01", true),
        ];
        let selected = select_posts(&posts, Environment::Development);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].frontmatter.title, "Draft");
    }

    #[test]
    fn unparseable_datetime_dropped() {
        let posts = vec![
            post("Good", "2023-01-01", false),
            post("Bad", "someday", false),
        ];
        let selected = select_posts(&posts, Environment::Production);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].frontmatter.title, "Good");
    }

    #[test]
    fn output_never_larger_than_input() {
        let posts = vec![
            post("A", "2023-01-01", false),
            post("B", "bad-date", false),
            post("C", "2023-02-01", true),
        ];
        for env in [Environment::Production, Environment::Development] {
            assert!(select_posts(&posts, env).len() <= posts.len());
        }
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let posts = vec![
            post("First", "2023-01-15T00:00:00Z", false),
            post("Second", "2023-01-15T00:00:00Z", false),
        ];
        let selected = select_posts(&posts, Environment::Production);
        assert_eq!(selected[0].frontmatter.title, "First");
        assert_eq!(selected[1].frontmatter.title, "Second");
    }

    #[test]
    fn subsecond_difference_compares_equal() {
        // Floored to whole seconds, so the stable order (input order) wins
        let posts = vec![
            post("A", "2023-01-15T00:00:00.100Z", false),
            post("B", "2023-01-15T00:00:00.900Z", false),
        ];
        let selected = select_posts(&posts, Environment::Production);
        assert_eq!(selected[0].frontmatter.title, "A");
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(select_posts(&[], Environment::Production).is_empty());
    }
}
