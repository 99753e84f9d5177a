//! Social preview (OG) image generation.
//!
//! Stage 3 of the quillpost build pipeline, run after page generation. For
//! every generated route, an HTML card template is stamped with the route's
//! display title, rendered in headless Chrome, and captured as a 1200x630
//! PNG — the fixed size social platforms expect for link previews.
//!
//! ## Protocol
//!
//! 1. Create `<dist>/assets/ogs` (idempotent).
//! 2. Launch one headless Chrome process for the whole pass. Routes are
//!    processed sequentially against it; the `Browser` handle releases the
//!    process on every exit path, error paths included.
//! 3. Per route: substitute the display title into the template's first
//!    `${title}` occurrence, load the document in a fresh tab, wait for
//!    navigation to settle, capture the viewport, write the PNG.
//!
//! There is no per-route recovery: the first failure aborts the remaining
//! pass. The page build has already completed by then, so a failed pass
//! yields a site that is merely missing preview images.
//!
//! ## Naming
//!
//! Filenames are derived from pathnames, flat and deterministic:
//!
//! ```text
//! ""                      → og-image.png       (index)
//! "about/"                → about.png
//! "posts/hello-world/"    → posts--hello-world.png
//! ```
//!
//! Nested separators become `--` so distinct routes cannot collide in the
//! flat output directory.

use crate::generate::Route;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OgImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser error: {0}")]
    Browser(#[from] anyhow::Error),
}

/// Built-in card template, used when the config names no template file.
pub const DEFAULT_TEMPLATE: &str = include_str!("../static/og-image.html");

/// Viewport and capture size, the OG image convention.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

/// Display title for a route: the index gets an empty title, every other
/// route shows its pathname with the trailing slash stripped and a leading
/// slash added.
pub fn display_title(pathname: &str) -> String {
    if pathname.is_empty() {
        String::new()
    } else {
        format!("/{}", pathname.strip_suffix('/').unwrap_or(pathname))
    }
}

/// Output filename (without extension) for a route. The index maps to the
/// fixed name `og-image`; nested pathnames are flattened with `--`.
pub fn image_filename(pathname: &str) -> String {
    if pathname.is_empty() {
        "og-image".to_string()
    } else {
        pathname
            .strip_suffix('/')
            .unwrap_or(pathname)
            .replace('/', "--")
    }
}

/// Stamp the template with a title: single, first-occurrence substitution of
/// the literal `${title}` token.
pub fn render_template(template: &str, title: &str) -> String {
    template.replacen("${title}", title, 1)
}

/// Generate one preview image per route into `<output_dir>/assets/ogs`.
///
/// One browser process serves the whole pass; each route gets a fresh tab.
/// The first error aborts the remaining routes.
pub fn generate_previews(
    routes: &[Route],
    output_dir: &Path,
    template: &str,
) -> Result<(), OgImageError> {
    let ogs_dir = output_dir.join("assets/ogs");
    fs::create_dir_all(&ogs_dir)?;

    let browser = Browser::new(LaunchOptions {
        window_size: Some((WIDTH, HEIGHT)),
        ..Default::default()
    })?;

    // The stamped document is staged on disk so Chrome can load it over
    // file:// and resolve any fonts or images the template references.
    let stage_path = ogs_dir.join(".preview.html");

    for route in routes {
        let title = display_title(&route.pathname);
        let filename = image_filename(&route.pathname);
        let html = render_template(template, &title);

        fs::write(&stage_path, &html)?;
        let url = format!("file://{}", stage_path.canonicalize()?.display());

        let tab = browser.new_tab()?;
        tab.navigate_to(&url)?.wait_until_navigated()?;

        let png = tab.capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            Some(Page::Viewport {
                x: 0.0,
                y: 0.0,
                width: WIDTH as f64,
                height: HEIGHT as f64,
                scale: 1.0,
            }),
            true,
        )?;

        fs::write(ogs_dir.join(format!("{filename}.png")), png)?;
        println!("Generated assets/ogs/{filename}.png");
    }

    if stage_path.exists() {
        fs::remove_file(&stage_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_title_is_empty() {
        assert_eq!(display_title(""), "");
    }

    #[test]
    fn title_strips_trailing_slash_and_prefixes() {
        assert_eq!(display_title("about/"), "/about");
        assert_eq!(display_title("posts/hello-world/"), "/posts/hello-world");
    }

    #[test]
    fn title_without_trailing_slash() {
        assert_eq!(display_title("about"), "/about");
    }

    #[test]
    fn index_filename_is_fixed() {
        assert_eq!(image_filename(""), "og-image");
    }

    #[test]
    fn nested_filename_flattened_with_double_dash() {
        assert_eq!(image_filename("posts/hello-world/"), "posts--hello-world");
        assert_eq!(image_filename("page/2/"), "page--2");
    }

    #[test]
    fn top_level_filename_unchanged() {
        assert_eq!(image_filename("about/"), "about");
    }

    #[test]
    fn filenames_cannot_collide_across_nesting() {
        assert_ne!(image_filename("a/b/"), image_filename("a--b-x/"));
        assert_eq!(image_filename("a/b/"), "a--b");
    }

    #[test]
    fn filename_derivation_is_deterministic() {
        let routes = ["", "about/", "posts/hello-world/"];
        let first: Vec<String> = routes.iter().map(|r| image_filename(r)).collect();
        let second: Vec<String> = routes.iter().map(|r| image_filename(r)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn template_substitutes_first_occurrence_only() {
        let out = render_template("<h1>${title}</h1><p>${title}</p>", "/about");
        assert_eq!(out, "<h1>/about</h1><p>${title}</p>");
    }

    #[test]
    fn template_without_token_unchanged() {
        assert_eq!(render_template("<h1>static</h1>", "/x"), "<h1>static</h1>");
    }

    #[test]
    fn default_template_carries_token() {
        assert!(DEFAULT_TEMPLATE.contains("${title}"));
    }
}
