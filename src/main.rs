use clap::{Parser, Subcommand};
use quillpost::select::Environment;
use quillpost::{config, generate, ogimage, output, scan};
use std::fs;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "quillpost")]
#[command(about = "Static site generator for personal blogs")]
#[command(long_about = "\
Static site generator for personal blogs

Markdown files with YAML frontmatter become a static HTML site with a
paginated post listing, an RSS feed, and a 1200x630 social preview image
per page (rendered with a local headless Chrome).

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── og-image.html                # Preview card template (optional, [og] template)
  ├── hello-world.md               # Post — any filename, slug from frontmatter
  ├── 2023/
  │   └── year-in-review.md        # Posts may be nested arbitrarily
  └── wip/
      └── upcoming.md              # draft: true → production builds skip it

Frontmatter fields:
  title:       required — post title, slug source
  description: required — one-line summary for listings and the feed
  datetime:    required — RFC 3339, naive datetime, or bare YYYY-MM-DD
  draft:       optional — excluded from production output and the feed
  slug:        optional — explicit URL slug
  tags:        optional — labels shown on the post page

Run 'quillpost gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest, route list)
    #[arg(long, default_value = ".quillpost-temp", global = true)]
    temp_dir: PathBuf,

    /// Build environment; drafts are visible everywhere except production
    #[arg(long, value_enum, default_value = "production", global = true)]
    env: Environment,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the HTML site and feed from a scanned manifest
    Generate,
    /// Capture social preview images for generated routes
    Previews,
    /// Run the full pipeline: scan → generate → previews
    Build,
    /// Validate content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate => {
            let manifest = generate::load_manifest(&cli.temp_dir.join("manifest.json"))?;
            let routes = generate::generate(&manifest, &cli.output, cli.env)?;
            let json = serde_json::to_string_pretty(&routes)?;
            fs::write(cli.temp_dir.join("routes.json"), json)?;
            output::print_generate_output(&routes);
        }
        Command::Previews => {
            let manifest = generate::load_manifest(&cli.temp_dir.join("manifest.json"))?;
            let routes: Vec<generate::Route> =
                serde_json::from_str(&fs::read_to_string(cli.temp_dir.join("routes.json"))?)?;
            let template = load_template(&cli.source, &manifest.config)?;
            ogimage::generate_previews(&routes, &cli.output, &template)?;
        }
        Command::Build => {
            fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let routes = generate::generate(&manifest, &cli.output, cli.env)?;
            let json = serde_json::to_string_pretty(&routes)?;
            fs::write(cli.temp_dir.join("routes.json"), json)?;
            output::print_generate_output(&routes);

            if manifest.config.og.enable {
                println!("==> Stage 3: Capturing preview images");
                let template = load_template(&cli.source, &manifest.config)?;
                ogimage::generate_previews(&routes, &cli.output, &template)?;
            } else {
                println!("==> Stage 3: Preview images disabled ([og] enable = false)");
            }

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the preview card template: the file named by `[og] template`
/// (relative to the content root), or the built-in template.
fn load_template(source: &Path, config: &config::SiteConfig) -> std::io::Result<String> {
    if config.og.template.is_empty() {
        Ok(ogimage::DEFAULT_TEMPLATE.to_string())
    } else {
        fs::read_to_string(source.join(&config.og.template))
    }
}
