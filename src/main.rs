use clap::{Parser, Subcommand};
use folio::content::ContentDocument;
use folio::loader::{self, ContentSource};
use folio::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("FOLIO_GIT_HASH");
    if env!("FOLIO_ON_RELEASE_TAG") == "true" || hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for single-page portfolios")]
#[command(long_about = "\
Static site generator for single-page portfolios

One JSON document drives the page: project cards in three groups
(marketing, web3, ai), a blog list, and contact links.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── content.json       # Content document (or set content.source to a URL)
  └── assets/            # Copied to the output root (card images, favicon)

If the content document cannot be loaded or does not match the expected
shape, a built-in fallback document is used and a warning is logged.

Run 'folio gen-content' for a starter content.json and
'folio gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content and write the site
    Build,
    /// Load and validate content without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the built-in content document as a starter content.json
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::build_site(&cli.source, &cli.output)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            let source = ContentSource::parse(&site_config.content.source, &cli.source);
            println!("==> Checking {}", source);
            let loaded = loader::load(&source, site_config.content.timeout());
            output::print_check_output(&loaded, &source.to_string());
            if loaded.is_fallback() {
                return Err(format!("{source} could not be used").into());
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            println!("{}", ContentDocument::fallback_json());
        }
    }

    Ok(())
}
