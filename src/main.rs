use clap::{Parser, Subcommand};
use devlog_site::{config, emit, output, resolve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devlog-site")]
#[command(about = "Configuration builder for the Development Log documentation site")]
#[command(long_about = "\
Configuration builder for the Development Log documentation site

Loads site.toml (stock defaults plus sparse overrides), validates the
navigation invariants, and emits the site.json manifest the static-site
generator consumes.

Site structure:

  site/
  ├── site.toml                # Site config (optional, sparse overrides)
  └── docs/                    # Content pages checked by 'check --docs'
      ├── index.md             # → /
      └── docs/
          ├── spring.md        # → /docs/spring
          └── jpa.md           # → /docs/jpa

Validation rules:
  Links:       site-absolute paths (/docs/spring) or absolute http(s) URLs
  Nav:         links must be unique across the nav
  Sidebar:     declared groups need at least one item
  Social:      absolute URLs with a known provider icon

Run 'devlog-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    site_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the site configuration
    Check {
        /// Also verify internal links against a docs content directory
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// Write the validated site.json manifest for the generator
    Emit {
        /// Output path for the manifest
        #[arg(long, default_value = "site.json")]
        out: PathBuf,
    },
    /// Print the resolved navigation, sidebar, and social links
    Show,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { docs } => {
            println!("==> Checking {}", cli.site_dir.display());
            let config = config::load_config(&cli.site_dir)?;
            if let Some(docs_dir) = docs {
                let index = resolve::index_docs(&docs_dir)?;
                let warnings = resolve::resolve_links(&config, &index)?;
                for warning in &warnings {
                    println!("warning: {warning}");
                }
                println!(
                    "==> {} pages indexed, all internal links resolve",
                    index.len()
                );
            }
            println!("==> Configuration is valid");
        }
        Command::Emit { out } => {
            let config = config::load_config(&cli.site_dir)?;
            emit::write_manifest(&config, &out)?;
            println!("==> Wrote {}", out.display());
        }
        Command::Show => {
            let config = config::load_config(&cli.site_dir)?;
            output::print_show(&config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
